//! # Location Service
//!
//! One-shot device location: ask for permission once, then read the current
//! position once. No continuous tracking.
//!
//! A terminal has no GPS, so the shipped implementation is
//! [`FixedLocationService`], fed from CLI flags, env vars or the config file.
//! Having no coordinate configured behaves exactly like a denied permission.

use std::fmt;

use async_trait::async_trait;
use log::{info, warn};

use crate::core::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// The user (or the environment) refused location access.
    PermissionDenied,
    /// Permission was granted but no position could be read.
    Unavailable(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "Permission to access location was denied"),
            LocationError::Unavailable(msg) => write!(f, "location unavailable: {msg}"),
        }
    }
}

impl std::error::Error for LocationError {}

impl LocationError {
    /// The text of the blocking alert shown for this error.
    pub fn alert_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Permission to access location was denied",
            LocationError::Unavailable(_) => "An error occurred while fetching location.",
        }
    }
}

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Permission request followed by a single position read.
pub async fn acquire(service: &dyn LocationService) -> Result<Coordinate, LocationError> {
    if service.request_permission().await != PermissionStatus::Granted {
        warn!("Location permission denied");
        return Err(LocationError::PermissionDenied);
    }
    let position = service.current_position().await?;
    info!(
        "Location acquired: {},{}",
        position.latitude, position.longitude
    );
    Ok(position)
}

/// A location service that always reports the same point.
pub struct FixedLocationService {
    coordinate: Option<Coordinate>,
}

impl FixedLocationService {
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationService for FixedLocationService {
    async fn request_permission(&self) -> PermissionStatus {
        if self.coordinate.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        let coordinate = self
            .coordinate
            .ok_or_else(|| LocationError::Unavailable("no coordinate configured".to_string()))?;
        validate(coordinate)
    }
}

/// Reject coordinates outside the valid degree ranges.
pub fn validate(coordinate: Coordinate) -> Result<Coordinate, LocationError> {
    let lat_ok = (-90.0..=90.0).contains(&coordinate.latitude);
    let lng_ok = (-180.0..=180.0).contains(&coordinate.longitude);
    if lat_ok && lng_ok {
        Ok(coordinate)
    } else {
        Err(LocationError::Unavailable(format!(
            "coordinate out of range: {},{}",
            coordinate.latitude, coordinate.longitude
        )))
    }
}
