//! Crave Radar library exports for testing

pub mod core;
pub mod location;
pub mod places;
pub mod tui;

#[cfg(test)]
pub mod test_support;
