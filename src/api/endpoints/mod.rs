//! API endpoint handlers.
//!
//! One module per dashboard screen. Handlers stay thin: validate,
//! delegate to the store or the care intake, map errors.

pub mod alerts;
pub mod dashboard;
pub mod donations;
pub mod health;
pub mod residents;
pub mod staff;
pub mod status;
