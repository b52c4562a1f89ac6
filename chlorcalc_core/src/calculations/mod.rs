//! # Production Calculations
//!
//! Calculation modules follow a single pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Metrics` - Calculation results (JSON-serializable)
//! - `compute_*(input) -> *Metrics` - Pure calculation function
//!
//! The engine is stateless: same input always yields the same output,
//! and nothing outside the returned record is touched.
//!
//! ## Available Calculations
//!
//! - [`chlor_alkali`] - Daily cost-and-margin snapshot for the
//!   chlor-alkali line (caustic soda, hypo, chlorine, HCl, hydrogen)

pub mod chlor_alkali;

// Re-export commonly used types
pub use chlor_alkali::{compute_metrics, DailyMetrics, PlantInput};

/// Round to 2 decimal places, the reporting precision for every
/// published figure.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
