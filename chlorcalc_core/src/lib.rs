//! # chlorcalc_core - Chlor-Alkali Cost & Yield Engine
//!
//! `chlorcalc_core` computes derived production volumes, unit costs,
//! and gross-contribution margins for a chlor-alkali manufacturing
//! line (caustic soda, sodium hypochlorite, liquid chlorine, HCl,
//! hydrogen) from one day's production quantities and unit costs. It
//! gives plant cost accountants an instant cost-and-margin snapshot
//! without a spreadsheet.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input record to metrics
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types at the input boundary
//! - **Faithful rounding**: published figures reproduce the plant's
//!   reference report bit-for-bit, including its mix of rounded and
//!   raw intermediates
//!
//! ## Quick Start
//!
//! ```rust
//! use chlorcalc_core::{compute_metrics, PlantInput};
//!
//! let input = PlantInput {
//!     caustic_soda_prod_tons: 100.0,
//!     caustic_soda_sale_price_rs: 30_000.0,
//!     ..PlantInput::default()
//! };
//!
//! let metrics = compute_metrics(&input);
//! for group in metrics.report() {
//!     println!("{}: {} figures", group.title, group.metrics.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Input record, metrics record, and the engine
//! - [`constants`] - Fixed chemical/process conversion factors
//! - [`report`] - Ordered label/value projection for rendering
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_metrics, DailyMetrics, PlantInput};
pub use errors::{CalcError, CalcResult};
pub use report::{Metric, MetricGroup};
