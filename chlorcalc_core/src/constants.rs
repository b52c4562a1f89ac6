//! # Process Constants
//!
//! Fixed chemical and process conversion factors for the chlor-alkali
//! line. These are plant-derived figures, never user-supplied; changing
//! one means the membrane cells or a downstream unit changed, not the
//! operator's mood.
//!
//! All factors are per metric ton of caustic soda unless noted.

/// Tons of chlorine produced per ton of caustic soda.
pub const CHLORINE_FACTOR: f64 = 0.889;

/// Tons of chlorine consumed per ton of sodium hypochlorite.
pub const HYPO_CHLORINE_USAGE: f64 = 0.22;

/// Fraction of produced chlorine lost to neutralization.
pub const CHLORINE_NEUTRALIZATION: f64 = 0.017;

/// Tons of chlorine consumed per ton of HCl produced.
pub const HCL_CHLORINE_USAGE: f64 = 0.32;

/// Fraction of caustic soda production matched by in-house HCl use.
pub const IN_HOUSE_HCL_FRACTION: f64 = 0.05;

/// Cell power draw in KWH per ton of caustic soda.
pub const POWER_RATE_PER_TON: f64 = 2400.0;

/// Tons of hydrogen produced per ton of caustic soda.
pub const HYDROGEN_PROD_PERCENTAGE: f64 = 0.026;

/// NM³ of hydrogen per metric ton (34819 NM³ per 3.12 MT).
pub const HYDROGEN_NM3_PER_MT: f64 = 34819.0 / 3.12;

/// Power units consumed per ton at the unit-cost stage.
pub const POWER_FACTOR: f64 = 2380.0;

/// Tons of steam consumed per ton of caustic soda.
pub const STEAM_FACTOR: f64 = 1.37;

/// m³ of demineralized water consumed per ton of caustic soda.
pub const DEMIN_WATER_FACTOR: f64 = 10.50;

/// Fraction of production cost attributed to caustic soda self-use.
pub const CAUSTIC_SODA_SELF_USE_PCT: f64 = 0.025;

/// Sodium hypo cost as a fraction of the caustic soda cost per ton.
pub const HYPO_COST_FACTOR: f64 = 0.22;

/// Operational hydrogen draw of the HCl synthesis unit [NM³/day].
pub const DEFAULT_HCL_HYDROGEN_USAGE_NM3: f64 = 17228.0;

/// Operational hydrogen draw of the stearic-acid unit [NM³/day].
pub const DEFAULT_STEARIC_HYDROGEN_USAGE_NM3: f64 = 5400.0;
