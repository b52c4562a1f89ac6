//! # Report View
//!
//! Ordered label → value projection of a [`DailyMetrics`] record for
//! rendering collaborators. Groups and metric order match the plant's
//! published report tables; labels carry the units the accountants
//! expect to see.

use serde::{Deserialize, Serialize};

use crate::calculations::DailyMetrics;

/// One labeled, rounded figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Human-readable label, unit suffix included
    pub label: String,

    /// Rounded value (2 decimal places)
    pub value: f64,
}

/// A titled, ordered group of metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricGroup {
    /// Section title (e.g. "Production Results")
    pub title: String,

    /// Metrics in report order
    pub metrics: Vec<Metric>,
}

impl MetricGroup {
    fn new(title: &str, rows: Vec<(&str, f64)>) -> Self {
        MetricGroup {
            title: title.to_string(),
            metrics: rows
                .into_iter()
                .map(|(label, value)| Metric {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

impl DailyMetrics {
    /// Project the record into the five report groups, in publication
    /// order: Production, Power, Cost, RMC, GC.
    pub fn report(&self) -> Vec<MetricGroup> {
        let p = &self.production;
        let w = &self.power;

        vec![
            MetricGroup::new(
                "Production Results",
                vec![
                    ("Chlorine Production (tons/day)", p.chlorine_production_tons),
                    ("Chlorine Used in Hypo Production (tons)", p.chlorine_used_in_hypo_tons),
                    ("Chlorine Neutralized (tons)", p.chlorine_neutralized_tons),
                    ("Net Chlorine Available for HCl (tons)", p.net_chlorine_available_tons),
                    ("Total HCl Production (tons)", p.hcl_production_tons),
                    ("HCl Used In-House (tons)", p.hcl_in_house_tons),
                    ("Net HCl Available for Sale (tons)", p.net_hcl_for_sale_tons),
                    ("Hydrogen Production (MT)", p.hydrogen_production_mt),
                    ("Hydrogen Production (NM³)", p.hydrogen_production_nm3),
                    ("Balance Hydrogen NM³", p.balance_hydrogen_nm3),
                    ("Balance Hydrogen Waste (%)", p.balance_hydrogen_waste_pct),
                    ("Total Power Used (KWH)", p.total_power_used_kwh),
                    ("Power Used per ton Caustic Soda (KWH)", p.power_per_ton_caustic_soda_kwh),
                ],
            ),
            MetricGroup::new(
                "Power Costs",
                vec![
                    ("Power Cost (Rs/ton)", w.power_cost_rs),
                    ("Steam Cost (Rs/ton)", w.steam_cost_rs),
                    ("Demin Water Cost (Rs/ton)", w.demin_water_cost_rs),
                    ("Other Chemical Costs (Rs/ton)", w.chemical_cost_rs),
                    ("Total Cost of Production (Rs/ton)", w.cost_of_production_rs),
                    ("Caustic Soda Usage Cost (Rs/ton)", w.caustic_soda_usage_cost_rs),
                    ("Total Cost per ton (Rs)", w.total_cost_per_ton_rs),
                    ("Sodium Hypo Cost (Rs)", w.sodium_hypo_cost_rs),
                ],
            ),
            MetricGroup::new(
                "Cost Summary",
                vec![("Sales Total (Rs)", self.cost.total_sales_rs)],
            ),
            MetricGroup::new(
                "RMC Summary",
                vec![
                    ("RMC Caustic Soda (Rs)", self.rmc.rmc_caustic_soda_rs),
                    ("RMC Sodium Hypochlorite (Rs)", self.rmc.rmc_sodium_hypo_rs),
                    ("Total RMC (Rs)", self.rmc.total_rmc_rs),
                ],
            ),
            MetricGroup::new(
                "GC Summary",
                vec![
                    ("Total GC (Rs)", self.gc.total_gc_rs),
                    ("GC per kg (Rs)", self.gc.gc_per_kg_rs),
                    ("GC Percentage (%)", self.gc.gc_percentage),
                ],
            ),
        ]
    }
}
