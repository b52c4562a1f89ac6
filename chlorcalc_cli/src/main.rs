//! # ChlorCalc CLI
//!
//! Terminal front end for the chlor-alkali cost and yield engine.
//! Collects the day's figures on stdin, validates them, and renders
//! the five report tables plus a JSON block for downstream tooling.
//!
//! The hydrogen draws of the HCl and stearic-acid units are fixed
//! operational figures, so they are not prompted for; pass them in a
//! JSON input record if a unit's draw changes.

use std::io::{self, BufRead, Write};

use chlorcalc_core::{compute_metrics, PlantInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("ChlorCalc - Chemical Production Cost Analysis");
    println!("=============================================");
    println!();
    println!("Caustic Soda and By-products Calculator");
    println!("Press Enter to accept the [default] for any figure.");
    println!();

    let input = PlantInput {
        caustic_soda_prod_tons: prompt_f64("Caustic Soda production (TPD) [0.0]: ", 0.0),
        sodium_hypo_prod_tons: prompt_f64("Sodium Hypochlorite production (tons) [0.0]: ", 0.0),
        liquid_chlorine_prod_tons: prompt_f64("Liquid Chlorine production (tons) [0.0]: ", 0.0),
        power_rate_rs: prompt_f64("Power Rate (Rs per unit) [0.0]: ", 0.0),
        steam_cost_rs: prompt_f64("Steam Cost (Rs per ton) [0.0]: ", 0.0),
        demin_water_cost_rs: prompt_f64("Demin Water Cost (Rs per m³) [0.0]: ", 0.0),
        chemical_cost_rs: prompt_f64("Other Chemical Costs (Rs per ton) [0.0]: ", 0.0),
        caustic_soda_sale_price_rs: prompt_f64("Sale Price of Caustic Soda (Rs per ton) [0.0]: ", 0.0),
        sodium_hypo_sale_price_rs: prompt_f64("Sale Price of Sodium Hypochlorite (Rs per ton) [0.0]: ", 0.0),
        hcl_sale_price_rs: prompt_f64("Sale Price of HCl (Rs per ton) [0.0]: ", 0.0),
        ..PlantInput::default()
    };

    if let Err(e) = input.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    let metrics = compute_metrics(&input);

    println!();
    for group in metrics.report() {
        println!("═══════════════════════════════════════════════");
        println!("  {}", group.title.to_uppercase());
        println!("═══════════════════════════════════════════════");
        for metric in &group.metrics {
            println!("  {:<42} {:>14.2}", metric.label, metric.value);
        }
        println!();
    }

    println!("JSON Output (for downstream tooling):");
    if let Ok(json) = serde_json::to_string_pretty(&metrics) {
        println!("{}", json);
    }
}
