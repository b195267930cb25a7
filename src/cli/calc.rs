//! What-if impact calculator

use anyhow::{Result, bail};

use ecotrack::stats::ImpactEstimate;
use ecotrack::{Category, Unit, parse_quantity};

/// Estimate the savings of disposing of `quantity` of `waste_type` in `category`
pub fn calc_command(category: &str, waste_type: &str, quantity: &str, unit: Option<&str>) -> Result<()> {
    let Some(category) = Category::from_str(category) else {
        bail!("Unknown category: {}", category);
    };
    let quantity = parse_quantity(quantity)?;
    let unit = unit.map(Unit::parse).unwrap_or_default();
    let kg = unit.to_kg(quantity);

    let impact = ImpactEstimate::estimate(category, waste_type, kg);

    println!("{} {} of {} as {}:", quantity, unit, waste_type, category.label());
    if impact.is_zero() {
        println!("  No savings: {} waste is not recovered.", category.as_str());
        return Ok(());
    }
    println!("  CO2 saved:    {:.2} kg", impact.co2_saved);
    println!("  Energy saved: {:.2} kWh", impact.energy_saved);
    println!("  Water saved:  {:.1} L", impact.water_saved);
    println!("  Trees saved:  {:.3}", impact.trees_saved);

    Ok(())
}
