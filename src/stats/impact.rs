//! Environmental impact factors
//!
//! Fixed linear factors applied per kilogram of diverted material. The same
//! factors drive both the aggregated dashboard stats and the what-if
//! calculator.

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Savings per kilogram of material
pub struct ImpactFactors;

impl ImpactFactors {
    /// kg CO2 avoided per kg recycled
    pub const CO2_PER_KG: f64 = 2.5;

    /// kWh saved per kg recycled
    pub const ENERGY_PER_KG: f64 = 5.0;

    /// Liters of water saved per kg recycled
    pub const WATER_PER_KG: f64 = 50.0;

    /// Trees saved per kg of recycled paper
    pub const TREES_PER_KG_PAPER: f64 = 0.02;

    /// kg CO2 avoided per kg composted (less landfill methane)
    pub const COMPOST_CO2_PER_KG: f64 = 0.5;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub co2_saved: f64,
    pub energy_saved: f64,
    pub trees_saved: f64,
    pub water_saved: f64,
}

impl ImpactEstimate {
    /// Savings from recycling `kg` of material described as `waste_type`
    pub fn recycled(kg: f64, waste_type: &str) -> Self {
        Self {
            co2_saved: kg * ImpactFactors::CO2_PER_KG,
            energy_saved: kg * ImpactFactors::ENERGY_PER_KG,
            trees_saved: if is_paper(waste_type) {
                kg * ImpactFactors::TREES_PER_KG_PAPER
            } else {
                0.0
            },
            water_saved: kg * ImpactFactors::WATER_PER_KG,
        }
    }

    /// What-if estimate for disposing of `kg` in `category`.
    ///
    /// Composting organic waste is credited with CO2 savings only; hazardous
    /// and general waste save nothing.
    pub fn estimate(category: Category, waste_type: &str, kg: f64) -> Self {
        match category {
            Category::Recyclable => Self::recycled(kg, waste_type),
            Category::Organic => Self {
                co2_saved: kg * ImpactFactors::COMPOST_CO2_PER_KG,
                ..Self::default()
            },
            Category::Hazardous | Category::General => Self::default(),
        }
    }

    pub fn accumulate(&mut self, other: &Self) {
        self.co2_saved += other.co2_saved;
        self.energy_saved += other.energy_saved;
        self.trees_saved += other.trees_saved;
        self.water_saved += other.water_saved;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

fn is_paper(waste_type: &str) -> bool {
    waste_type.to_lowercase().contains("paper")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_recycled_plastic() {
        let impact = ImpactEstimate::recycled(10.0, "Plastic Bottles");
        assert!(close(impact.co2_saved, 25.0));
        assert!(close(impact.energy_saved, 50.0));
        assert!(close(impact.water_saved, 500.0));
        assert_eq!(impact.trees_saved, 0.0);
    }

    #[test]
    fn test_paper_match_is_case_insensitive() {
        assert!(close(ImpactEstimate::recycled(10.0, "NEWSPAPER").trees_saved, 0.2));
        assert!(close(ImpactEstimate::recycled(10.0, "white Paper").trees_saved, 0.2));
    }

    #[test]
    fn test_estimate_by_category() {
        let compost = ImpactEstimate::estimate(Category::Organic, "Peels", 4.0);
        assert!(close(compost.co2_saved, 2.0));
        assert_eq!(compost.energy_saved, 0.0);
        assert_eq!(compost.water_saved, 0.0);

        assert!(ImpactEstimate::estimate(Category::Hazardous, "Paint", 4.0).is_zero());
        assert!(ImpactEstimate::estimate(Category::General, "Paper cup", 4.0).is_zero());
    }
}
