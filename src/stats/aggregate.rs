//! Stats aggregation over the full event log

use tracing::debug;

use super::impact::ImpactEstimate;
use super::models::DerivedStats;
use crate::domain::{Category, WasteEvent};

/// Recompute all derived stats from `events`.
///
/// Quantities are normalized to kg first (see [`Unit::to_kg`](crate::domain::Unit::to_kg)).
/// Only recyclable waste earns environmental savings.
pub fn compute_stats<'a, I>(events: I) -> DerivedStats
where
    I: IntoIterator<Item = &'a WasteEvent>,
{
    let mut stats = DerivedStats::default();
    let mut count = 0usize;

    for event in events {
        count += 1;
        let kg = event.quantity_kg();

        stats.total_waste += kg;
        *stats.by_category.entry(event.category).or_insert(0.0) += kg;

        if event.category == Category::Recyclable {
            stats.total_recycled += kg;
            stats
                .impact
                .accumulate(&ImpactEstimate::recycled(kg, &event.waste_type));
        }
    }

    stats.recycling_rate = recycling_rate(stats.total_recycled, stats.total_waste);
    debug!(
        events = count,
        total_waste = stats.total_waste,
        recycling_rate = stats.recycling_rate,
        "Recomputed waste stats"
    );
    stats
}

/// Recycled share in percent, rounded to one decimal. Zero when nothing was logged.
pub fn recycling_rate(recycled: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    let rate = (recycled / total * 1000.0).round() / 10.0;
    rate.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventStore, WasteInput};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn store_with(inputs: &[WasteInput]) -> EventStore {
        let mut store = EventStore::new();
        for (i, input) in inputs.iter().enumerate() {
            store.append(input.validate(today()).unwrap(), i as i64 + 1).unwrap();
        }
        store
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_log() {
        let stats = compute_stats(EventStore::new().all());
        assert_eq!(stats, DerivedStats::default());
        assert_eq!(stats.recycling_rate, 0.0);
    }

    #[test]
    fn test_plastic_bottles_impact() {
        let store = store_with(&[WasteInput::new("recyclable", "Plastic Bottles", "10")]);
        let stats = compute_stats(store.all());
        assert!(close(stats.impact.co2_saved, 25.0));
        assert!(close(stats.impact.energy_saved, 50.0));
        assert!(close(stats.impact.water_saved, 500.0));
        assert_eq!(stats.impact.trees_saved, 0.0);
        assert_eq!(stats.recycling_rate, 100.0);
    }

    #[test]
    fn test_white_paper_saves_trees() {
        let store = store_with(&[WasteInput::new("recyclable", "White Paper", "10")]);
        assert!(close(compute_stats(store.all()).impact.trees_saved, 0.2));
    }

    #[test]
    fn test_units_are_normalized() {
        let store = store_with(&[
            WasteInput::new("general", "Wrappers", "40").in_unit("pieces"),
            WasteInput::new("hazardous", "Paint", "3").in_unit("liters"),
            WasteInput::new("organic", "Soil", "5").in_unit("buckets"),
        ]);
        let stats = compute_stats(store.all());
        assert!(close(stats.category_kg(Category::General), 2.0));
        assert!(close(stats.category_kg(Category::Hazardous), 3.0));
        assert!(close(stats.category_kg(Category::Organic), 5.0));
        assert!(close(stats.total_waste, 10.0));
    }

    #[test]
    fn test_totals_are_consistent() {
        let store = store_with(&[
            WasteInput::new("recyclable", "Cans", "3"),
            WasteInput::new("organic", "Peels", "1.5"),
            WasteInput::new("hazardous", "Batteries", "12").in_unit("pieces"),
            WasteInput::new("general", "Styrofoam", "0.7"),
            WasteInput::new("recyclable", "Cardboard", "2.25"),
        ]);
        let stats = compute_stats(store.all());
        let others: f64 = [Category::Organic, Category::Hazardous, Category::General]
            .iter()
            .map(|c| stats.category_kg(*c))
            .sum();
        assert!(close(stats.total_waste, stats.total_recycled + others));
        assert!(close(stats.total_recycled, stats.category_kg(Category::Recyclable)));
        assert!((0.0..=100.0).contains(&stats.recycling_rate));
        // 5.25 / 8.05 = 65.217...
        assert_eq!(stats.recycling_rate, 65.2);
    }

    #[test]
    fn test_delete_leaves_no_residue() {
        let mut store = store_with(&[
            WasteInput::new("recyclable", "Newspaper", "4"),
            WasteInput::new("general", "Bags", "1"),
        ]);
        let before = compute_stats(store.all());

        let extra = store.append(
            WasteInput::new("recyclable", "Glass", "7").validate(today()).unwrap(),
            100,
        )
        .unwrap();
        assert_ne!(compute_stats(store.all()), before);

        store.delete(extra.id);
        assert_eq!(compute_stats(store.all()), before);
    }

    #[test]
    fn test_recycling_rate_rounding() {
        assert_eq!(recycling_rate(1.0, 3.0), 33.3);
        assert_eq!(recycling_rate(2.0, 3.0), 66.7);
        assert_eq!(recycling_rate(0.0, 0.0), 0.0);
    }
}
