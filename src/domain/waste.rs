//! Waste events and the validated input that creates them

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::time_bucket::parse_day_bucket;

/// Approximate weight of a single piece of waste (50 g)
pub const PIECE_WEIGHT_KG: f64 = 0.05;

/// Disposal category of a waste event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Recyclable,
    Organic,
    Hazardous,
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::Recyclable,
        Self::Organic,
        Self::Hazardous,
        Self::General,
    ];

    /// Get the string ID used in persisted logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recyclable => "recyclable",
            Self::Organic => "organic",
            Self::Hazardous => "hazardous",
            Self::General => "general",
        }
    }

    /// Parse a category name, ignoring case and surrounding whitespace
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "recyclable" => Some(Self::Recyclable),
            "organic" => Some(Self::Organic),
            "hazardous" => Some(Self::Hazardous),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recyclable => "Recyclable",
            Self::Organic => "Organic",
            Self::Hazardous => "Hazardous",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a quantity was recorded in.
///
/// Units outside the known set are kept verbatim so a log written by another
/// client survives a load/save cycle. They count as kilograms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[default]
    Kg,
    Pieces,
    Liters,
    Other(String),
}

impl Unit {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "kg" => Self::Kg,
            "pieces" => Self::Pieces,
            "liters" => Self::Liters,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Kg => "kg",
            Self::Pieces => "pieces",
            Self::Liters => "liters",
            Self::Other(raw) => raw,
        }
    }

    /// Convert a quantity in this unit to kilograms
    pub fn to_kg(&self, quantity: f64) -> f64 {
        match self {
            Self::Pieces => quantity * PIECE_WEIGHT_KG,
            // Liquids are approximated 1:1, unknown units are assumed to be kg
            Self::Kg | Self::Liters | Self::Other(_) => quantity,
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged disposal. Immutable once created.
///
/// Deserializing applies the same quantity rules as [`WasteInput::validate`],
/// so a hand-edited log can't smuggle in a negative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredWasteEvent")]
pub struct WasteEvent {
    pub id: u64,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(rename = "type")]
    pub waste_type: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
}

/// Persisted shape of a [`WasteEvent`], checked before it is accepted
#[derive(Deserialize)]
struct StoredWasteEvent {
    id: u64,
    date: NaiveDate,
    category: Category,
    #[serde(rename = "type")]
    waste_type: String,
    quantity: f64,
    #[serde(default)]
    unit: Unit,
}

impl TryFrom<StoredWasteEvent> for WasteEvent {
    type Error = ValidationError;

    fn try_from(stored: StoredWasteEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored.id,
            date: stored.date,
            category: stored.category,
            waste_type: stored.waste_type,
            quantity: check_quantity(stored.quantity, &stored.quantity.to_string())?,
            unit: stored.unit,
        })
    }
}

impl WasteEvent {
    pub fn quantity_kg(&self) -> f64 {
        self.unit.to_kg(self.quantity)
    }

    pub fn is_recyclable(&self) -> bool {
        self.category == Category::Recyclable
    }
}

/// Validation failures for user-submitted input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown category: {0} (expected recyclable, organic, hazardous or general)")]
    UnknownCategory(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),
}

/// Raw waste log input as submitted by a form or the CLI.
///
/// All fields are optional strings; [`WasteInput::validate`] turns them into a
/// [`NewWasteEvent`] or reports the first problem found.
#[derive(Debug, Clone, Default)]
pub struct WasteInput {
    pub date: Option<String>,
    pub category: Option<String>,
    pub waste_type: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

/// Validated fields of an event that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewWasteEvent {
    pub date: NaiveDate,
    pub category: Category,
    pub waste_type: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl NewWasteEvent {
    pub fn with_id(self, id: u64) -> WasteEvent {
        WasteEvent {
            id,
            date: self.date,
            category: self.category,
            waste_type: self.waste_type,
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}

impl WasteInput {
    pub fn new(category: &str, waste_type: &str, quantity: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            waste_type: Some(waste_type.to_string()),
            quantity: Some(quantity.to_string()),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn in_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Validate the input. A missing date defaults to `today`, a missing unit to kg.
    pub fn validate(&self, today: NaiveDate) -> Result<NewWasteEvent, ValidationError> {
        let category = non_blank(&self.category).ok_or(ValidationError::MissingField("category"))?;
        let waste_type = non_blank(&self.waste_type).ok_or(ValidationError::MissingField("type"))?;
        let quantity = non_blank(&self.quantity).ok_or(ValidationError::MissingField("quantity"))?;

        let category = Category::from_str(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))?;
        let quantity = parse_quantity(quantity)?;

        let date = match non_blank(&self.date) {
            Some(raw) => {
                parse_day_bucket(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))?
            }
            None => today,
        };

        let unit = non_blank(&self.unit).map(Unit::parse).unwrap_or_default();

        Ok(NewWasteEvent {
            date,
            category,
            waste_type: waste_type.to_string(),
            quantity,
            unit,
        })
    }
}

/// Parse a non-negative, finite quantity
pub fn parse_quantity(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity(raw.to_string()))?;
    check_quantity(value, raw)
}

fn check_quantity(value: f64, raw: &str) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidQuantity(raw.to_string()));
    }
    Ok(value)
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_validate_defaults() {
        let new = WasteInput::new("Recyclable", " Plastic Bottles ", "2.5")
            .validate(today())
            .unwrap();
        assert_eq!(new.category, Category::Recyclable);
        assert_eq!(new.waste_type, "Plastic Bottles");
        assert_eq!(new.quantity, 2.5);
        assert_eq!(new.unit, Unit::Kg);
        assert_eq!(new.date, today());
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut input = WasteInput::new("organic", "Peels", "1");
        input.category = None;
        assert_eq!(input.validate(today()), Err(ValidationError::MissingField("category")));

        let input = WasteInput::new("organic", "   ", "1");
        assert_eq!(input.validate(today()), Err(ValidationError::MissingField("type")));

        let input = WasteInput::new("organic", "Peels", "");
        assert_eq!(input.validate(today()), Err(ValidationError::MissingField("quantity")));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            WasteInput::new("plastic", "Bag", "1").validate(today()),
            Err(ValidationError::UnknownCategory(_))
        ));
        assert!(matches!(
            WasteInput::new("general", "Bag", "-1").validate(today()),
            Err(ValidationError::InvalidQuantity(_))
        ));
        assert!(matches!(
            WasteInput::new("general", "Bag", "NaN").validate(today()),
            Err(ValidationError::InvalidQuantity(_))
        ));
        assert!(matches!(
            WasteInput::new("general", "Bag", "1").on("10/03/2024").validate(today()),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_zero_quantity_is_allowed() {
        let new = WasteInput::new("general", "Wrapper", "0").validate(today()).unwrap();
        assert_eq!(new.quantity, 0.0);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Unit::Kg.to_kg(3.0), 3.0);
        assert_eq!(Unit::Liters.to_kg(3.0), 3.0);
        assert!((Unit::Pieces.to_kg(20.0) - 1.0).abs() < 1e-9);
        assert_eq!(Unit::parse("bushels").to_kg(4.0), 4.0);
    }

    #[test]
    fn test_event_json_shape() {
        let event = WasteInput::new("recyclable", "Paper", "10")
            .in_unit("pieces")
            .validate(today())
            .unwrap()
            .with_id(42);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Paper");
        assert_eq!(json["category"], "recyclable");
        assert_eq!(json["unit"], "pieces");
        assert_eq!(json["date"], "2024-03-10");

        let unknown: WasteEvent = serde_json::from_str(
            r#"{"id":1,"date":"2024-03-10","category":"general","type":"Sand","quantity":2,"unit":"bucket"}"#,
        )
        .unwrap();
        assert_eq!(unknown.unit, Unit::Other("bucket".to_string()));
        assert_eq!(unknown.quantity_kg(), 2.0);
    }

    #[test]
    fn test_stored_negative_quantity_is_rejected() {
        let err = serde_json::from_str::<WasteEvent>(
            r#"{"id":1,"date":"2024-03-10","category":"recyclable","type":"Cans","quantity":-10}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid quantity"));
    }
}
