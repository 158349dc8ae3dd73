use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain representation of a percentage discount with an active window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    /// Unique identifier assigned by the store.
    pub id: i32,
    /// Human-readable description of the discount.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Price reduction in percent, `0..=100` when created.
    #[serde(rename = "porcentaje_descuento")]
    pub percentage: f64,
    /// First day the discount is meant to apply.
    #[serde(rename = "fecha_inicio")]
    pub starts_on: NaiveDate,
    /// Last day the discount is meant to apply.
    #[serde(rename = "fecha_fin")]
    pub ends_on: NaiveDate,
    /// `false` once the discount has been soft-deleted.
    #[serde(rename = "estatus")]
    pub is_active: bool,
    /// Timestamp for when the discount record was created.
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    /// Timestamp for the last write to the discount record.
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl Discount {
    /// Price left after applying this discount to `price`.
    pub fn apply_to(&self, price: f64) -> f64 {
        price - (price * self.percentage) / 100.0
    }
}

/// Payload required to insert a new discount.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub description: String,
    pub percentage: f64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl NewDiscount {
    /// Build an active discount payload, capturing the current timestamp.
    pub fn new(
        description: impl Into<String>,
        percentage: f64,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            percentage,
            starts_on,
            ends_on,
            is_active: true,
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Override the initial active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Patch data applied when updating an existing discount.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDiscount {
    pub description: Option<String>,
    pub percentage: Option<f64>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl UpdateDiscount {
    /// Build an empty patch stamped with `updated_at`.
    pub fn new(updated_at: NaiveDateTime) -> Self {
        Self {
            description: None,
            percentage: None,
            starts_on: None,
            ends_on: None,
            is_active: None,
            updated_at,
        }
    }

    /// Patch that only flips the discount to inactive.
    pub fn deactivate(updated_at: NaiveDateTime) -> Self {
        Self {
            is_active: Some(false),
            ..Self::new(updated_at)
        }
    }
}
