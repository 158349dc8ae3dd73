use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::discount::{NewDiscount, UpdateDiscount};

/// Maximum allowed length for a discount description.
const DESCRIPTION_MAX_LEN: usize = 255;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Accepted calendar date format for `fecha_inicio`/`fecha_fin`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result type returned by the discount form helpers.
pub type DiscountFormResult<T> = Result<T, DiscountFormError>;

/// Errors that can occur while processing discount payloads.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountFormError {
    #[error("Todos los campos son obligatorios.")]
    MissingFields,
    #[error("El porcentaje de descuento debe estar entre 0 y 100.")]
    PercentageOutOfRange,
    #[error("La fecha de inicio no puede ser mayor que la fecha de fin.")]
    InvalidDateRange,
    /// A date field did not match `YYYY-MM-DD`.
    #[error("El campo {field} debe tener el formato AAAA-MM-DD.")]
    InvalidDate { field: &'static str },
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// JSON payload accepted when creating a discount.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddDiscountForm {
    #[serde(rename = "descripcion")]
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: Option<String>,
    #[serde(rename = "porcentaje_descuento")]
    pub percentage: Option<f64>,
    #[serde(rename = "fecha_inicio")]
    pub starts_on: Option<String>,
    #[serde(rename = "fecha_fin")]
    pub ends_on: Option<String>,
    /// Defaults to active when omitted.
    #[serde(rename = "estatus")]
    pub is_active: Option<bool>,
}

impl AddDiscountForm {
    /// Validates the payload into a domain `NewDiscount`.
    ///
    /// Presence is checked first, then the percentage range, then the dates.
    pub fn into_new_discount(self) -> DiscountFormResult<NewDiscount> {
        let (Some(description), Some(percentage), Some(starts_on), Some(ends_on)) = (
            provided_text(self.description.as_deref()),
            self.percentage,
            provided_text(self.starts_on.as_deref()),
            provided_text(self.ends_on.as_deref()),
        ) else {
            return Err(DiscountFormError::MissingFields);
        };

        if !(0.0..=100.0).contains(&percentage) {
            return Err(DiscountFormError::PercentageOutOfRange);
        }

        self.validate()?;

        let starts_on = parse_date(starts_on, "fecha_inicio")?;
        let ends_on = parse_date(ends_on, "fecha_fin")?;
        if starts_on > ends_on {
            return Err(DiscountFormError::InvalidDateRange);
        }

        Ok(NewDiscount::new(description, percentage, starts_on, ends_on)
            .with_active(self.is_active.unwrap_or(true)))
    }
}

/// JSON payload accepted when editing a discount.
///
/// Text and date fields only apply when non-empty; `porcentaje_descuento`
/// and `estatus` apply whenever present, so `0` and `false` do overwrite.
/// Neither the percentage range nor the date order is re-checked here.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditDiscountForm {
    #[serde(rename = "descripcion")]
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: Option<String>,
    #[serde(rename = "porcentaje_descuento")]
    pub percentage: Option<f64>,
    #[serde(rename = "fecha_inicio")]
    pub starts_on: Option<String>,
    #[serde(rename = "fecha_fin")]
    pub ends_on: Option<String>,
    #[serde(rename = "estatus")]
    pub is_active: Option<bool>,
}

impl EditDiscountForm {
    /// Builds the patch holding only the fields that count as provided.
    pub fn into_update_discount(
        self,
        updated_at: NaiveDateTime,
    ) -> DiscountFormResult<UpdateDiscount> {
        self.validate()?;

        let starts_on = provided_text(self.starts_on.as_deref())
            .map(|value| parse_date(value, "fecha_inicio"))
            .transpose()?;
        let ends_on = provided_text(self.ends_on.as_deref())
            .map(|value| parse_date(value, "fecha_fin"))
            .transpose()?;

        Ok(UpdateDiscount {
            description: provided_text(self.description.as_deref()).map(str::to_string),
            percentage: self.percentage,
            starts_on,
            ends_on,
            is_active: self.is_active,
            updated_at,
        })
    }
}

/// JSON payload accepted by the apply-discount endpoint.
///
/// Both ids may arrive as JSON numbers or strings. The product id belongs to
/// the product service and is passed through verbatim; a discount id that is
/// absent or not an integer resolves to no discount.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyDiscountForm {
    #[serde(rename = "productId", deserialize_with = "id_as_text")]
    pub product_id: String,
    #[serde(rename = "descuentoId", default, deserialize_with = "id_as_integer")]
    pub discount_id: Option<i32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    fn into_text(self) -> String {
        match self {
            RawId::Number(number) => number.to_string(),
            RawId::Text(text) => text,
        }
    }
}

fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_text)
}

fn id_as_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.into_text().trim().parse::<i32>().ok()))
}

fn provided_text(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn parse_date(value: &str, field: &'static str) -> DiscountFormResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DiscountFormError::InvalidDate { field })
}
