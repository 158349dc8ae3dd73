use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field of the product payload that carries the price.
pub const PRICE_FIELD: &str = "precio";

/// Product payload as returned by the remote product service.
///
/// The service owns the schema, so every field is kept verbatim and only
/// `precio` is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Product {
    fields: Map<String, Value>,
}

impl Product {
    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Raw product fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Numeric price, accepting both JSON numbers and numeric strings.
    pub fn price(&self) -> Option<f64> {
        let price = match self.fields.get(PRICE_FIELD)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        price.filter(|price| price.is_finite())
    }

    /// Copy of the payload with `precio` replaced by `price`.
    pub fn with_price(mut self, price: f64) -> Self {
        let value = serde_json::Number::from_f64(price)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.fields.insert(PRICE_FIELD.to_string(), value);
        self
    }
}
