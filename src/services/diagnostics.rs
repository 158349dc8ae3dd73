//! Diagnostic events emitted by the service layer.
//!
//! Services never log directly; they hand events to a [`DiagnosticSink`].

use std::fmt;

/// Something worth recording while serving a request.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// `discount_id` is `None` when the request carried no usable id.
    ApplyStarted {
        product_id: String,
        discount_id: Option<i32>,
    },
    ProductFetched {
        product_id: String,
    },
    ProductMissing {
        product_id: String,
    },
    DiscountRejected {
        discount_id: Option<i32>,
    },
    PriceComputed {
        product_id: String,
        original: f64,
        discounted: f64,
    },
    PriceUpdated {
        product_id: String,
        price: f64,
    },
    /// An operation failed unexpectedly; `detail` is never shown to callers.
    Failure {
        operation: &'static str,
        detail: String,
    },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::ApplyStarted {
                product_id,
                discount_id,
            } => write!(
                f,
                "applying discount {} to product {product_id}",
                DiscountRef(*discount_id)
            ),
            DiagnosticEvent::ProductFetched { product_id } => {
                write!(f, "fetched product {product_id}")
            }
            DiagnosticEvent::ProductMissing { product_id } => {
                write!(f, "product {product_id} not found")
            }
            DiagnosticEvent::DiscountRejected { discount_id } => {
                write!(f, "discount {} missing or inactive", DiscountRef(*discount_id))
            }
            DiagnosticEvent::PriceComputed {
                product_id,
                original,
                discounted,
            } => write!(
                f,
                "product {product_id} price {original} -> {discounted}"
            ),
            DiagnosticEvent::PriceUpdated { product_id, price } => {
                write!(f, "product {product_id} price updated to {price}")
            }
            DiagnosticEvent::Failure { operation, detail } => {
                write!(f, "{operation} failed: {detail}")
            }
        }
    }
}

struct DiscountRef(Option<i32>);

impl fmt::Display for DiscountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("<none>"),
        }
    }
}

/// Destination for [`DiagnosticEvent`]s.
pub trait DiagnosticSink {
    fn record(&self, event: DiagnosticEvent);
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink forwarding events to the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, event: DiagnosticEvent) {
        match &event {
            DiagnosticEvent::Failure { .. } => log::error!("{event}"),
            DiagnosticEvent::ProductMissing { .. } | DiagnosticEvent::DiscountRejected { .. } => {
                log::warn!("{event}")
            }
            _ => log::info!("{event}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_readable_messages() {
        let event = DiagnosticEvent::PriceComputed {
            product_id: "4".to_string(),
            original: 100.0,
            discounted: 75.0,
        };

        assert_eq!(event.to_string(), "product 4 price 100 -> 75");
        assert_eq!(
            DiagnosticEvent::Failure {
                operation: "create discount",
                detail: "disk full".to_string(),
            }
            .to_string(),
            "create discount failed: disk full"
        );
        assert_eq!(
            DiagnosticEvent::DiscountRejected { discount_id: None }.to_string(),
            "discount <none> missing or inactive"
        );
    }
}
