use chrono::Utc;
use serde::Serialize;

use crate::clients::product::ProductClient;
use crate::domain::discount::{Discount, UpdateDiscount};
use crate::domain::product::Product;
use crate::forms::discounts::{AddDiscountForm, ApplyDiscountForm, EditDiscountForm};
use crate::repository::{DiscountReader, DiscountWriter};
use crate::services::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::services::{DISCOUNT_NOT_FOUND, ServiceError, ServiceResult};

pub const PRODUCT_NOT_FOUND: &str = "El producto no existe.";
pub const DISCOUNT_UNAVAILABLE: &str = "El descuento no existe o no está activo.";
pub const DISCOUNT_DELETED: &str = "Descuento eliminado correctamente";
pub const DISCOUNT_APPLIED: &str = "Descuento aplicado correctamente";

/// Outcome of applying a discount to a remote product.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedDiscount {
    pub message: &'static str,
    /// Product payload as fetched, with `precio` replaced by the new price.
    #[serde(rename = "producto")]
    pub product: Product,
    #[serde(rename = "descuento")]
    pub discount: Discount,
}

/// Lists every discount in store order, inactive ones included.
pub fn list_discounts<R>(repo: &R) -> ServiceResult<Vec<Discount>>
where
    R: DiscountReader + ?Sized,
{
    repo.list_discounts().map_err(ServiceError::from)
}

/// Validates and stores a new discount.
pub fn create_discount<R>(repo: &R, form: AddDiscountForm) -> ServiceResult<Discount>
where
    R: DiscountWriter + ?Sized,
{
    let new_discount = form
        .into_new_discount()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_discount(&new_discount)
        .map_err(ServiceError::from)
}

/// Applies the provided fields of `form` to an existing discount.
///
/// The payload is validated before the store is consulted.
pub fn modify_discount<R>(
    repo: &R,
    discount_id: i32,
    form: EditDiscountForm,
) -> ServiceResult<Discount>
where
    R: DiscountReader + DiscountWriter + ?Sized,
{
    let update = form
        .into_update_discount(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_discount_exists(repo, discount_id)?;

    repo.update_discount(discount_id, &update)
        .map_err(ServiceError::from)
}

/// Soft-deletes a discount by marking it inactive.
pub fn remove_discount<R>(repo: &R, discount_id: i32) -> ServiceResult<()>
where
    R: DiscountReader + DiscountWriter + ?Sized,
{
    ensure_discount_exists(repo, discount_id)?;

    repo.update_discount(discount_id, &UpdateDiscount::deactivate(Utc::now().naive_utc()))
        .map_err(ServiceError::from)?;

    Ok(())
}

/// Applies an active discount to a product's price on the product service.
///
/// The product is checked before the discount. The read and the price write
/// are separate remote calls and a failed write is not compensated.
pub async fn apply_discount_to_product<R, C, S>(
    repo: &R,
    client: &C,
    sink: &S,
    form: ApplyDiscountForm,
) -> ServiceResult<AppliedDiscount>
where
    R: DiscountReader + ?Sized,
    C: ProductClient + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let ApplyDiscountForm {
        product_id,
        discount_id,
    } = form;

    sink.record(DiagnosticEvent::ApplyStarted {
        product_id: product_id.clone(),
        discount_id,
    });

    let product = match client.get_product(&product_id).await? {
        Some(product) => product,
        None => {
            sink.record(DiagnosticEvent::ProductMissing { product_id });
            return Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }
    };
    sink.record(DiagnosticEvent::ProductFetched {
        product_id: product_id.clone(),
    });

    let stored = match discount_id {
        Some(id) => repo.get_discount_by_id(id)?,
        None => None,
    };
    let discount = match stored {
        Some(discount) if discount.is_active => discount,
        _ => {
            sink.record(DiagnosticEvent::DiscountRejected { discount_id });
            return Err(ServiceError::NotFound(DISCOUNT_UNAVAILABLE.to_string()));
        }
    };

    let original = product.price().ok_or_else(|| {
        ServiceError::Internal(format!("product {product_id} has no numeric price"))
    })?;
    let discounted = discount.apply_to(original);
    sink.record(DiagnosticEvent::PriceComputed {
        product_id: product_id.clone(),
        original,
        discounted,
    });

    client.update_product_price(&product_id, discounted).await?;
    sink.record(DiagnosticEvent::PriceUpdated {
        product_id,
        price: discounted,
    });

    Ok(AppliedDiscount {
        message: DISCOUNT_APPLIED,
        product: product.with_price(discounted),
        discount,
    })
}

fn ensure_discount_exists<R>(repo: &R, discount_id: i32) -> ServiceResult<()>
where
    R: DiscountReader + ?Sized,
{
    match repo.get_discount_by_id(discount_id)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::NotFound(DISCOUNT_NOT_FOUND.to_string())),
    }
}
