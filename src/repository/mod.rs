use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::discount::{Discount, NewDiscount, UpdateDiscount};

pub mod discount;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over discount records.
pub trait DiscountReader {
    /// All discounts in ascending `id` order, inactive ones included.
    fn list_discounts(&self) -> RepositoryResult<Vec<Discount>>;
    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
}

/// Write operations over discount records. Records are never removed.
pub trait DiscountWriter {
    fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount>;
    fn update_discount(
        &self,
        discount_id: i32,
        updates: &UpdateDiscount,
    ) -> RepositoryResult<Discount>;
}
