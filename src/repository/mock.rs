use mockall::mock;

use super::{DiscountReader, DiscountWriter};
use crate::domain::discount::{Discount, NewDiscount, UpdateDiscount};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub DiscountReader {}

    impl DiscountReader for DiscountReader {
        fn list_discounts(&self) -> RepositoryResult<Vec<Discount>>;
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
    }
}

mock! {
    pub DiscountWriter {}

    impl DiscountWriter for DiscountWriter {
        fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount>;
        fn update_discount(&self, discount_id: i32, updates: &UpdateDiscount) -> RepositoryResult<Discount>;
    }
}

mock! {
    pub DiscountRepository {}

    impl DiscountReader for DiscountRepository {
        fn list_discounts(&self) -> RepositoryResult<Vec<Discount>>;
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
    }

    impl DiscountWriter for DiscountRepository {
        fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount>;
        fn update_discount(&self, discount_id: i32, updates: &UpdateDiscount) -> RepositoryResult<Discount>;
    }
}
