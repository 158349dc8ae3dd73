use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::discount::{Discount, NewDiscount, UpdateDiscount},
    models::discount::{
        Discount as DbDiscount, NewDiscount as DbNewDiscount, UpdateDiscount as DbUpdateDiscount,
    },
    repository::{DieselRepository, DiscountReader, DiscountWriter},
};

impl DiscountReader for DieselRepository {
    fn list_discounts(&self) -> RepositoryResult<Vec<Discount>> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;

        let db_discounts = discounts::table
            .order(discounts::id.asc())
            .load::<DbDiscount>(&mut conn)?;

        Ok(db_discounts.into_iter().map(Into::into).collect())
    }

    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;
        let discount = discounts::table
            .find(id)
            .first::<DbDiscount>(&mut conn)
            .optional()?;

        Ok(discount.map(Discount::from))
    }
}

impl DiscountWriter for DieselRepository {
    fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;
        let db_new: DbNewDiscount = new_discount.into();

        let created = diesel::insert_into(discounts::table)
            .values(&db_new)
            .get_result::<DbDiscount>(&mut conn)?;

        Ok(created.into())
    }

    fn update_discount(
        &self,
        discount_id: i32,
        updates: &UpdateDiscount,
    ) -> RepositoryResult<Discount> {
        use crate::schema::discounts;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDiscount = updates.into();

        let target = discounts::table.filter(discounts::id.eq(discount_id));

        let updated: Discount = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbDiscount>(&mut conn)?
            .into();

        Ok(updated)
    }
}
