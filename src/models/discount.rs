use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::discount::{
    Discount as DomainDiscount, NewDiscount as DomainNewDiscount,
    UpdateDiscount as DomainUpdateDiscount,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::discounts)]
pub struct Discount {
    pub id: i32,
    pub description: String,
    pub percentage: f64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::discounts)]
pub struct NewDiscount<'a> {
    pub description: &'a str,
    pub percentage: f64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// `None` fields are skipped by Diesel and keep their stored value.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::discounts)]
pub struct UpdateDiscount<'a> {
    pub description: Option<&'a str>,
    pub percentage: Option<f64>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl From<Discount> for DomainDiscount {
    fn from(value: Discount) -> Self {
        Self {
            id: value.id,
            description: value.description,
            percentage: value.percentage,
            starts_on: value.starts_on,
            ends_on: value.ends_on,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDiscount> for NewDiscount<'a> {
    fn from(value: &'a DomainNewDiscount) -> Self {
        Self {
            description: value.description.as_str(),
            percentage: value.percentage,
            starts_on: value.starts_on,
            ends_on: value.ends_on,
            is_active: value.is_active,
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateDiscount> for UpdateDiscount<'a> {
    fn from(value: &'a DomainUpdateDiscount) -> Self {
        Self {
            description: value.description.as_deref(),
            percentage: value.percentage,
            starts_on: value.starts_on,
            ends_on: value.ends_on,
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
