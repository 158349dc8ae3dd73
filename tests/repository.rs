use chrono::NaiveDate;
use discount_service::domain::discount::{NewDiscount, UpdateDiscount};
use discount_service::repository::DieselRepository;
use discount_service::repository::{DiscountReader, DiscountWriter};
use pushkind_common::repository::errors::RepositoryError;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

#[test]
fn test_discount_repository_crud() {
    let test_db = common::TestDb::new("test_discount_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let spring = repo
        .create_discount(&NewDiscount::new(
            "Primavera",
            15.0,
            date(2024, 3, 20),
            date(2024, 4, 20),
        ))
        .unwrap();
    let summer = repo
        .create_discount(
            &NewDiscount::new("Verano", 30.0, date(2024, 6, 21), date(2024, 6, 21))
                .with_active(false),
        )
        .unwrap();

    assert!(spring.is_active);
    assert!(!summer.is_active);
    assert_ne!(spring.id, summer.id);

    let items = repo.list_discounts().unwrap();
    let ids: Vec<i32> = items.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![spring.id, summer.id]);

    let fetched = repo.get_discount_by_id(spring.id).unwrap().unwrap();
    assert_eq!(fetched.description, "Primavera");
    assert_eq!(fetched.percentage, 15.0);
    assert_eq!(fetched.starts_on, date(2024, 3, 20));
    assert_eq!(fetched.ends_on, date(2024, 4, 20));

    assert!(repo.get_discount_by_id(spring.id + 100).unwrap().is_none());
}

#[test]
fn test_update_discount_only_touches_provided_fields() {
    let test_db = common::TestDb::new("test_update_discount_partial.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_discount(&NewDiscount::new(
            "Regreso a clases",
            25.0,
            date(2024, 8, 1),
            date(2024, 8, 31),
        ))
        .unwrap();

    let patch = UpdateDiscount {
        percentage: Some(0.0),
        ..UpdateDiscount::new(now())
    };
    let updated = repo.update_discount(created.id, &patch).unwrap();

    assert_eq!(updated.percentage, 0.0);
    assert_eq!(updated.description, "Regreso a clases");
    assert_eq!(updated.starts_on, date(2024, 8, 1));
    assert_eq!(updated.ends_on, date(2024, 8, 31));
    assert!(updated.is_active);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_deactivate_keeps_record_retrievable() {
    let test_db = common::TestDb::new("test_deactivate_discount.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_discount(&NewDiscount::new(
            "Navidad",
            40.0,
            date(2024, 12, 1),
            date(2024, 12, 25),
        ))
        .unwrap();

    repo.update_discount(created.id, &UpdateDiscount::deactivate(now()))
        .unwrap();

    let stored = repo.get_discount_by_id(created.id).unwrap().unwrap();
    assert!(!stored.is_active);
    assert_eq!(stored.description, created.description);
    assert_eq!(stored.percentage, created.percentage);
    assert_eq!(stored.starts_on, created.starts_on);
    assert_eq!(stored.ends_on, created.ends_on);
    assert_eq!(repo.list_discounts().unwrap().len(), 1);
}

#[test]
fn test_update_missing_discount_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_discount.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .update_discount(77, &UpdateDiscount::deactivate(now()))
        .expect_err("expected update of a missing row to fail");

    assert!(matches!(err, RepositoryError::NotFound));
    assert!(repo.list_discounts().unwrap().is_empty());
}
