#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn record(name: &str, price: Decimal, date: &str) -> ExpenseRecord {
    ExpenseRecord::new(name.into(), price, date.into())
}

// ── Create / read ─────────────────────────────────────────────

#[test]
fn test_insert_and_read_back() {
    let db = Database::open_in_memory().unwrap();
    let before = db.record_count().unwrap();

    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    assert_eq!(db.record_count().unwrap(), before + 1);

    let all = db.get_records().unwrap();
    let found: Vec<_> = all.iter().filter(|r| r.id == Some(id)).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].item_name, "Coffee");
    assert_eq!(found[0].item_price, dec!(4.50));
    assert_eq!(found[0].purchase_date, "01 January 2024");
}

#[test]
fn test_records_in_insertion_order() {
    let db = Database::open_in_memory().unwrap();
    db.insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();
    db.insert_record(&record("Book", dec!(19.99), "02 January 2024"))
        .unwrap();

    let all = db.get_records().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].item_name, "Coffee");
    assert_eq!(all[1].item_name, "Book");
    assert!(all[0].serial() < all[1].serial());
}

#[test]
fn test_get_record_by_id() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Tea", dec!(3.00), "03 January 2024"))
        .unwrap();

    let fetched = db.get_record_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.item_name, "Tea");

    assert!(db.get_record_by_id(99999).unwrap().is_none());
}

#[test]
fn test_duplicate_names_allowed() {
    let db = Database::open_in_memory().unwrap();
    db.insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();
    db.insert_record(&record("Coffee", dec!(5.25), "02 January 2024"))
        .unwrap();
    assert_eq!(db.record_count().unwrap(), 2);
}

// ── Update ────────────────────────────────────────────────────

#[test]
fn test_update_rewrites_fields_same_id() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    db.update_record(id, "Tea", dec!(3.00), "03 January 2024")
        .unwrap();

    let all = db.get_records().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(id));
    assert_eq!(all[0].item_name, "Tea");
    assert_eq!(all[0].item_price, dec!(3.00));
    assert_eq!(all[0].purchase_date, "03 January 2024");
}

#[test]
fn test_update_missing_id_is_not_found_and_leaves_table_unchanged() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    let err = db
        .update_record(id + 1000, "Tea", dec!(3.00), "03 January 2024")
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(bad) if bad == id + 1000));

    let all = db.get_records().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].item_name, "Coffee");
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_removes_row() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    db.delete_record(id).unwrap();

    assert_eq!(db.record_count().unwrap(), 0);
    assert!(db.get_records().unwrap().iter().all(|r| r.id != Some(id)));
}

#[test]
fn test_delete_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    db.delete_record(id).unwrap();
    db.delete_record(id).unwrap();
    assert_eq!(db.record_count().unwrap(), 0);
}

#[test]
fn test_delete_never_created_id_is_noop() {
    let db = Database::open_in_memory().unwrap();
    db.insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();

    db.delete_record(424242).unwrap();
    assert_eq!(db.record_count().unwrap(), 1);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let db = Database::open_in_memory().unwrap();
    let first = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();
    db.delete_record(first).unwrap();

    let second = db
        .insert_record(&record("Book", dec!(19.99), "02 January 2024"))
        .unwrap();
    assert!(second > first);
}

// ── Aggregates ────────────────────────────────────────────────

#[test]
fn test_total_spent_empty_table_is_zero() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.total_spent().unwrap(), Decimal::ZERO);
}

#[test]
fn test_total_spent_is_exact() {
    let db = Database::open_in_memory().unwrap();
    db.insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();
    db.insert_record(&record("Book", dec!(19.99), "02 January 2024"))
        .unwrap();

    assert_eq!(db.total_spent().unwrap(), dec!(24.49));
}

#[test]
fn test_total_spent_tracks_mutations() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Coffee", dec!(4.50), "01 January 2024"))
        .unwrap();
    db.insert_record(&record("Book", dec!(19.99), "02 January 2024"))
        .unwrap();

    db.update_record(id, "Coffee", dec!(6.00), "01 January 2024")
        .unwrap();
    assert_eq!(db.total_spent().unwrap(), dec!(25.99));

    db.delete_record(id).unwrap();
    assert_eq!(db.total_spent().unwrap(), dec!(19.99));
}

// ── Permissive columns ────────────────────────────────────────

#[test]
fn test_date_is_uninterpreted_text() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .insert_record(&record("Gift", dec!(10.00), "someday soon"))
        .unwrap();
    let fetched = db.get_record_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.purchase_date, "someday soon");
}

#[test]
fn test_empty_name_accepted() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_record(&record("", dec!(1.00), "")).unwrap();
    assert!(db.get_record_by_id(id).unwrap().is_some());
}
