#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::app::{App, InputMode, PendingAction};
use crate::db::Database;
use crate::models::ExpenseRecord;

fn test_db() -> Database {
    Database::open_in_memory().unwrap()
}

fn app_with_fields(name: &str, price: &str, date: &str) -> App {
    let mut app = App::new();
    app.name_input = name.into();
    app.price_input = price.into();
    app.date_input = date.into();
    app
}

#[test]
fn test_save_record_inserts_and_clears_fields() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "01 January 2024");

    app.save_record(&db).unwrap();

    assert_eq!(app.records.len(), 1);
    assert_eq!(app.record_count, 1);
    assert_eq!(app.records[0].item_name, "Coffee");
    assert_eq!(app.records[0].item_price, dec!(4.50));
    assert!(app.name_input.is_empty());
    assert!(app.price_input.is_empty());
    assert!(app.date_input.is_empty());
    assert_eq!(app.selected_id, None);
    assert!(app.status_message.starts_with("Saved record #"));
}

#[test]
fn test_save_record_rejects_bad_price() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "four fifty", "01 January 2024");

    app.save_record(&db).unwrap();

    assert!(app.records.is_empty());
    // Field contents survive so the typo can be fixed in place.
    assert_eq!(app.name_input, "Coffee");
    assert!(app.status_message.contains("Invalid price"));
}

#[test]
fn test_select_row_mirrors_record_into_fields() {
    let db = test_db();
    let mut app = app_with_fields("Groceries", "85.20", "05 March 2024");
    app.save_record(&db).unwrap();

    app.record_index = 0;
    app.select_row();

    assert_eq!(app.name_input, "Groceries");
    assert_eq!(app.price_input, "85.20");
    assert_eq!(app.date_input, "05 March 2024");
    assert_eq!(app.selected_id, app.records[0].id);
}

#[test]
fn test_select_row_with_no_records_is_noop() {
    let mut app = App::new();
    app.select_row();
    assert_eq!(app.selected_id, None);
    assert!(app.name_input.is_empty());
}

#[test]
fn test_apply_update_rewrites_selected_record() {
    let db = test_db();
    let mut app = app_with_fields("Headphones", "25.99", "10 June 2024");
    app.save_record(&db).unwrap();

    app.record_index = 0;
    app.select_row();
    app.price_input = "19.99".into();

    app.apply_update(&db).unwrap();

    assert_eq!(app.records.len(), 1);
    assert_eq!(app.records[0].item_price, dec!(19.99));
    assert_eq!(app.records[0].item_name, "Headphones");
    assert!(app.name_input.is_empty());
    // Selection survives the update.
    assert_eq!(app.selected_id, app.records[0].id);
}

#[test]
fn test_apply_update_without_selection_reports_status() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");

    app.apply_update(&db).unwrap();

    assert!(app.records.is_empty());
    assert!(app.status_message.contains("No record selected"));
}

#[test]
fn test_apply_update_after_row_deleted_elsewhere() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");
    app.save_record(&db).unwrap();
    app.record_index = 0;
    app.select_row();
    let id = app.selected_id.unwrap();

    db.delete_record(id).unwrap();
    app.price_input = "9.99".into();
    app.apply_update(&db).unwrap();

    assert!(app.records.is_empty());
    assert!(app.status_message.contains("no longer exists"));
    assert!(app.error_message.is_empty());
}

#[test]
fn test_delete_flow_requires_confirmation() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");
    app.save_record(&db).unwrap();
    app.record_index = 0;
    app.select_row();

    app.request_delete();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Coffee'?");
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteRecord { .. })
    ));

    app.execute_pending(&db).unwrap();
    assert!(app.records.is_empty());
    assert_eq!(app.record_count, 0);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Deleted: Coffee");
}

#[test]
fn test_request_delete_without_selection() {
    let mut app = App::new();
    app.request_delete();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.pending_action.is_none());
    assert!(app.status_message.contains("No record selected"));
}

#[test]
fn test_cancelled_delete_keeps_record() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");
    app.save_record(&db).unwrap();
    app.record_index = 0;
    app.select_row();
    app.request_delete();

    // Cancel path: the pending action is dropped, nothing runs.
    app.pending_action = None;
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();

    app.refresh_records(&db).unwrap();
    assert_eq!(app.records.len(), 1);
}

#[test]
fn test_clear_entries_drops_selection() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");
    app.save_record(&db).unwrap();
    app.record_index = 0;
    app.select_row();
    assert!(app.selected_id.is_some());

    app.clear_entries();

    assert_eq!(app.selected_id, None);
    assert!(app.name_input.is_empty());
    assert!(app.price_input.is_empty());
    assert!(app.date_input.is_empty());
}

#[test]
fn test_compute_balance_against_limit() {
    let db = test_db();
    let mut app = App::new();
    for (name, price) in [("Coffee", "4.50"), ("Book", "19.99")] {
        app.name_input = name.into();
        app.price_input = price.into();
        app.save_record(&db).unwrap();
    }

    let (total, remaining) = app.compute_balance();
    assert_eq!(total, dec!(24.49));
    assert_eq!(remaining, dec!(4975.51));
}

#[test]
fn test_balance_can_go_negative() {
    let db = test_db();
    let mut app = app_with_fields("Laptop", "5975.51", "");
    app.save_record(&db).unwrap();

    let (total, remaining) = app.compute_balance();
    assert_eq!(total, dec!(5975.51));
    assert_eq!(remaining, dec!(-975.51));
}

#[test]
fn test_commit_limit_updates_balance() {
    let mut app = App::new();
    app.limit_input = "3000".into();
    app.commit_limit();
    assert_eq!(app.limit, Decimal::from(3000));

    let (_, remaining) = app.compute_balance();
    assert_eq!(remaining, Decimal::from(3000));
}

#[test]
fn test_commit_limit_rejects_garbage_and_restores_field() {
    let mut app = App::new();
    app.limit_input = "lots".into();
    app.commit_limit();
    assert_eq!(app.limit, Decimal::from(5000));
    assert_eq!(app.limit_input, "5000");
    assert!(app.status_message.contains("Invalid limit"));
}

#[test]
fn test_set_date_today_writes_display_format() {
    let mut app = App::new();
    app.set_date_today();
    // "01 January 2024" shape: day, month name, four-digit year.
    let parts: Vec<&str> = app.date_input.split(' ').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 2);
    assert_eq!(parts[2].len(), 4);
}

#[test]
fn test_export_report_writes_file_and_reports_path() {
    let db = test_db();
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fields("Coffee", "4.50", "01 January 2024");
    app.report_dir = dir.path().to_path_buf();
    app.save_record(&db).unwrap();

    app.export_report(&db, crate::export::ReportFormat::Csv)
        .unwrap();

    assert!(app.status_message.starts_with("Expense report generated:"));
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_export_chart_with_no_records_shows_error() {
    let db = test_db();
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new();
    app.report_dir = dir.path().to_path_buf();

    app.export_report(&db, crate::export::ReportFormat::Chart)
        .unwrap();

    assert!(app.error_message.contains("Failed to generate"));
}

#[test]
fn test_stale_selection_cleared_by_save() {
    let db = test_db();
    let mut app = app_with_fields("Coffee", "4.50", "");
    app.save_record(&db).unwrap();
    app.record_index = 0;
    app.select_row();
    assert!(app.selected_id.is_some());

    app.name_input = "Tea".into();
    app.price_input = "2.00".into();
    app.save_record(&db).unwrap();

    // Saving a new record must not leave the old row targeted.
    assert_eq!(app.selected_id, None);
    assert_eq!(app.records.len(), 2);
}

#[test]
fn test_refresh_clamps_cursor_after_shrink() {
    let db = test_db();
    let mut app = App::new();
    for i in 0..3 {
        db.insert_record(&ExpenseRecord::new(format!("Item {i}"), dec!(1.00), String::new()))
            .unwrap();
    }
    app.refresh_records(&db).unwrap();
    app.record_index = 2;

    db.delete_record(app.records[2].id.unwrap()).unwrap();
    db.delete_record(app.records[1].id.unwrap()).unwrap();
    app.refresh_records(&db).unwrap();

    assert_eq!(app.record_index, 0);
}
