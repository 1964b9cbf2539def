use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::db::{Database, StoreError};
use crate::export::{self, ReportFormat};
use crate::models::ExpenseRecord;

/// Display format for purchase dates, e.g. "01 January 2024".
pub(crate) const DATE_FORMAT: &str = "%d %B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Entries,
    Summary,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Entries, Self::Summary]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entries => write!(f, "Entries"),
            Self::Summary => write!(f, "Summary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// The form field currently holding focus while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Price,
    Date,
    Limit,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Name, Self::Price, Self::Date, Self::Limit]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::Price => "Item Price",
            Self::Date => "Purchase Date",
            Self::Limit => "Expense Limit",
        }
    }

    pub(crate) fn next(&self) -> FormField {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Date,
            Self::Date => Self::Limit,
            Self::Limit => Self::Name,
        }
    }

    pub(crate) fn prev(&self) -> FormField {
        match self {
            Self::Name => Self::Limit,
            Self::Price => Self::Name,
            Self::Date => Self::Price,
            Self::Limit => Self::Date,
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteRecord { id: i64, name: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: FormField,

    // Edit fields; after a row selection these mirror the selected record.
    pub(crate) name_input: String,
    pub(crate) price_input: String,
    pub(crate) date_input: String,
    pub(crate) limit_input: String,

    // Process-lifetime spending limit, never persisted.
    pub(crate) limit: Decimal,
    pub(crate) selected_id: Option<i64>,

    // Record table
    pub(crate) records: Vec<ExpenseRecord>,
    pub(crate) record_index: usize,
    pub(crate) record_scroll: usize,
    pub(crate) record_count: i64,
    pub(crate) total_spent: Decimal,

    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) error_message: String,
    pub(crate) confirm_message: String,
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) show_help: bool,
    pub(crate) show_balance: bool,

    pub(crate) report_dir: PathBuf,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Entries,
            input_mode: InputMode::Normal,
            focus: FormField::Name,

            name_input: String::new(),
            price_input: String::new(),
            date_input: String::new(),
            limit_input: "5000".into(),

            limit: Decimal::from(5000),
            selected_id: None,

            records: Vec::new(),
            record_index: 0,
            record_scroll: 0,
            record_count: 0,
            total_spent: Decimal::ZERO,

            command_input: String::new(),
            status_message: String::new(),
            error_message: String::new(),
            confirm_message: String::new(),
            pending_action: None,
            show_help: false,
            show_balance: false,

            report_dir: PathBuf::from("."),

            visible_rows: 20,
        }
    }

    /// Full list refresh: re-read all records and the aggregates,
    /// replacing the displayed set.
    pub(crate) fn refresh_records(&mut self, db: &Database) -> Result<()> {
        self.records = db.get_records()?;
        self.total_spent = db.total_spent()?;
        self.record_count = db.record_count()?;
        if self.record_index >= self.records.len() && !self.records.is_empty() {
            self.record_index = self.records.len() - 1;
        }
        Ok(())
    }

    pub(crate) fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name_input,
            FormField::Price => &mut self.price_input,
            FormField::Date => &mut self.date_input,
            FormField::Limit => &mut self.limit_input,
        }
    }

    pub(crate) fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name_input,
            FormField::Price => &self.price_input,
            FormField::Date => &self.date_input,
            FormField::Limit => &self.limit_input,
        }
    }

    /// Fill the date field with today's date.
    pub(crate) fn set_date_today(&mut self) {
        self.date_input = Local::now().format(DATE_FORMAT).to_string();
    }

    /// Parse the limit field into the in-memory limit. An unparseable
    /// value keeps the old limit and restores the field text.
    pub(crate) fn commit_limit(&mut self) {
        let trimmed = self.limit_input.trim().to_string();
        match Decimal::from_str(&trimmed) {
            Ok(v) => self.limit = v,
            Err(_) => {
                self.limit_input = self.limit.to_string();
                self.set_status(format!("Invalid limit: '{trimmed}'"));
            }
        }
    }

    fn parsed_price(&self) -> Option<Decimal> {
        Decimal::from_str(self.price_input.trim()).ok()
    }

    // ── Controller operations ─────────────────────────────────

    /// Insert a new record from the edit fields, then clear them and
    /// refresh. The price must parse; everything else is free text.
    pub(crate) fn save_record(&mut self, db: &Database) -> Result<()> {
        let Some(price) = self.parsed_price() else {
            let given = self.price_input.trim().to_string();
            self.set_status(format!("Invalid price: '{given}'"));
            return Ok(());
        };
        let rec = ExpenseRecord::new(
            self.name_input.trim().to_string(),
            price,
            self.date_input.trim().to_string(),
        );
        match db.insert_record(&rec) {
            Ok(id) => {
                self.clear_fields();
                // The form no longer mirrors any row; a stale selection
                // would let a later update blank an unrelated record.
                self.selected_id = None;
                self.refresh_records(db)?;
                self.set_status(format!("Saved record #{id}: {}", rec.item_name));
            }
            Err(e) => self.show_error(format!("Could not save record: {e}")),
        }
        Ok(())
    }

    /// Copy the row under the cursor into the edit fields and remember
    /// its id. With no row there, prior state is left unchanged.
    pub(crate) fn select_row(&mut self) {
        let Some(rec) = self.records.get(self.record_index).cloned() else {
            return;
        };
        let Some(id) = rec.id else {
            return;
        };
        self.selected_id = Some(id);
        self.name_input = rec.item_name.clone();
        self.price_input = rec.item_price.to_string();
        self.date_input = rec.purchase_date.clone();
        self.set_status(format!("Selected #{id}: {}", rec.item_name));
    }

    /// Rewrite the selected record from the edit fields. The selection
    /// is consumed but kept; the fields are cleared and the list
    /// refreshed whatever the outcome.
    pub(crate) fn apply_update(&mut self, db: &Database) -> Result<()> {
        let Some(id) = self.selected_id else {
            self.set_status("No record selected — press Enter on a row first");
            return Ok(());
        };
        let Some(price) = self.parsed_price() else {
            let given = self.price_input.trim().to_string();
            self.set_status(format!("Invalid price: '{given}'"));
            return Ok(());
        };

        let name = self.name_input.trim().to_string();
        let date = self.date_input.trim().to_string();
        match db.update_record(id, &name, price, &date) {
            Ok(()) => self.set_status(format!("Updated #{id}: {name}")),
            // The row vanished under us; not worth more than a notice.
            Err(StoreError::NotFound(_)) => {
                self.set_status(format!("Record #{id} no longer exists"));
            }
            Err(e) => self.show_error(format!("Could not update record #{id}: {e}")),
        }
        self.clear_fields();
        self.refresh_records(db)?;
        Ok(())
    }

    /// Ask for confirmation before deleting the selected record.
    pub(crate) fn request_delete(&mut self) {
        let Some(id) = self.selected_id else {
            self.set_status("No record selected — press Enter on a row first");
            return;
        };
        let name = self
            .records
            .iter()
            .find(|r| r.id == Some(id))
            .map(|r| r.item_name.clone())
            .unwrap_or_else(|| format!("record #{id}"));
        self.confirm_message = format!("Delete '{name}'?");
        self.pending_action = Some(PendingAction::DeleteRecord { id, name });
        self.input_mode = InputMode::Confirm;
    }

    /// Run the confirmed pending action, if any.
    pub(crate) fn execute_pending(&mut self, db: &Database) -> Result<()> {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteRecord { id, name } => match db.delete_record(id) {
                    Ok(()) => {
                        self.clear_fields();
                        self.selected_id = None;
                        self.refresh_records(db)?;
                        if self.record_index >= self.records.len() {
                            self.record_index = self.records.len().saturating_sub(1);
                        }
                        self.set_status(format!("Deleted: {name}"));
                    }
                    Err(e) => self.show_error(format!("Could not delete '{name}': {e}")),
                },
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        Ok(())
    }

    fn clear_fields(&mut self) {
        self.name_input.clear();
        self.price_input.clear();
        self.date_input.clear();
    }

    /// Clear the edit fields and drop the selection.
    pub(crate) fn clear_entries(&mut self) {
        self.clear_fields();
        self.selected_id = None;
        self.set_status("Entries cleared");
    }

    /// `(total_spent, remaining)` where `remaining = limit - total`.
    pub(crate) fn compute_balance(&self) -> (Decimal, Decimal) {
        (self.total_spent, self.limit - self.total_spent)
    }

    /// Re-read all records and hand them to the report writer for
    /// `format`. Failures are reported, never propagated.
    pub(crate) fn export_report(&mut self, db: &Database, format: ReportFormat) -> Result<()> {
        let records = match db.get_records() {
            Ok(r) => r,
            Err(e) => {
                self.show_error(format!("Could not read records for export: {e}"));
                return Ok(());
            }
        };
        match export::write_report(format, &records, &self.report_dir) {
            Ok(path) => self.set_status(format!(
                "Expense report generated: {}",
                path.display()
            )),
            Err(e) => self.show_error(format!("Failed to generate {format} report: {e}")),
        }
        Ok(())
    }

    pub(crate) fn show_error(&mut self, msg: impl Into<String>) {
        self.error_message = msg.into();
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
