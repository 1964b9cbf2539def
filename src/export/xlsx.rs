use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use super::{ExportError, REPORT_COLUMNS};
use crate::models::ExpenseRecord;

pub(super) fn write(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Expenses")?;

    let header = Format::new().set_bold();
    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    sheet.set_column_width(1, 30.0)?;
    sheet.set_column_width(3, 22.0)?;

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, rec.serial() as f64)?;
        sheet.write_string(row, 1, &rec.item_name)?;
        sheet.write_number(row, 2, rec.item_price.to_f64().unwrap_or(0.0))?;
        sheet.write_string(row, 3, &rec.purchase_date)?;
    }

    workbook.save(path)?;
    Ok(())
}
