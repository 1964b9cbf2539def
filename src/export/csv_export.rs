use std::path::Path;

use super::{ExportError, REPORT_COLUMNS};
use crate::models::ExpenseRecord;

pub(super) fn write(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(REPORT_COLUMNS)?;
    for rec in records {
        wtr.write_record([
            rec.serial().to_string(),
            rec.item_name.clone(),
            rec.item_price.to_string(),
            rec.purchase_date.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
