use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::ExportError;
use crate::models::ExpenseRecord;

// A4 portrait, one record per line.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 15.0;
const TOP_Y: f64 = 280.0;
const LINE_STEP: f64 = 8.0;
const LINES_PER_PAGE: usize = 33;
const FONT_SIZE: f64 = 12.0;

pub(super) fn write(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Expense Report",
        Mm(PAGE_WIDTH as _),
        Mm(PAGE_HEIGHT as _),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (i, rec) in records.iter().enumerate() {
        let line_no = i % LINES_PER_PAGE;
        if i > 0 && line_no == 0 {
            let (page, new_layer) =
                doc.add_page(Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
        }
        let y = TOP_Y - line_no as f64 * LINE_STEP;
        layer.use_text(
            rec.report_line(),
            FONT_SIZE as _,
            Mm(MARGIN_LEFT as _),
            Mm(y as _),
            &font,
        );
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(())
}
