use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;

use super::ExportError;
use crate::models::ExpenseRecord;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 640;

const PALETTE: [RGBColor; 8] = [
    RGBColor(4, 196, 217),
    RGBColor(217, 176, 54),
    RGBColor(72, 105, 102),
    RGBColor(189, 42, 46),
    RGBColor(66, 96, 45),
    RGBColor(137, 180, 250),
    RGBColor(94, 94, 94),
    RGBColor(194, 187, 0),
];

fn chart_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Chart(e.to_string())
}

/// Pie chart of the expense distribution, one slice per record with a
/// positive price.
pub(super) fn write(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    let slices: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|r| r.item_price > Decimal::ZERO)
        .collect();
    if slices.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let sizes: Vec<f64> = slices
        .iter()
        .map(|r| r.item_price.to_f64().unwrap_or(0.0))
        .collect();
    let labels: Vec<String> = slices.iter().map(|r| r.item_name.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled("Expense Distribution", ("sans-serif", 28))
        .map_err(chart_err)?;

    let center = ((WIDTH / 2) as i32, (HEIGHT / 2) as i32);
    let radius = (HEIGHT / 3) as f64;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-50.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;
    Ok(())
}
