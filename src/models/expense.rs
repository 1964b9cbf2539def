use rust_decimal::Decimal;

/// One expense entry. `id` is assigned by the store on insert and is
/// stable for the lifetime of the row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub id: Option<i64>,
    pub item_name: String,
    pub item_price: Decimal,
    pub purchase_date: String,
}

impl ExpenseRecord {
    pub fn new(item_name: String, item_price: Decimal, purchase_date: String) -> Self {
        Self {
            id: None,
            item_name,
            item_price,
            purchase_date,
        }
    }

    /// Serial number shown in the table and in reports. 0 until the
    /// store has assigned an id.
    pub fn serial(&self) -> i64 {
        self.id.unwrap_or(0)
    }

    /// The line format used by the PDF report.
    pub fn report_line(&self) -> String {
        format!(
            "Item Name: {}, Item Price: {}, Purchase Date: {}",
            self.item_name, self.item_price, self.purchase_date
        )
    }
}
