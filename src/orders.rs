use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::model::{OrderLine, SaleRecord};

/// All rows belonging to one order, ready to be rendered as a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGroup {
    pub order_id: u32,
    /// Lines sorted ascending by item number.
    pub lines: Vec<OrderLine>,
    /// Sum of the lines' total prices, rendered as the GRAND TOTAL row.
    pub grand_total: Decimal,
}

impl OrderGroup {
    /// Customer name taken from the first row of the group. Rows of one order
    /// are expected to agree on the name; if they do not, the first row wins.
    pub fn customer_name(&self) -> &str {
        self.lines
            .first()
            .map(|line| line.customer_name.as_str())
            .unwrap_or_default()
    }

    /// File name of the exported workbook, e.g. `ORDER100_OBrienSons.xlsx`.
    pub fn file_name(&self) -> String {
        format!(
            "ORDER{}_{}.xlsx",
            self.order_id,
            sanitize_customer_name(self.customer_name())
        )
    }

    /// Name of the single worksheet inside the exported workbook.
    pub fn sheet_name(&self) -> String {
        format!("Order #{}", self.order_id)
    }
}

/// Groups sale records into per-order bundles.
///
/// Records are projected into [`OrderLine`]s (deriving the total price),
/// partitioned by order identifier, and sorted by item number within each
/// group. Orders are returned in ascending order-id order.
pub fn build_orders(records: &[SaleRecord]) -> Vec<OrderGroup> {
    let mut grouped: BTreeMap<u32, Vec<OrderLine>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.order_id)
            .or_default()
            .push(OrderLine::from(record));
    }

    grouped
        .into_iter()
        .map(|(order_id, mut lines)| {
            lines.sort_by_key(|line| line.item_number);
            if let Some(first) = lines.first() {
                if lines
                    .iter()
                    .any(|line| line.customer_name != first.customer_name)
                {
                    warn!(
                        order_id,
                        customer_name = %first.customer_name,
                        "order rows disagree on customer name, using the first row's value"
                    );
                }
            }
            let grand_total = lines.iter().map(|line| line.total_price).sum();
            OrderGroup {
                order_id,
                lines,
                grand_total,
            }
        })
        .collect()
}

/// Strips every non-word character from a customer name so it can be used in
/// a file name. Only letters, digits, and underscores survive.
pub fn sanitize_customer_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_')
        .collect()
}
