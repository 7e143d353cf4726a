use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::orders::OrderGroup;

/// Output column headers paired with their fixed widths, in render order.
/// Widths match the business template regardless of content length.
const COLUMN_LAYOUT: [(&str, f64); 9] = [
    ("ORDER DATE", 11.0),
    ("ITEM NUMBER", 13.0),
    ("PRODUCT LINE", 15.0),
    ("PRODUCT CODE", 15.0),
    ("ITEM QUANTITY", 15.0),
    ("ITEM PRICE", 13.0),
    ("TOTAL PRICE", 13.0),
    ("STATUS", 10.0),
    ("CUSTOMER NAME", 30.0),
];

const ITEM_PRICE_COL: u16 = 5;
const TOTAL_PRICE_COL: u16 = 6;

/// Writes one order group as a single-sheet workbook at the given path.
///
/// The sheet carries a header row, the order lines, and a final GRAND TOTAL
/// row whose label sits in the ITEM PRICE column. Monetary cells are
/// formatted with a currency symbol and two decimal places. An existing file
/// at the same path is overwritten.
pub fn write_order(path: &Path, order: &OrderGroup) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(order.sheet_name())?;

    let money = Format::new().set_num_format("$#,##0.00");

    for (col_idx, (header, width)) in COLUMN_LAYOUT.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *header)?;
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    for (row_idx, line) in order.lines.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, &line.order_date)?;
        worksheet.write_number(row, 1, line.item_number as f64)?;
        worksheet.write_string(row, 2, &line.product_line)?;
        worksheet.write_string(row, 3, &line.product_code)?;
        worksheet.write_number(row, 4, line.item_quantity as f64)?;
        worksheet.write_number_with_format(row, ITEM_PRICE_COL, money_cell(line.item_price), &money)?;
        worksheet.write_number_with_format(row, TOTAL_PRICE_COL, money_cell(line.total_price), &money)?;
        worksheet.write_string(row, 7, &line.status)?;
        worksheet.write_string(row, 8, &line.customer_name)?;
    }

    let total_row = (order.lines.len() + 1) as u32;
    worksheet.write_string(total_row, ITEM_PRICE_COL, "GRAND TOTAL")?;
    worksheet.write_number_with_format(
        total_row,
        TOTAL_PRICE_COL,
        money_cell(order.grand_total),
        &money,
    )?;

    workbook.save(path)?;
    Ok(())
}

fn money_cell(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
