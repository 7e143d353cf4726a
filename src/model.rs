use rust_decimal::Decimal;
use serde::Deserialize;

/// One line of the flat sales ledger, as deserialized from the source CSV.
///
/// Header names are exact and case-sensitive. The address columns (`ADDRESS`,
/// `CITY`, `STATE`, `POSTAL CODE`, `COUNTRY`) are not part of the row type:
/// they are projected away at load time and never reach the output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "ORDER ID")]
    pub order_id: u32,
    #[serde(rename = "ORDER DATE")]
    pub order_date: String,
    #[serde(rename = "ITEM NUMBER")]
    pub item_number: u32,
    #[serde(rename = "PRODUCT LINE")]
    pub product_line: String,
    #[serde(rename = "PRODUCT CODE")]
    pub product_code: String,
    #[serde(rename = "ITEM QUANTITY")]
    pub item_quantity: u32,
    #[serde(rename = "ITEM PRICE")]
    pub item_price: Decimal,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "CUSTOMER NAME")]
    pub customer_name: String,
}

/// A single row of one order: the sale record without its order identifier,
/// extended with the derived total price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_date: String,
    pub item_number: u32,
    pub product_line: String,
    pub product_code: String,
    pub item_quantity: u32,
    pub item_price: Decimal,
    pub total_price: Decimal,
    pub status: String,
    pub customer_name: String,
}

impl From<&SaleRecord> for OrderLine {
    fn from(record: &SaleRecord) -> Self {
        let total_price = Decimal::from(record.item_quantity) * record.item_price;
        Self {
            order_date: record.order_date.clone(),
            item_number: record.item_number,
            product_line: record.product_line.clone(),
            product_code: record.product_code.clone(),
            item_quantity: record.item_quantity,
            item_price: record.item_price,
            total_price,
            status: record.status.clone(),
            customer_name: record.customer_name.clone(),
        }
    }
}
