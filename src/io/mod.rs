pub mod csv_read;
pub mod excel_write;
