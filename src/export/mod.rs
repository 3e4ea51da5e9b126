//! Statement export
//!
//! A statement covers one period and comes in two formats:
//! - PDF: single page, built without external tooling
//! - CSV: heading block, entry table and summary block

pub mod csv;
pub mod pdf;
pub mod pdf_document;
pub mod statement;

pub use csv::statement_csv;
pub use pdf::statement_pdf;
pub use pdf_document::{Font, PdfDocument};
pub use statement::{
    statement_file_name, write_statement, StatementData, StatementFormat, DEFAULT_TITLE,
};
