//! Symbol extraction and classification.
//!
//! - `extract`: keep only imported (`U`) symbols from a raw symbol dump.
//! - `classify`: attribute each symbol to a library tag via its version suffix
//!   and group the results into a `SymbolTable`.

pub mod classify;
pub mod extract;

pub use classify::{build_symbol_table, classify_symbol};
pub use extract::extract_undefined;

use crate::model::SymbolTable;

/// Run extraction and classification over raw symbol-table lines.
pub fn symbol_table_from_dump<I, S>(lines: I) -> SymbolTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_symbol_table(extract_undefined(lines))
}
