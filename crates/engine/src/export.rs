//! CSV export of the fetched expense table.
//!
//! The layout is fixed: a header row `ID,Date,Category,Item,Quantity,Amount,Total`
//! followed by one row per expense, no index column.

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, WriterBuilder};

use crate::{Expense, ResultEngine};

pub const CSV_HEADER: [&str; 7] = [
    "ID", "Date", "Category", "Item", "Quantity", "Amount", "Total",
];

/// Write `expenses` as CSV into `writer`. The header is written even when
/// there are no rows.
pub fn write_csv<W: io::Write>(expenses: &[Expense], writer: W) -> ResultEngine<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        writer.serialize(expense)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render `expenses` as UTF-8 CSV bytes.
pub fn to_csv_bytes(expenses: &[Expense]) -> ResultEngine<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(expenses, &mut buffer)?;
    Ok(buffer)
}

/// Write `expenses` to a CSV file at `path`, replacing it if present.
pub fn export_to_path(expenses: &[Expense], path: impl AsRef<Path>) -> ResultEngine<()> {
    let path = path.as_ref();
    let file = File::create(path).inspect_err(|err| {
        tracing::error!("failed to create export file {}: {err}", path.display());
    })?;
    write_csv(expenses, file)?;
    tracing::info!(rows = expenses.len(), path = %path.display(), "expenses exported");
    Ok(())
}

/// Parse CSV in the export layout back into expenses.
pub fn read_csv<R: io::Read>(reader: R) -> ResultEngine<Vec<Expense>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut expenses = Vec::new();
    for row in reader.deserialize() {
        expenses.push(row?);
    }
    Ok(expenses)
}
