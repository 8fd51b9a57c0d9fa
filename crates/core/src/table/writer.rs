//! CSV artifact writing.

use std::io::Write;

use super::builder::NoteTable;

/// Write the table as RFC-4180 CSV: header first, one record per row, with
/// the csv crate's standard quoting so embedded delimiters, quotes and line
/// breaks round-trip.
pub fn write_csv<W: Write>(table: &NoteTable, writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&table.header)?;
    for row in &table.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}
