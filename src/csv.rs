// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

/// Written first so spreadsheet tools pick UTF-8 for Arabic text.
pub const UTF8_BOM: &str = "\u{feff}";

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// BOM, header line, then one row per record in dataset order.
pub fn write_dataset<W: Write>(mut w: W, headers: &[&str], ds: &DataSet, sep: char) -> io::Result<()> {
    w.write_all(UTF8_BOM.as_bytes())?;
    write_row(&mut w, headers, sep)?;
    for r in ds.records() {
        write_row(&mut w, &[r.text.as_str(), r.score_cell().as_str()], sep)?;
    }
    Ok(())
}
