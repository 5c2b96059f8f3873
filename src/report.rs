//! Measurement table formatting.
//!
//! Layout: a `"  x y"` header, then one line per reading with `x` right
//! aligned in three columns without decimals and `y` with six decimals.

use std::io::{self, Write};

use vaultarc_designer::{MeasurementRow, MeasurementTable};

pub const HEADER: &str = "  x y";

pub fn format_row(row: &MeasurementRow) -> String {
    format!("{:3.0} {:.6}", row.x, row.y)
}

/// Writes the header and every row of `table` to `out`.
pub fn write_table<W: Write>(out: &mut W, table: &MeasurementTable) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for row in table {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}
