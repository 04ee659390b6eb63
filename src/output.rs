//! CSV output formatting.
//!
//! Writes rows directly to a `Write` sink, with no intermediate `String`
//! per row. Uses `itoa` for the label and `ryu` for features. No quoting:
//! generated fields can never contain a comma.

use std::io::{self, Write};

use rand::Rng;

use crate::row::Row;

/// Write one row as a comma-joined line, terminated by `\n`.
pub fn write_row<W: Write>(w: &mut W, row: &Row) -> io::Result<()> {
    let mut label_buf = itoa::Buffer::new();
    let mut feature_buf = ryu::Buffer::new();

    w.write_all(bool_text(row.flag_a))?;
    w.write_all(b",")?;
    w.write_all(bool_text(row.flag_b))?;
    w.write_all(b",")?;
    w.write_all(label_buf.format(row.label).as_bytes())?;
    for &x in &row.features {
        w.write_all(b",")?;
        w.write_all(feature_buf.format(x).as_bytes())?;
    }
    w.write_all(b"\n")
}

/// Sample and write exactly `num_rows` rows of `features` columns each.
///
/// Rows are serialized as they are drawn; the dataset is never held in
/// memory. `num_rows = 0` writes nothing.
pub fn write_dataset<W: Write, R: Rng>(
    w: &mut W,
    num_rows: u64,
    features: usize,
    rng: &mut R,
) -> io::Result<()> {
    for _ in 0..num_rows {
        write_row(w, &Row::sample(features, rng))?;
    }
    Ok(())
}

fn bool_text(b: bool) -> &'static [u8] {
    if b { b"true" } else { b"false" }
}
