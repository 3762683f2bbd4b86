use std::io::Error;
use tempfile::NamedTempFile;

#[allow(dead_code)]
pub const HEADER: [&str; 6] = ["key", "name", "city", "amount", "description", "txid"];

#[allow(dead_code)]
/// Writes a batch input file with the standard header followed by `rows`.
pub fn write_batch_csv(rows: &[[&str; 6]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}

#[allow(dead_code)]
/// Splits a code into the part covered by the CRC and the 4 hex digits.
pub fn split_checksum(code: &str) -> (&str, &str) {
    code.split_at(code.len() - 4)
}
