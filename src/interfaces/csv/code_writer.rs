use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One generated code, keyed by the reference label it carries.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct GeneratedCode {
    pub txid: String,
    pub code: String,
}

/// Writes generated codes as CSV with a `txid,code` header.
pub struct CodeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_codes(&mut self, codes: impl IntoIterator<Item = GeneratedCode>) -> Result<()> {
        for code in codes {
            self.writer.serialize(code)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes generated codes as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut sink: W, codes: &[GeneratedCode]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, codes)?;
    writeln!(sink)?;
    Ok(())
}
