use crate::domain::amount::Amount;
use crate::domain::request::PaymentRequest;
use crate::error::{PixError, Result};
use serde::Deserialize;
use std::io::Read;

/// A raw CSV row, before validation.
///
/// Expected headers: `key,name,city,amount,description,txid`. The last three
/// columns may be empty or missing.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub key: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
}

impl TryFrom<PaymentRecord> for PaymentRequest {
    type Error = PixError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        let mut request = PaymentRequest::new(record.key, &record.name, &record.city)?;
        if let Some(amount) = record.amount.as_deref().filter(|a| !a.trim().is_empty()) {
            request = request.with_amount(amount.parse::<Amount>()?);
        }
        if let Some(description) = record.description {
            request = request.with_description(description);
        }
        if let Some(txid) = record.txid {
            request = request.with_reference_id(txid);
        }
        Ok(request)
    }
}

/// Reads payment requests from a CSV source.
///
/// Wraps `csv::Reader` and yields one `Result<PaymentRequest>` per row, so a
/// bad row does not stop the rest of the batch.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|row| row.map_err(PixError::from).and_then(PaymentRequest::try_from))
    }
}
