use crate::domain::crc::{crc16_ccitt_false, to_hex};
use crate::domain::fields::*;
use crate::domain::request::PaymentRequest;
use crate::domain::tlv::TlvWriter;
use tracing::debug;

/// Turns a validated [`PaymentRequest`] into a "Copia e Cola" code.
///
/// The pipeline is `build_payload` → `compute_checksum` → `generate`. Every
/// step is a pure function of the request, so a builder can be shared freely
/// and called any number of times with identical results.
#[derive(Debug, Clone, Copy)]
pub struct PayloadBuilder<'a> {
    request: &'a PaymentRequest,
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(request: &'a PaymentRequest) -> Self {
        Self { request }
    }

    /// Assembles every field except the trailing CRC, in BR Code order.
    pub fn build_payload(&self) -> String {
        let req = self.request;

        let merchant_account = TlvWriter::new()
            .field(MERCHANT_ACCOUNT_GUI, PIX_GUI)
            .field(MERCHANT_ACCOUNT_KEY, req.payee_key())
            .optional_field(MERCHANT_ACCOUNT_DESCRIPTION, req.description());

        let additional_data =
            TlvWriter::new().field(ADDITIONAL_DATA_REFERENCE_LABEL, req.reference_id());

        let amount = req.amount().map(|a| a.to_string());

        TlvWriter::new()
            .field(PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_VERSION)
            .template(MERCHANT_ACCOUNT_INFORMATION, merchant_account)
            .field(MERCHANT_CATEGORY_CODE, CATEGORY_CODE_UNSPECIFIED)
            .field(TRANSACTION_CURRENCY, CURRENCY_BRL)
            .optional_field(TRANSACTION_AMOUNT, amount.as_deref())
            .field(COUNTRY_CODE, COUNTRY_BR)
            .field(MERCHANT_NAME, req.payee_name())
            .field(MERCHANT_CITY, req.payee_city())
            .template(ADDITIONAL_DATA_FIELD_TEMPLATE, additional_data)
            .finish()
    }

    /// Generates the final code: payload, CRC field id and length, CRC.
    pub fn generate(&self) -> String {
        let payload = self.build_payload();
        let checksum = compute_checksum(&payload);
        debug!(%payload, %checksum, "assembled BR Code");
        format!("{payload}{CRC16}{CRC16_LENGTH}{checksum}")
    }
}

/// Checksum of a payload as four uppercase hex digits.
///
/// Covers `payload || "6304"`: the CRC field's id and length are part of
/// the checked range, its value is not.
pub fn compute_checksum(payload: &str) -> String {
    let mut covered = String::with_capacity(payload.len() + 4);
    covered.push_str(payload);
    covered.push_str(CRC16);
    covered.push_str(CRC16_LENGTH);
    to_hex(crc16_ccitt_false(covered.as_bytes()))
}

/// Shorthand for `PayloadBuilder::new(request).generate()`.
pub fn generate(request: &PaymentRequest) -> String {
    PayloadBuilder::new(request).generate()
}
