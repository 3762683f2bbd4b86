//! BR Code field identifiers and the fixed values of a static Pix code.

pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
pub const MERCHANT_ACCOUNT_INFORMATION: &str = "26";
pub const MERCHANT_ACCOUNT_GUI: &str = "00";
pub const MERCHANT_ACCOUNT_KEY: &str = "01";
pub const MERCHANT_ACCOUNT_DESCRIPTION: &str = "02";
pub const MERCHANT_CATEGORY_CODE: &str = "52";
pub const TRANSACTION_CURRENCY: &str = "53";
pub const TRANSACTION_AMOUNT: &str = "54";
pub const COUNTRY_CODE: &str = "58";
pub const MERCHANT_NAME: &str = "59";
pub const MERCHANT_CITY: &str = "60";
pub const ADDITIONAL_DATA_FIELD_TEMPLATE: &str = "62";
pub const ADDITIONAL_DATA_REFERENCE_LABEL: &str = "05";
pub const CRC16: &str = "63";

pub const PAYLOAD_FORMAT_VERSION: &str = "01";
pub const PIX_GUI: &str = "br.gov.bcb.pix";
pub const CATEGORY_CODE_UNSPECIFIED: &str = "0000";
/// ISO 4217 numeric code for the Brazilian Real.
pub const CURRENCY_BRL: &str = "986";
pub const COUNTRY_BR: &str = "BR";
/// Reference label meaning "no transaction reference".
pub const NO_REFERENCE: &str = "***";

/// Length token of the CRC field. The checksum is always 4 hex digits.
pub const CRC16_LENGTH: &str = "04";

pub const MAX_NAME_LEN: usize = 25;
pub const MAX_CITY_LEN: usize = 15;
