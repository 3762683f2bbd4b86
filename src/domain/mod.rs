//! Value objects and the pure encoding algorithms of a BR Code.
//!
//! Nothing in this layer performs I/O: field identifiers, TLV encoding,
//! the CRC-16 checksum, amounts and the validated payment request.

pub mod amount;
pub mod crc;
pub mod fields;
pub mod request;
pub mod tlv;
