/// CRC-16/CCITT-FALSE
///
/// Polynomial 0x1021, initial value 0xFFFF, no reflection, no final XOR.
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    const POLY: u16 = 0x1021;

    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _bit in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Renders a checksum as four uppercase, zero-padded hex digits.
pub fn to_hex(crc: u16) -> String {
    format!("{crc:04X}")
}
