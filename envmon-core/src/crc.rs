//! CRC-8 used by Sensirion humidity sensors
//!
//! Polynomial 0x31 (x^8 + x^5 + x^4 + 1), initial value 0xFF, processed
//! MSB first with no reflection and no final XOR. Each 16-bit word the
//! sensor sends is followed by the CRC of its two bytes.

/// CRC seed
pub const CRC_INIT: u8 = 0xFF;

/// CRC polynomial (implicit x^8)
pub const CRC_POLY: u8 = 0x31;

/// Compute the CRC-8 of `data`
pub const fn crc8(data: &[u8]) -> u8 {
    let mut crc = CRC_INIT;
    let mut i = 0;
    while i < data.len() {
        crc ^= data[i];
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        i += 1;
    }
    crc
}

/// Check a 2-byte word against the checksum byte received with it
pub const fn verify_word(word: [u8; 2], checksum: u8) -> bool {
    crc8(&word) == checksum
}
