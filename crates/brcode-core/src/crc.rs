//! CRC16/CCITT-FALSE as used by tag 63.

const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// Raw CRC16/CCITT-FALSE register over `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if (crc & 0x8000) != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Checksum of `data` as four uppercase hex digits.
pub fn compute_crc16(data: &str) -> String {
    format!("{:04X}", crc16(data.as_bytes()))
}
