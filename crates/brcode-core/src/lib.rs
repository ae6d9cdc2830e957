//! BR Code Core: Interpreter, CRC16 e Data Model
//!
//! Decodes PIX BR Code payloads (EMV-QR TLV strings) into a [`ParsedBrCode`],
//! checking the CRC16 in tag 63 and the mandatory payload format indicator
//! and PIX merchant account template.
//!
//! ```
//! use brcode_core::{compute_crc16, parse_br_code, PayloadType};
//!
//! let body = "00020101021226370014BR.GOV.BCB.PIX0115abc@example.com\
//!             5303986540510.005802BR5907MATHEUS6008SAOPAULO6304";
//! let code = format!("{}{}", body, compute_crc16(body));
//!
//! let parsed = parse_br_code(&code).unwrap();
//! assert_eq!(parsed.payload_type, PayloadType::Dynamic);
//! assert_eq!(parsed.pix_key, "abc@example.com");
//! assert_eq!(parsed.transaction_amount, Some(10.0));
//! ```

pub mod crc;
pub mod data_model;
pub mod error;
pub mod interpreter;
pub mod normalizer;
pub mod profile;

pub use crc::{compute_crc16, crc16};
pub use data_model::{ParsedBrCode, PayloadType};
pub use emv_tlv::{parse_tlv, Tag, TlvError, TlvMap};
pub use error::BrCodeError;
pub use interpreter::{parse_br_code, parse_br_code_with};
pub use normalizer::sanitize;
pub use profile::{ParseProfile, PIX_GUI};
