//! EMV-QR TLV decoder.
//!
//! Payloads are flat strings of `TTLLVVVV...` fields: a two-digit decimal tag,
//! a two-digit decimal length and that many characters of value. Values may
//! themselves hold another TLV stream, which is decoded by calling
//! [`parse_tlv`] again on the value.
//!
//! ```
//! use emv_tlv::{parse_tlv, Tag};
//!
//! let root = parse_tlv("000201260800041234").unwrap();
//! assert_eq!(root.get(0u8), Some("01"));
//!
//! let nested = parse_tlv(root.get(Tag::new(26)).unwrap()).unwrap();
//! assert_eq!(nested.get(Tag::new(0)), Some("1234"));
//! ```
pub mod parser;
pub mod tag;

pub use parser::{parse_tlv, TlvError};
pub use tag::{Tag, TlvMap};
