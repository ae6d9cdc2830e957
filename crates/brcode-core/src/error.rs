//! Unified error model for BR Code decoding.
use emv_tlv::TlvError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrCodeError {
    #[error(transparent)]
    Tlv(#[from] TlvError),

    #[error("missing mandatory tag: {0}")]
    MissingMandatoryTag(String),

    /// `expected` is the recomputed CRC16, `actual` the value carried by tag 63.
    #[error("invalid CRC16: expected {expected}, found {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid transaction amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid parse profile: {0}")]
    Profile(String),
}
