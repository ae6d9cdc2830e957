//! BR Code interpreter: sanitized string → [`ParsedBrCode`].
use crate::crc::compute_crc16;
use crate::data_model::{ParsedBrCode, PayloadType};
use crate::error::BrCodeError;
use crate::normalizer::sanitize;
use crate::profile::ParseProfile;
use emv_tlv::{parse_tlv, Tag, TlvMap};

pub const PAYLOAD_FORMAT_INDICATOR: Tag = Tag::new(0);
pub const POINT_OF_INITIATION_METHOD: Tag = Tag::new(1);
pub const MERCHANT_CATEGORY_CODE: Tag = Tag::new(52);
pub const TRANSACTION_CURRENCY: Tag = Tag::new(53);
pub const TRANSACTION_AMOUNT: Tag = Tag::new(54);
pub const COUNTRY_CODE: Tag = Tag::new(58);
pub const MERCHANT_NAME: Tag = Tag::new(59);
pub const MERCHANT_CITY: Tag = Tag::new(60);
pub const POSTAL_CODE: Tag = Tag::new(61);
pub const ADDITIONAL_DATA: Tag = Tag::new(62);
pub const CRC16: Tag = Tag::new(63);

/// Merchant account information templates occupy tags 26 through 51.
pub const MERCHANT_ACCOUNT_FIRST: u8 = 26;
pub const MERCHANT_ACCOUNT_LAST: u8 = 51;

// Sub-tags inside a merchant account template
const GUI: Tag = Tag::new(0);
const PIX_KEY: Tag = Tag::new(1);
const INFO_ADICIONAL: Tag = Tag::new(2);

// Sub-tag inside the additional data field
const TXID: Tag = Tag::new(5);

/// Width of the checksum value at the end of the payload.
const CRC_LEN: usize = 4;

/// Decode a BR Code with the default (lenient) profile.
pub fn parse_br_code(input: &str) -> Result<ParsedBrCode, BrCodeError> {
    parse_br_code_with(input, &ParseProfile::default())
}

/// Decode a BR Code under an explicit profile.
pub fn parse_br_code_with(input: &str, profile: &ParseProfile) -> Result<ParsedBrCode, BrCodeError> {
    let raw = sanitize(input);
    let root = parse_tlv(&raw)?;

    let payload_format_indicator = field(&root, PAYLOAD_FORMAT_INDICATOR)
        .ok_or_else(|| missing(PAYLOAD_FORMAT_INDICATOR))?;

    let crc = verify_checksum(&raw, &root, profile)?;

    let point_of_initiation_method = field(&root, POINT_OF_INITIATION_METHOD);
    let payload_type = PayloadType::from_point_of_initiation(point_of_initiation_method.as_deref());
    tracing::debug!(?payload_type, profile = %profile.name, "classified payload");

    let txid = match root.get(ADDITIONAL_DATA) {
        Some(value) => parse_tlv(value)?.get(TXID).map(str::to_string),
        None => None,
    };

    let (pix_key, info_adicional) = find_pix_arrangement(&root, &profile.pix_gui)?;

    let transaction_amount = root
        .get(TRANSACTION_AMOUNT)
        .map(parse_amount)
        .transpose()?;

    Ok(ParsedBrCode {
        payload_type,
        payload_format_indicator,
        point_of_initiation_method,
        merchant_category_code: field(&root, MERCHANT_CATEGORY_CODE),
        transaction_currency: field(&root, TRANSACTION_CURRENCY),
        transaction_amount,
        country_code: field(&root, COUNTRY_CODE),
        merchant_name: field(&root, MERCHANT_NAME),
        merchant_city: field(&root, MERCHANT_CITY),
        postal_code: field(&root, POSTAL_CODE),
        txid,
        pix_key,
        info_adicional,
        crc,
        raw,
    })
}

/// Checks tag 63 against the CRC16 of everything before the last four
/// characters. Returns the declared checksum, uppercased, when present.
fn verify_checksum(
    raw: &str,
    root: &TlvMap,
    profile: &ParseProfile,
) -> Result<Option<String>, BrCodeError> {
    let Some(declared) = root.get(CRC16) else {
        if profile.require_checksum {
            return Err(missing(CRC16));
        }
        tracing::debug!("no CRC16 tag, skipping checksum");
        return Ok(None);
    };

    let signed_len = raw.chars().count().saturating_sub(CRC_LEN);
    let signed: String = raw.chars().take(signed_len).collect();
    let expected = compute_crc16(&signed);
    let actual = declared.to_ascii_uppercase();

    if expected != actual {
        return Err(BrCodeError::ChecksumMismatch { expected, actual });
    }
    tracing::trace!(crc = %actual, "checksum verified");
    Ok(Some(actual))
}

/// Walks merchant account templates in ascending tag order and returns the
/// PIX key and optional additional info from the first one whose GUI matches.
fn find_pix_arrangement(
    root: &TlvMap,
    pix_gui: &str,
) -> Result<(String, Option<String>), BrCodeError> {
    for id in MERCHANT_ACCOUNT_FIRST..=MERCHANT_ACCOUNT_LAST {
        let tag = Tag::new(id);
        let Some(value) = root.get(tag) else {
            continue;
        };

        let template = parse_tlv(value)?;
        let is_pix = template
            .get(GUI)
            .is_some_and(|gui| gui.eq_ignore_ascii_case(pix_gui));
        if !is_pix {
            tracing::debug!(%tag, gui = ?template.get(GUI), "skipping non-PIX arrangement");
            continue;
        }

        let pix_key = field(&template, PIX_KEY)
            .ok_or_else(|| BrCodeError::MissingMandatoryTag(format!("{}.{}", tag, PIX_KEY)))?;
        return Ok((pix_key, field(&template, INFO_ADICIONAL)));
    }

    Err(missing(Tag::new(MERCHANT_ACCOUNT_FIRST)))
}

fn parse_amount(value: &str) -> Result<f64, BrCodeError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| BrCodeError::InvalidAmount(value.to_string()))
}

fn field(map: &TlvMap, tag: Tag) -> Option<String> {
    map.get(tag).map(str::to_string)
}

fn missing(tag: Tag) -> BrCodeError {
    BrCodeError::MissingMandatoryTag(tag.to_string())
}
