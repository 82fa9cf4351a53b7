#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use simutil::codec::{hex_from_text, text_from_hex, text_from_ints};
use simutil::strings::right_pad;
use simutil::Error;

#[test]
fn filler_elision() -> anyhow::Result<()> {
    assert_eq!(text_from_hex("ff")?, "");
    assert_eq!(text_from_hex("ff41")?, "A");
    assert_eq!(text_from_hex("41ff42")?, "AB");
    Ok(())
}

#[test]
fn spn_record_decodes_to_name() -> anyhow::Result<()> {
    let record = fixtures::spn_record();
    assert_eq!(text_from_hex(&record[2..])?, fixtures::SPN_NAME);
    Ok(())
}

#[test]
fn fixed_width_field_roundtrip() -> anyhow::Result<()> {
    // encode, pad to 16 bytes with filler, decode back
    let field = right_pad(&hex_from_text(fixtures::SPN_NAME)?, 32);
    assert_eq!(field.len(), 32);
    assert!(field.ends_with("ffffff"));
    assert_eq!(text_from_hex(&field)?, fixtures::SPN_NAME);
    Ok(())
}

#[test]
fn hex_from_text_rejects_above_latin1() {
    common::init_logging();
    assert_eq!(
        hex_from_text("ok\u{3042}"),
        Err(Error::InvalidCharacter {
            index: 2,
            ch: '\u{3042}'
        })
    );
}

#[test]
fn text_from_hex_rejects_malformed() {
    assert!(matches!(text_from_hex("4"), Err(Error::InvalidHex { .. })));
    assert!(matches!(text_from_hex("4g"), Err(Error::InvalidHex { .. })));
}

#[test]
fn text_from_ints_keeps_every_value() -> anyhow::Result<()> {
    assert_eq!(text_from_ints(&[0x41, 0xff, 0x42])?, "A\u{ff}B");
    assert!(matches!(
        text_from_ints(&[-5]),
        Err(Error::InvalidValue { index: 0, value: -5 })
    ));
    Ok(())
}
