#[path = "../common/mod.rs"]
mod common;

use simutil::codec::{
    bytes_from_hex, hex_from_bytes, hex_from_bytes_spaced, hex_from_ints, ints_from_hex,
};
use simutil::Error;

#[test]
fn hex_from_bytes_agrees_with_hex_crate() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(hex_from_bytes(&data), hex::encode(&data));
}

#[test]
fn bytes_from_hex_agrees_with_hex_crate() -> anyhow::Result<()> {
    let s = "a0a40000023f00";
    assert_eq!(bytes_from_hex(s)?, hex::decode(s)?);
    assert_eq!(bytes_from_hex(&s.to_uppercase())?, hex::decode(s)?);
    Ok(())
}

#[test]
fn empty_boundaries() -> anyhow::Result<()> {
    assert_eq!(hex_from_bytes(&[]), "");
    assert!(bytes_from_hex("")?.is_empty());
    assert!(ints_from_hex("")?.is_empty());
    assert_eq!(hex_from_ints(&[])?, "");
    Ok(())
}

#[test]
fn malformed_input_is_rejected_without_partial_output() {
    common::init_logging();
    for bad in ["abc", "zz", "00 11", "0g", "\u{e9}0"] {
        match bytes_from_hex(bad) {
            Err(Error::InvalidHex { .. }) => {}
            other => panic!("expected InvalidHex for {bad:?}, got {other:?}"),
        }
        assert!(ints_from_hex(bad).is_err());
    }
}

#[test]
fn ints_and_bytes_carry_the_same_values() -> anyhow::Result<()> {
    let s = "00017f80feff";
    let ints = ints_from_hex(s)?;
    let bytes = bytes_from_hex(s)?;
    assert_eq!(ints, bytes.iter().map(|&b| i32::from(b)).collect::<Vec<_>>());
    assert_eq!(hex_from_ints(&ints)?, s);
    Ok(())
}

#[test]
fn hex_from_ints_does_not_wrap() {
    common::init_logging();
    assert_eq!(
        hex_from_ints(&[0x10, 0x110]),
        Err(Error::InvalidValue {
            index: 1,
            value: 0x110
        })
    );
}

#[test]
fn spaced_output_for_logs() {
    assert_eq!(hex_from_bytes_spaced(&[0xa0, 0xa4, 0x00]), "a0 a4 00");
}
