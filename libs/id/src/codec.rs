//! Length-prefixed hex fields.
//!
//! A component is written as `<L><digits>`, where `digits` is the uppercase
//! hex form of the value (1 to 16 characters, no padding) and `L` is a single
//! hex digit holding `digits.len() - 1`:
//!
//! | value                   | field                 |
//! |-------------------------|-----------------------|
//! | `0x0`                   | `00`                  |
//! | `0x1`                   | `01`                  |
//! | `0x20`                  | `120`                 |
//! | `0xAF000F`              | `5AF000F`             |
//! | `0x7FFFFFFFFFFFFFFF`    | `F7FFFFFFFFFFFFFFF`   |
//!
//! Decoding accepts either hex case; encoding always emits uppercase.

use std::fmt;

use crate::{Component, FieldError};

/// Number of hex digits needed to write `value` (at least one).
#[must_use]
pub const fn digit_count(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(4)
    }
}

/// Length of the encoded field for `component`, including the length digit.
#[must_use]
pub const fn encoded_len(component: Component) -> usize {
    1 + digit_count(component.value())
}

/// Writes the field for `component`.
pub fn write_component<W: fmt::Write>(out: &mut W, component: Component) -> fmt::Result {
    let value = component.value();
    write!(out, "{:X}{:X}", digit_count(value) - 1, value)
}

/// Encodes `component` as a standalone field.
#[must_use]
pub fn encode_component(component: Component) -> String {
    let value = component.value();
    format!("{:X}{:X}", digit_count(value) - 1, value)
}

/// Decodes one field starting at byte `offset` of `input`.
///
/// Returns the component and the number of bytes consumed.
pub fn decode_component(input: &str, offset: usize) -> Result<(Component, usize), FieldError> {
    let bytes = input.as_bytes();

    let len_digit = *bytes.get(offset).ok_or(FieldError::Truncated { offset })?;
    let width = usize::from(hex_value(len_digit).ok_or(FieldError::InvalidHex { offset })?) + 1;

    let start = offset + 1;
    let digits = bytes
        .get(start..start + width)
        .ok_or(FieldError::Truncated { offset: start })?;

    // At most 16 digits, so the fold never loses bits.
    let mut value: u64 = 0;
    for (i, &byte) in digits.iter().enumerate() {
        let nibble = hex_value(byte).ok_or(FieldError::InvalidHex { offset: start + i })?;
        value = (value << 4) | u64::from(nibble);
    }

    let component = Component::new(value).map_err(|_| FieldError::Overflow { offset })?;
    Ok((component, width + 1))
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
