//! Hexadecimal text form of a color.
//!
//! Output is always uppercase: `AARRGGBB` when the alpha channel is visible,
//! `RRGGBB` otherwise. Input is case-insensitive, has no `#` prefix and may
//! be shorter than 8 digits, in which case it is padded on the right with
//! `0` before being read as `AARRGGBB`. The empty string stands for "no
//! color" and is not an error.

use crate::color::Argb;
use crate::error::{PickerError, PickerResult};

/// Number of digits in a full `AARRGGBB` literal.
pub const FULL_WIDTH: usize = 8;

/// Number of digits in an `RRGGBB` literal.
pub const OPAQUE_WIDTH: usize = 6;

/// Format a color as uppercase hex. `None` formats as the empty string.
pub fn format(color: Option<Argb>, use_alpha: bool) -> String {
    let Some(c) = color else {
        return String::new();
    };

    if use_alpha {
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            c.alpha, c.red, c.green, c.blue
        )
    } else {
        format!("{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
    }
}

/// Apply the width rule to text that is already formatted.
///
/// When alpha is hidden, a full 8 digit string loses its two leading alpha
/// digits. Anything else is returned as is, so text that is not a complete
/// color survives a toggle untouched.
pub fn format_width(text: &str, use_alpha: bool) -> String {
    if !use_alpha && text.len() == FULL_WIDTH && text.is_ascii() {
        text[2..].to_string()
    } else {
        text.to_string()
    }
}

/// Read a hex literal. Returns `Ok(None)` for the empty string.
pub fn parse(text: &str) -> PickerResult<Option<Argb>> {
    if text.is_empty() {
        return Ok(None);
    }

    validate(text)?;

    let mut padded = text.to_string();
    while padded.len() < FULL_WIDTH {
        padded.push('0');
    }

    u32::from_str_radix(&padded, 16)
        .map(|value| Some(Argb::from_u32(value)))
        .map_err(|e| PickerError::invalid_color_format(text, (0, text.len()), e.to_string()))
}

/// Check that `text` would parse, without building the color.
pub fn validate(text: &str) -> PickerResult<()> {
    if let Some((offset, c)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(PickerError::invalid_color_format(
            text,
            (offset, c.len_utf8()),
            format!("'{}' is not a hexadecimal digit", c),
        ));
    }

    if text.len() > FULL_WIDTH {
        return Err(PickerError::invalid_color_format(
            text,
            (FULL_WIDTH, text.len() - FULL_WIDTH),
            format!(
                "expected at most {} digits, found {}",
                FULL_WIDTH,
                text.len()
            ),
        ));
    }

    Ok(())
}

/// True when `text` is empty or a readable hex literal.
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn width_follows_alpha_visibility() {
        let c = Argb::new(0x80, 0x10, 0x20, 0x30);
        assert_eq!(format(Some(c), true), "80102030");
        assert_eq!(format(Some(c), false), "102030");
        assert_eq!(format(Some(Argb::opaque(0xAB, 0xCD, 0xEF)), true), "FFABCDEF");
        assert_eq!(format(None, true), "");
        assert_eq!(format(None, false), "");
    }

    #[test]
    fn width_rule_on_formatted_text() {
        assert_eq!(format_width("80102030", false), "102030");
        assert_eq!(format_width("80102030", true), "80102030");
        assert_eq!(format_width("102030", false), "102030");
        assert_eq!(format_width("ZZ", false), "ZZ");
        assert_eq!(format_width("", false), "");
    }

    #[test]
    fn parses_full_literals_case_insensitively() {
        assert_eq!(parse("80102030").unwrap(), Some(Argb::new(0x80, 0x10, 0x20, 0x30)));
        assert_eq!(parse("ffabcdef").unwrap(), Some(Argb::opaque(0xAB, 0xCD, 0xEF)));
        assert_eq!(parse("FfAbCdEf").unwrap(), Some(Argb::opaque(0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn short_literals_are_padded_on_the_right() {
        assert_eq!(parse("ABC").unwrap(), Some(Argb::new(0xAB, 0xC0, 0x00, 0x00)));
        assert_eq!(parse("ABC").unwrap(), parse("ABC00000").unwrap());
        assert_eq!(parse("102030").unwrap(), Some(Argb::new(0x10, 0x20, 0x30, 0x00)));
        assert_eq!(parse("F").unwrap(), Some(Argb::new(0xF0, 0, 0, 0)));
    }

    #[test]
    fn empty_means_no_color() {
        assert_eq!(parse("").unwrap(), None);
        assert!(is_valid(""));
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = parse("FFGG0000").unwrap_err();
        assert_eq!(err.span(), (2, 1).into());

        let err = parse("#FF0000").unwrap_err();
        assert_eq!(err.span(), (0, 1).into());

        assert!(parse(" FF").is_err());
        assert!(parse("é").is_err());
        assert!(!is_valid("12 34"));
    }

    #[test]
    fn rejects_overlong_literals() {
        let err = parse("FF00000000").unwrap_err();
        assert_eq!(err.span(), (8, 2).into());
        assert!(!is_valid("123456789"));
    }
}
