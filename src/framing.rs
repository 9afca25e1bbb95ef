//! # Sentence Framing
//!
//! Validates the outer structure of a sentence, `$HHHHH,D1,D2,...,Dn*CC[\r\n]`,
//! and hands the body between `$` and `*` to the tokenizer.
//!
//! The framing is configurable to handle:
//! - Required or optional checksum
//! - Forbidden, optional or required CRLF line endings

use nom::{
    Parser,
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, hex_digit1},
    combinator::{all_consuming, map_res, rest, verify},
};

use crate::{IResult, Rejection};

/// Defines how the parser should handle NMEA message checksums.
///
/// NMEA 0183 messages carry a checksum in the format `*CC` where CC is a
/// two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the `$` prefix and `*` delimiter).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// A sentence without `*CC` is rejected with
    /// [`Rejection::MissingChecksum`].
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode with legacy equipment that omits checksums.
    Optional,
}

/// Defines how the parser should handle a trailing `\r\n`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// The sentence must not end with `\r\n`.
    ///
    /// Use this mode when line endings were already stripped by the reader.
    Forbidden,

    /// A single trailing `\r\n` is accepted and removed.
    Optional,

    /// The sentence must end with `\r\n`.
    ///
    /// Use this mode when parsing raw serial port or log file lines.
    Required,
}

/// Framing settings shared by every parse call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Framing {
    pub(crate) checksum_mode: ChecksumMode,
    pub(crate) line_ending_mode: LineEndingMode,
}

impl Framing {
    /// Validates the framing of `input` and returns the sentence body,
    /// i.e. everything between `$` and `*`.
    ///
    /// Checks run in order: emptiness, ASCII, line ending, `$`, checksum.
    pub(crate) fn body<'a>(&self, input: &'a str) -> Result<&'a str, Rejection> {
        if input.is_empty() {
            return Err(Rejection::EmptyInput);
        }

        if !input.is_ascii() {
            return Err(Rejection::NonAscii);
        }

        let input = line_ending(self.line_ending_mode, input)?;

        let start: IResult<_, _> = char('$').parse(input);
        let (i, _) = start.map_err(|_| Rejection::MissingStartDelimiter)?;
        let split: IResult<_, _> = alt((take_until("*"), rest)).parse(i);
        let (cc, data) = split.map_err(|_| Rejection::MissingChecksum)?;

        match cc.strip_prefix('*') {
            Some(cc) => {
                let found = checksum_digits(cc)?;
                let expected = checksum(data);

                if found != expected {
                    return Err(Rejection::ChecksumMismatch { expected, found });
                }
            }
            None if self.checksum_mode == ChecksumMode::Required => {
                return Err(Rejection::MissingChecksum);
            }
            None => {}
        }

        Ok(data)
    }
}

/// Strips or checks the trailing `\r\n` according to `mode`.
fn line_ending(mode: LineEndingMode, input: &str) -> Result<&str, Rejection> {
    match (mode, input.strip_suffix("\r\n")) {
        (LineEndingMode::Forbidden, Some(_)) => Err(Rejection::LineEnding),
        (LineEndingMode::Forbidden, None) => Ok(input),
        (LineEndingMode::Optional, stripped) => Ok(stripped.unwrap_or(input)),
        (LineEndingMode::Required, Some(stripped)) => Ok(stripped),
        (LineEndingMode::Required, None) => Err(Rejection::LineEnding),
    }
}

/// Parses the two hexadecimal digits following `*`, in either case.
fn checksum_digits(cc: &str) -> Result<u8, Rejection> {
    let digits = verify(hex_digit1, |digits: &str| digits.len() == 2);
    let result: IResult<_, _> =
        all_consuming(map_res(digits, |digits| u8::from_str_radix(digits, 16))).parse(cc);

    result
        .map(|(_, cc)| cc)
        .map_err(|_| Rejection::MalformedChecksum)
}

/// Calculates the NMEA 0183 checksum of the sentence body.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, both excluded.
///
/// ```rust
/// assert_eq!(nmea0183_decoder::checksum("GPDTM,W84,,0.0,N,0.0,E,0.0,W84"), 0x6F);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}
