//! # Error Types
//!
//! Two layers of errors live here:
//!
//! - [`Error`] / [`IResult`] are the nom-facing types used by the field parsers.
//!   They never leave the crate's decoding stage.
//! - [`Rejection`] and [`DecodeError`] describe why a sentence did not produce a
//!   payload. They are attached to every invalid
//!   [`ParsedMessage`](crate::ParsedMessage) instead of being returned as `Err`,
//!   so a caller always receives a well-formed result.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of field parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input and the produced
/// value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Errors produced while parsing a single field.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The field could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    ParsingError(E),

    /// The field was well-formed but its value is out of range,
    /// e.g. a month of `13` or a non-finite number.
    ///
    /// Contains the input that caused the error.
    InvalidField(I),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// A recognized sentence whose body could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// The number of data fields is not one of the layouts of the sentence type.
    #[error("expected {min}..={max} data fields, found {found}")]
    FieldCount {
        /// Smallest accepted field count
        min: usize,
        /// Largest accepted field count
        max: usize,
        /// Number of data fields in the sentence
        found: usize,
    },

    /// A data field is non-empty but does not hold a value of the expected type.
    ///
    /// `index` is zero-based and does not count the header.
    #[error("data field {index} is malformed")]
    InvalidField {
        /// Position of the offending field
        index: usize,
    },

    /// A field that must always be present is empty.
    #[error("data field {index} is required but empty")]
    MissingField {
        /// Position of the empty field
        index: usize,
    },

    /// No decoder exists for the sentence type.
    #[error("sentence type has no decoder")]
    Unsupported,
}

/// The reason a sentence produced no payload.
///
/// Every variant except [`Rejection::Decode`] is reported together with
/// [`TalkerId::Unknown`](crate::TalkerId::Unknown) and
/// [`MessageType::Unknown`](crate::MessageType::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The input string is empty.
    #[error("empty input")]
    EmptyInput,

    /// The input contains non-ASCII characters.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The input does not start with `$`.
    #[error("sentence does not start with '$'")]
    MissingStartDelimiter,

    /// No `*` checksum delimiter was found.
    #[error("sentence has no checksum")]
    MissingChecksum,

    /// The `*` delimiter is not followed by exactly two hexadecimal digits.
    #[error("checksum is not two hexadecimal digits")]
    MalformedChecksum,

    /// The checksum of the sentence was corrupt or incorrect.
    #[error("checksum mismatch: calculated {expected:#04X}, found {found:#04X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// A trailing `\r\n` is missing or present against the configured
    /// [`LineEndingMode`](crate::LineEndingMode).
    #[error("line ending does not match the configured mode")]
    LineEnding,

    /// The sentence has more fields than any supported sentence can hold.
    #[error("sentence has more than {} fields", crate::tokenizer::MAX_FIELDS)]
    TooManyFields,

    /// The talker prefix of the header is not supported.
    #[error("unrecognized talker id")]
    UnrecognizedTalker,

    /// The sentence type of the header is not supported.
    #[error("unrecognized message type")]
    UnrecognizedMessage,

    /// The sentence type is known but its fields could not be decoded.
    #[error("malformed sentence body: {0}")]
    Decode(#[from] DecodeError),
}

impl Rejection {
    /// Returns `true` when the header was classified before the rejection,
    /// i.e. the sentence is recognized but garbled.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Rejection::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rejection = Rejection::ChecksumMismatch {
            expected: 0x6F,
            found: 0x6E,
        };
        assert_eq!(
            rejection.to_string(),
            "checksum mismatch: calculated 0x6F, found 0x6E"
        );

        let rejection = Rejection::from(DecodeError::FieldCount {
            min: 8,
            max: 8,
            found: 7,
        });
        assert!(rejection.is_decode_failure());
        assert_eq!(
            rejection.to_string(),
            "malformed sentence body: expected 8..=8 data fields, found 7"
        );
        assert!(!Rejection::MissingChecksum.is_decode_failure());
    }
}
