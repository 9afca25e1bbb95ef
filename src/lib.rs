//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC` into strongly-typed messages.
//!
//! A sentence passes through four stages:
//! - framing: `$` prefix, `*CC` checksum and optional `\r\n`
//! - tokenizing: comma-separated fields, empty fields preserved
//! - header classification: talker id and sentence type
//! - decoding: one decoder per supported sentence type
//!
//! Parsing never fails. Every input yields a [`ParsedMessage`]; an input that
//! cannot be decoded is reported as invalid together with its [`Rejection`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{MessageType, NmeaSentence, Parser, TalkerId};
//!
//! let parser = Parser::new();
//!
//! let message = parser.parse("$GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*57");
//! assert!(message.is_valid());
//! assert_eq!(message.talker(), TalkerId::Gps);
//! assert_eq!(message.message_type(), MessageType::RMC);
//!
//! if let Some(NmeaSentence::RMC(rmc)) = message.payload() {
//!     assert_eq!(rmc.speed_over_ground, 0.004);
//!     assert!(rmc.magnetic_variation.is_nan());
//! }
//!
//! let message = parser.parse("$GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*58");
//! assert!(!message.is_valid());
//! assert_eq!(message.message_type(), MessageType::Unknown);
//! ```

pub mod error;
mod field;
mod framing;
mod header;
mod parser;
mod sentences;
mod tokenizer;

pub use error::{DecodeError, Error, IResult, Rejection};
pub use field::FieldParse;
pub use framing::{ChecksumMode, LineEndingMode, checksum};
pub use header::{MessageType, TalkerId, classify};
pub use parser::{DEFAULT_CENTURY_PIVOT, ParsedMessage, Parser, ParserBuilder, parse};
pub use sentences::{
    DTM, FaaMode, GGA, GLL, LatitudeHemisphere, Location, LongitudeHemisphere, NavStatus,
    NmeaSentence, Quality, RMC, Status, VTG, ZDA,
};
pub use tokenizer::{Fields, MAX_FIELDS};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod fixtures;
    mod framing;
    mod properties;

    /// Routes `log` output of the crate through the test harness.
    pub(crate) fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
