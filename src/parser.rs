//! # Parser
//!
//! The stateless entry point tying the stages together:
//! framing, tokenizing, header classification and decoding.
//!
//! A [`Parser`] holds configuration only. It is `Copy`, `Send` and `Sync`, so
//! a single instance can be shared by any number of threads, and parsing the
//! same input twice always gives equal results.

use log::{debug, trace};

use crate::{
    ChecksumMode, Fields, LineEndingMode, MessageType, NmeaSentence, Rejection, TalkerId,
    classify, framing::Framing,
};

/// Two-digit years at or above this value are placed in the 1900s.
pub const DEFAULT_CENTURY_PIVOT: u8 = 83;

/// Configures and creates a [`Parser`].
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, LineEndingMode, Parser};
///
/// let parser = Parser::builder()
///     .checksum_mode(ChecksumMode::Optional)
///     .line_ending_mode(LineEndingMode::Optional)
///     .build();
///
/// assert!(parser.parse("$GPDTM,W84,,0.0,N,0.0,E,0.0,W84\r\n").is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserBuilder {
    framing: Framing,
    century_pivot: u8,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self {
            framing: Framing::default(),
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

impl ParserBuilder {
    /// Whether a `*CC` checksum must be present. Defaults to
    /// [`ChecksumMode::Required`].
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.framing.checksum_mode = mode;
        self
    }

    /// How a trailing `\r\n` is treated. Defaults to
    /// [`LineEndingMode::Forbidden`].
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.framing.line_ending_mode = mode;
        self
    }

    /// Sets the first two-digit year that is placed in the 1900s.
    ///
    /// With the default of `83`, `830101` is 1983-01-01 and `820101` is
    /// 2082-01-01. A pivot of `100` or more places every year in the 2000s.
    pub fn century_pivot(mut self, pivot: u8) -> Self {
        self.century_pivot = pivot;
        self
    }

    pub fn build(self) -> Parser {
        Parser {
            framing: self.framing,
            century_pivot: self.century_pivot,
        }
    }
}

/// A configured NMEA 0183 sentence parser.
///
/// ```rust
/// use nmea0183_decoder::{MessageType, NmeaSentence, Parser, TalkerId};
///
/// let parser = Parser::new();
/// let message = parser.parse("$GPDTM,999,CH95,0.08,N,0.07,E,-47.7,W84*1C");
///
/// assert!(message.is_valid());
/// assert_eq!(message.talker(), TalkerId::Gps);
/// assert_eq!(message.message_type(), MessageType::DTM);
///
/// let Some(NmeaSentence::DTM(dtm)) = message.payload() else {
///     unreachable!()
/// };
/// assert_eq!(dtm.altitude_offset, -47.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    framing: Framing,
    century_pivot: u8,
}

impl Default for Parser {
    fn default() -> Self {
        ParserBuilder::default().build()
    }
}

impl Parser {
    /// A parser with the default configuration: checksum required,
    /// no line ending, century pivot `83`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Parses one sentence.
    ///
    /// Never fails: a sentence that cannot be decoded yields an invalid
    /// [`ParsedMessage`] carrying the [`Rejection`].
    pub fn parse(&self, input: &str) -> ParsedMessage {
        match self.classify(input) {
            Ok((talker, message_type, fields)) => {
                match NmeaSentence::decode(message_type, fields.data(), self.century_pivot) {
                    Ok(payload) => {
                        trace!("decoded {message_type:?} from {talker:?}");
                        ParsedMessage {
                            talker,
                            message_type,
                            payload: Some(payload),
                            rejection: None,
                        }
                    }
                    Err(e) => {
                        debug!("rejected {message_type:?} sentence {input:?}: {e}");
                        ParsedMessage {
                            talker,
                            message_type,
                            payload: None,
                            rejection: Some(Rejection::Decode(e)),
                        }
                    }
                }
            }
            Err(rejection) => {
                debug!("rejected sentence {input:?}: {rejection}");
                ParsedMessage::rejected(rejection)
            }
        }
    }

    fn classify<'a>(
        &self,
        input: &'a str,
    ) -> Result<(TalkerId, MessageType, Fields<'a>), Rejection> {
        let body = self.framing.body(input)?;
        trace!("framing accepted, body {body:?}");

        let fields = Fields::tokenize(body)?;
        trace!("tokenized {} data fields", fields.len());

        let (talker, message_type) = classify(fields.header())?;
        trace!("classified header {:?}", fields.header());

        Ok((talker, message_type, fields))
    }
}

/// Parses one sentence with the default [`Parser`].
///
/// ```rust
/// let message = nmea0183_decoder::parse("asdfliou34a;kdjf;akdjf;aa*5");
/// assert!(!message.is_valid());
/// ```
pub fn parse(input: &str) -> ParsedMessage {
    Parser::new().parse(input)
}

/// The outcome of parsing one sentence.
///
/// Owned by the caller and independent of the input string.
/// [`is_valid`](ParsedMessage::is_valid) is `true` exactly when a payload is
/// present.
///
/// With the `serde` feature the message can be serialized, but only a
/// [`Parser`] creates one. Deserialize the [`NmeaSentence`] payload instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    talker: TalkerId,
    message_type: MessageType,
    payload: Option<NmeaSentence>,
    rejection: Option<Rejection>,
}

impl ParsedMessage {
    fn rejected(rejection: Rejection) -> Self {
        Self {
            talker: TalkerId::Unknown,
            message_type: MessageType::Unknown,
            payload: None,
            rejection: Some(rejection),
        }
    }

    /// The talker of a recognized sentence, [`TalkerId::Unknown`] otherwise.
    pub fn talker(&self) -> TalkerId {
        self.talker
    }

    /// The type of a recognized sentence, [`MessageType::Unknown`] otherwise.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn is_valid(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&NmeaSentence> {
        self.payload.as_ref()
    }

    /// Why the sentence has no payload, `None` for a valid message.
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    pub fn into_payload(self) -> Option<NmeaSentence> {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    #[test]
    fn test_builder_defaults() {
        let parser = Parser::builder().build();
        assert_eq!(parser, Parser::new());
        assert_eq!(parser.century_pivot, DEFAULT_CENTURY_PIVOT);
        assert_eq!(parser.framing.checksum_mode, ChecksumMode::Required);
        assert_eq!(parser.framing.line_ending_mode, LineEndingMode::Forbidden);
    }

    #[test]
    fn test_classified_but_garbled() {
        let message = parse("$GPDTM,W84,,0.0,N,0.0,E,0.0*18");
        assert!(!message.is_valid());
        assert_eq!(message.talker(), TalkerId::Gps);
        assert_eq!(message.message_type(), MessageType::DTM);
        assert_eq!(
            message.rejection(),
            Some(&Rejection::Decode(DecodeError::FieldCount {
                min: 8,
                max: 8,
                found: 7
            }))
        );
    }

    #[test]
    fn test_century_pivot() {
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W*6B";

        let year = |parser: Parser| match parser.parse(sentence).into_payload() {
            Some(NmeaSentence::RMC(rmc)) => rmc.timestamp.map(|t| t.year()),
            other => panic!("Unexpected payload {other:?}"),
        };

        assert_eq!(year(Parser::new()), Some(1994));
        assert_eq!(
            year(Parser::builder().century_pivot(95).build()),
            Some(2094)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_support() {
        fn assert_serialize<T: serde::Serialize>() {}
        fn assert_deserialize<T: serde::de::DeserializeOwned>() {}

        assert_serialize::<ParsedMessage>();
        assert_deserialize::<NmeaSentence>();
        assert_deserialize::<Rejection>();
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Parser>();
        assert_send_sync::<ParserBuilder>();
    }
}
