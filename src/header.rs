//! # Header Classification
//!
//! The header token `TTSSS` carries a two-character talker id and a
//! three-character sentence type. Both lookups are compiled-in `match` tables.

use crate::Rejection;

/// The device class that emitted a sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TalkerId {
    /// GP - Global Positioning System receiver
    Gps,
    /// GL - GLONASS receiver
    Glonass,
    /// GA - Galileo receiver
    Galileo,
    /// GB / BD - BeiDou receiver
    Beidou,
    /// GQ - QZSS receiver
    Qzss,
    /// GI - NavIC receiver
    Navic,
    /// GN - Combined GNSS solution
    Gnss,
    /// Any other or missing prefix
    #[default]
    Unknown,
}

impl TalkerId {
    /// Looks up a two-character talker prefix.
    ///
    /// ```rust
    /// use nmea0183_decoder::TalkerId;
    ///
    /// assert_eq!(TalkerId::from_prefix("GP"), TalkerId::Gps);
    /// assert_eq!(TalkerId::from_prefix("ZZ"), TalkerId::Unknown);
    /// ```
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "GP" => Self::Gps,
            "GL" => Self::Glonass,
            "GA" => Self::Galileo,
            "GB" | "BD" => Self::Beidou,
            "GQ" => Self::Qzss,
            "GI" => Self::Navic,
            "GN" => Self::Gnss,
            _ => Self::Unknown,
        }
    }
}

/// The kind of a sentence, which selects its decoder.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Datum Reference
    DTM,
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Track made good and Ground speed
    VTG,
    /// Time & Date
    ZDA,
    /// Any other sentence type
    #[default]
    Unknown,
}

impl MessageType {
    /// Looks up a three-character sentence type.
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "DTM" => Self::DTM,
            "GGA" => Self::GGA,
            "GLL" => Self::GLL,
            "RMC" => Self::RMC,
            "VTG" => Self::VTG,
            "ZDA" => Self::ZDA,
            _ => Self::Unknown,
        }
    }
}

/// Splits a header such as `GPRMC` into its talker id and sentence type.
///
/// Headers shorter than five characters have no talker. Only five-character
/// headers with a known prefix and a known suffix are classified.
pub fn classify(header: &str) -> Result<(TalkerId, MessageType), Rejection> {
    if header.len() < 5 {
        return Err(Rejection::UnrecognizedTalker);
    }

    let (prefix, suffix) = header
        .split_at_checked(2)
        .ok_or(Rejection::UnrecognizedTalker)?;

    match (TalkerId::from_prefix(prefix), MessageType::from_suffix(suffix)) {
        (TalkerId::Unknown, _) => Err(Rejection::UnrecognizedTalker),
        (_, MessageType::Unknown) => Err(Rejection::UnrecognizedMessage),
        classified => Ok(classified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("GPRMC"), Ok((TalkerId::Gps, MessageType::RMC)));
        assert_eq!(classify("GPDTM"), Ok((TalkerId::Gps, MessageType::DTM)));
        assert_eq!(classify("GNGGA"), Ok((TalkerId::Gnss, MessageType::GGA)));
        assert_eq!(classify("BDGLL"), Ok((TalkerId::Beidou, MessageType::GLL)));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("ZZRMC"), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify("GPXYZ"), Err(Rejection::UnrecognizedMessage));
        assert_eq!(classify("ZZR"), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify("GPRM"), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify("G"), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify(""), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify("GPRMCX"), Err(Rejection::UnrecognizedMessage));
        assert_eq!(classify("gprmc"), Err(Rejection::UnrecognizedTalker));
        assert_eq!(classify("PUBX0"), Err(Rejection::UnrecognizedTalker));
    }
}
