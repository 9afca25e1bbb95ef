mod dtm;
mod gga;
mod gll;
mod rmc;
mod vtg;
mod zda;

pub use dtm::DTM;
pub use gga::GGA;
pub use gll::GLL;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use std::ops::RangeInclusive;

use nom::Parser;

use crate::{
    DecodeError, IResult, MessageType,
    field::{FieldParse, FieldReader, Signed},
};

/// A sentence body decoder.
///
/// Implemented by every strongly-typed sentence struct. `FIELDS` lists the
/// accepted data field counts, one per NMEA revision of the sentence layout.
pub(crate) trait Decode: Sized {
    const FIELDS: RangeInclusive<usize>;

    fn decode(fields: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError>;
}

/// The decoded payload of a valid sentence.
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              | Data fields |
/// |--------------|--------------------------------------------|-------------|
/// | DTM([`DTM`]) | Datum Reference                            | 8           |
/// | GGA([`GGA`]) | Global Positioning System Fix Data         | 14          |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude   | 6–7         |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information | 11–13       |
/// | VTG([`VTG`]) | Track made good and Ground speed           | 8–9         |
/// | ZDA([`ZDA`]) | Time & Date                                | 6           |
///
/// ```rust
/// use nmea0183_decoder::{MessageType, NmeaSentence};
///
/// let fields = ["W84", "", "0.0", "N", "0.0", "E", "0.0", "W84"];
/// let sentence = NmeaSentence::decode(MessageType::DTM, &fields, 83).unwrap();
///
/// match sentence {
///     NmeaSentence::DTM(dtm) => assert_eq!(dtm.reference_datum, "W84"),
///     _ => unreachable!(),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Datum Reference
    DTM(DTM),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
}

impl NmeaSentence {
    /// Decodes the data fields (header excluded) of a sentence of the given type.
    ///
    /// `century_pivot` resolves two-digit years, see
    /// [`ParserBuilder::century_pivot`](crate::ParserBuilder::century_pivot).
    pub fn decode(
        message_type: MessageType,
        fields: &[&str],
        century_pivot: u8,
    ) -> Result<Self, DecodeError> {
        match message_type {
            MessageType::DTM => decode_with(fields, century_pivot).map(Self::DTM),
            MessageType::GGA => decode_with(fields, century_pivot).map(Self::GGA),
            MessageType::GLL => decode_with(fields, century_pivot).map(Self::GLL),
            MessageType::RMC => decode_with(fields, century_pivot).map(Self::RMC),
            MessageType::VTG => decode_with(fields, century_pivot).map(Self::VTG),
            MessageType::ZDA => decode_with(fields, century_pivot).map(Self::ZDA),
            MessageType::Unknown => Err(DecodeError::Unsupported),
        }
    }

    /// The sentence type of this payload.
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::DTM(_) => MessageType::DTM,
            Self::GGA(_) => MessageType::GGA,
            Self::GLL(_) => MessageType::GLL,
            Self::RMC(_) => MessageType::RMC,
            Self::VTG(_) => MessageType::VTG,
            Self::ZDA(_) => MessageType::ZDA,
        }
    }
}

fn decode_with<T: Decode>(fields: &[&str], century_pivot: u8) -> Result<T, DecodeError> {
    let mut reader = FieldReader::new(fields, T::FIELDS, century_pivot)?;
    T::decode(&mut reader)
}

/// A position in signed decimal degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude, negative south of the equator
    pub latitude: f64,
    /// Longitude, negative west of Greenwich
    pub longitude: f64,
}

impl Location {
    pub(crate) fn from_degrees_minutes(
        latitude: f64,
        north_south: LatitudeHemisphere,
        longitude: f64,
        east_west: LongitudeHemisphere,
    ) -> Self {
        Self {
            latitude: north_south.apply(degrees(latitude)),
            longitude: east_west.apply(degrees(longitude)),
        }
    }
}

/// Converts a `dddmm.mmmm` magnitude to decimal degrees.
fn degrees(degrees_minutes: f64) -> f64 {
    let degrees = (degrees_minutes / 100.0).trunc();
    degrees + (degrees_minutes - degrees * 100.0) / 60.0
}

impl FieldReader<'_, '_> {
    /// Reads the four `ddmm.mm,a,dddmm.mm,a` fields of a position.
    ///
    /// All four empty is `None`; a partially filled position is an error.
    pub(crate) fn location(&mut self) -> Result<Option<Location>, DecodeError> {
        let first = self.position();
        let latitude = self.optional::<f64>()?;
        let north_south = self.optional::<LatitudeHemisphere>()?;
        let longitude = self.optional::<f64>()?;
        let east_west = self.optional::<LongitudeHemisphere>()?;

        match (latitude, north_south, longitude, east_west) {
            (Some(lat), Some(ns), Some(lon), Some(ew)) => {
                Ok(Some(Location::from_degrees_minutes(lat, ns, lon, ew)))
            }
            (None, None, None, None) => Ok(None),
            (lat, ns, lon, _) => {
                let missing = [lat.is_none(), ns.is_none(), lon.is_none()]
                    .iter()
                    .position(|&missing| missing)
                    .unwrap_or(3);
                Err(DecodeError::MissingField {
                    index: first + missing,
                })
            }
        }
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl FieldParse for $name {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

field_enum! {
    /// Hemisphere of a latitude
    pub enum LatitudeHemisphere {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
    }
}

impl Signed for LatitudeHemisphere {
    fn is_negative(&self) -> bool {
        *self == Self::South
    }
}

field_enum! {
    /// Hemisphere of a longitude or direction of a magnetic variation
    pub enum LongitudeHemisphere {
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

impl Signed for LongitudeHemisphere {
    fn is_negative(&self) -> bool {
        *self == Self::West
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

field_enum! {
    /// Navigation Status (NMEA 4.1)
    pub enum NavStatus {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Not Valid
        'N' => NotValid,
        /// S - Simulated Mode
        'S' => Simulator,
        /// V - Valid
        'V' => Valid,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GPSFix,
        /// 2 - Differential GPS fix
        '2' => DGPSFix,
        /// 3 - PPS fix
        '3' => PPSFix,
        /// 4 - Real Time Kinematic
        '4' => RTK,
        /// 5 - Float RTK
        '5' => FloatRTK,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: FieldParse>(i: &str) -> IResult<&str, T> {
        T::parse(i)
    }

    #[test]
    fn test_status() {
        assert_eq!(parse("A").unwrap(), ("", Status::Valid));
        assert_eq!(parse("V").unwrap(), ("", Status::Invalid));
        assert!(parse::<Status>("K").is_err());
    }

    #[test]
    fn test_hemispheres() {
        assert_eq!(parse("S").unwrap(), ("", LatitudeHemisphere::South));
        assert!(parse::<LatitudeHemisphere>("E").is_err());
        assert_eq!(parse("W").unwrap(), ("", LongitudeHemisphere::West));
        assert!(parse::<LongitudeHemisphere>("N").is_err());

        assert_eq!(LatitudeHemisphere::South.apply(1.5), -1.5);
        assert_eq!(LongitudeHemisphere::East.apply(1.5), 1.5);
    }

    #[test]
    fn test_quality() {
        assert_eq!(parse("0").unwrap(), ("", Quality::NoFix));
        assert_eq!(parse("4").unwrap(), ("", Quality::RTK));
        assert_eq!(parse("8").unwrap(), ("", Quality::Simulation));
        assert!(parse::<Quality>("9").is_err());
    }

    #[test]
    fn test_degrees() {
        let location = Location::from_degrees_minutes(
            4807.038,
            LatitudeHemisphere::North,
            1131.0,
            LongitudeHemisphere::West,
        );
        assert!((location.latitude - 48.1173).abs() < 1e-9);
        assert!((location.longitude + 11.516_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(
            NmeaSentence::decode(MessageType::Unknown, &[], 83),
            Err(DecodeError::Unsupported)
        );
    }
}
