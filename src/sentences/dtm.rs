use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    field::{FieldReader, Signed},
    sentences::{Decode, LatitudeHemisphere, LongitudeHemisphere},
};

/// DTM - Datum Reference
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dtm_datum_reference>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--DTM,ref,x,llll,c,llll,c,aaa,ref*hh<CR><LF>
/// ```
///
/// Empty offsets decode as `0.0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DTM {
    /// Local datum code, e.g. `W84`, `W72`, `999` (user defined)
    pub local_datum: heapless::String<3>,
    /// Local datum subdivision code, e.g. `CH95`
    pub local_datum_subdivision: heapless::String<4>,
    /// Latitude offset, negative to the south
    pub latitude_offset: f32,
    /// Longitude offset, negative to the west
    pub longitude_offset: f32,
    /// Altitude offset in meters
    pub altitude_offset: f32,
    /// Reference datum code
    pub reference_datum: heapless::String<3>,
}

impl DTM {
    /// Latitude and longitude offsets as a pair.
    pub fn offset(&self) -> (f32, f32) {
        (self.latitude_offset, self.longitude_offset)
    }
}

impl Decode for DTM {
    const FIELDS: RangeInclusive<usize> = 8..=8;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let local_datum = i.code()?;
        let local_datum_subdivision = i.code()?;
        let latitude_offset: f32 = i.or_default()?;
        let north_south = i.optional::<LatitudeHemisphere>()?;
        let longitude_offset: f32 = i.or_default()?;
        let east_west = i.optional::<LongitudeHemisphere>()?;
        let altitude_offset = i.or_default()?;
        let reference_datum = i.code()?;

        Ok(Self {
            local_datum,
            local_datum_subdivision,
            latitude_offset: north_south.map_or(latitude_offset, |ns| ns.apply(latitude_offset)),
            longitude_offset: east_west.map_or(longitude_offset, |ew| ew.apply(longitude_offset)),
            altitude_offset,
            reference_datum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageType, NmeaSentence};

    fn decode(fields: &[&str]) -> Result<DTM, DecodeError> {
        match NmeaSentence::decode(MessageType::DTM, fields, 83)? {
            NmeaSentence::DTM(dtm) => Ok(dtm),
            other => panic!("Decoded as {other:?}"),
        }
    }

    #[test]
    fn test_dtm_parsing() {
        let dtm = decode(&["999", "CH95", "0.08", "N", "0.07", "E", "-47.7", "W84"]).unwrap();
        assert_eq!(dtm.local_datum, "999");
        assert_eq!(dtm.local_datum_subdivision, "CH95");
        assert_eq!(dtm.offset(), (0.08, 0.07));
        assert_eq!(dtm.altitude_offset, -47.7);
        assert_eq!(dtm.reference_datum, "W84");

        let dtm = decode(&["W72", "", "0.00", "S", "0.01", "W", "-2.8", "W84"]).unwrap();
        assert_eq!(dtm.local_datum_subdivision, "");
        assert_eq!(dtm.offset(), (-0.0, -0.01));

        let dtm = decode(&["W84", "", "", "", "", "", "", "W84"]).unwrap();
        assert_eq!(dtm.offset(), (0.0, 0.0));
        assert_eq!(dtm.altitude_offset, 0.0);
    }

    #[test]
    fn test_dtm_invalid() {
        let cases: [(&[&str], DecodeError); 5] = [
            (
                &["W84", "", "0.0", "N", "0.0", "E", "0.0"],
                DecodeError::FieldCount {
                    min: 8,
                    max: 8,
                    found: 7,
                },
            ),
            (
                &["W84X", "", "0.0", "N", "0.0", "E", "0.0", "W84"],
                DecodeError::InvalidField { index: 0 },
            ),
            (
                &["W84", "", "zero", "N", "0.0", "E", "0.0", "W84"],
                DecodeError::InvalidField { index: 2 },
            ),
            (
                &["W84", "", "0.0", "E", "0.0", "E", "0.0", "W84"],
                DecodeError::InvalidField { index: 3 },
            ),
            (
                &["W84", "", "0.0", "N", "0.0", "E", "1.0m", "W84"],
                DecodeError::InvalidField { index: 6 },
            ),
        ];

        for (fields, expected) in cases {
            assert_eq!(decode(fields), Err(expected), "Fields: {fields:?}");
        }
    }
}
