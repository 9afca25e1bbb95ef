use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    field::FieldReader,
    sentences::{Decode, FaaMode, Location, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Location (latitude and longitude)
    pub location: Option<Location>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Status,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl Decode for GLL {
    const FIELDS: RangeInclusive<usize> = 6..=7;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let location = i.location()?;
        let fix_time = i.optional()?;
        let status = i.required()?;
        let faa_mode = i.optional()?;

        Ok(Self {
            location,
            fix_time,
            status,
            faa_mode,
        })
    }
}
