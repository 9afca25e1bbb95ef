use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    field::FieldReader,
    sentences::{Decode, FaaMode},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The FAA mode (field 9) was added in NMEA 2.3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Course over ground in degrees true
    pub course_over_ground_true: Option<f32>,
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Option<f32>,
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kph: Option<f32>,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl Decode for VTG {
    const FIELDS: RangeInclusive<usize> = 8..=9;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let course_over_ground_true = i.with_unit('T')?;
        let course_over_ground_magnetic = i.with_unit('M')?;
        let speed_over_ground_knots = i.with_unit('N')?;
        let speed_over_ground_kph = i.with_unit('K')?;
        let faa_mode = i.optional()?;

        Ok(Self {
            course_over_ground_true,
            course_over_ground_magnetic,
            speed_over_ground_knots,
            speed_over_ground_kph,
            faa_mode,
        })
    }
}
