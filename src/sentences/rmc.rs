use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    field::{FieldReader, Signed},
    sentences::{
        Decode, FaaMode, LatitudeHemisphere, Location, LongitudeHemisphere, NavStatus, Status,
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 adds the FAA mode as field 12, NMEA 4.1 the navigation status as
/// field 13.
///
/// Latitude and longitude keep the transmitted `ddmm.mmmm` encoding; use
/// [`RMC::location`] for decimal degrees. Empty numeric fields decode as `0.0`,
/// except the magnetic variation which is `NaN` when it was not reported.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix date and time in UTC, `None` if either field is empty
    pub timestamp: Option<time::OffsetDateTime>,
    /// `true` for a valid fix (`A`), `false` for a warning (`V`)
    pub status: bool,
    /// Latitude magnitude as `ddmm.mmmm`
    pub latitude: f64,
    /// Hemisphere of the latitude
    pub latitude_hemisphere: Option<LatitudeHemisphere>,
    /// Longitude magnitude as `dddmm.mmmm`
    pub longitude: f64,
    /// Hemisphere of the longitude
    pub longitude_hemisphere: Option<LongitudeHemisphere>,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    /// Course over ground in degrees
    pub course_over_ground: f32,
    /// Magnetic variation in degrees, negative to the west, `NaN` if not reported
    pub magnetic_variation: f32,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
    /// Navigation status
    pub nav_status: Option<NavStatus>,
}

impl RMC {
    /// The position in signed decimal degrees, `None` without both hemispheres.
    pub fn location(&self) -> Option<Location> {
        Some(Location::from_degrees_minutes(
            self.latitude,
            self.latitude_hemisphere?,
            self.longitude,
            self.longitude_hemisphere?,
        ))
    }

    /// Whether the sentence reported a magnetic variation.
    pub fn has_magnetic_variation(&self) -> bool {
        !self.magnetic_variation.is_nan()
    }
}

impl Decode for RMC {
    const FIELDS: RangeInclusive<usize> = 11..=13;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let fix_time = i.optional::<time::Time>()?;
        let status = i.required::<Status>()?;
        let latitude = i.or_default()?;
        let latitude_hemisphere = i.optional()?;
        let longitude = i.or_default()?;
        let longitude_hemisphere = i.optional()?;
        let speed_over_ground = i.or_default()?;
        let course_over_ground = i.or_default()?;
        let fix_date = i.date()?;
        let variation = i.optional::<f32>()?;
        let variation_direction = i.optional::<LongitudeHemisphere>()?;
        let faa_mode = i.optional()?;
        let nav_status = i.optional()?;

        let timestamp = fix_date
            .zip(fix_time)
            .map(|(date, time)| time::PrimitiveDateTime::new(date, time).assume_utc());

        let magnetic_variation = match (variation, variation_direction) {
            (Some(variation), Some(direction)) => direction.apply(variation),
            _ => f32::NAN,
        };

        Ok(Self {
            timestamp,
            status: status == Status::Valid,
            latitude,
            latitude_hemisphere,
            longitude,
            longitude_hemisphere,
            speed_over_ground,
            course_over_ground,
            magnetic_variation,
            faa_mode,
            nav_status,
        })
    }
}
