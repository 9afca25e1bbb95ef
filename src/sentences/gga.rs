use std::{ops::RangeInclusive, time::Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    field::FieldReader,
    sentences::{Decode, Location, Quality},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Location (latitude and longitude)
    pub location: Option<Location>,
    /// GPS Quality Indicator
    pub fix_quality: Quality,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: Option<f32>,
    /// Age of Differential GPS data, null field when DGPS is not used
    pub age_of_dgps: Option<Duration>,
    /// Differential reference station ID
    pub ref_station_id: Option<u16>,
}

impl Decode for GGA {
    const FIELDS: RangeInclusive<usize> = 14..=14;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let fix_time = i.optional()?;
        let location = i.location()?;
        let fix_quality = i.required()?;
        let satellite_count = i.optional()?;
        let hdop = i.optional()?;
        let altitude = i.with_unit('M')?;
        let geoidal_separation = i.with_unit('M')?;
        let age_index = i.position();
        let age_of_dgps = i
            .optional::<f32>()?
            .map(|seconds| {
                Duration::try_from_secs_f32(seconds)
                    .map_err(|_| DecodeError::InvalidField { index: age_index })
            })
            .transpose()?;
        let ref_station_id = i.optional()?;

        Ok(Self {
            fix_time,
            location,
            fix_quality,
            satellite_count,
            hdop,
            altitude,
            geoidal_separation,
            age_of_dgps,
            ref_station_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageType, NmeaSentence};

    fn decode(fields: &str) -> Result<GGA, DecodeError> {
        let fields: Vec<&str> = fields.split(',').collect();
        match NmeaSentence::decode(MessageType::GGA, &fields, 83)? {
            NmeaSentence::GGA(gga) => Ok(gga),
            other => panic!("Decoded as {other:?}"),
        }
    }

    #[test]
    fn test_gga_parsing() {
        let cases = [",,", ",42.0,", ",,69", ",42.0,69"];

        for &input in &cases {
            let i = format!(
                "001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M{}",
                input
            );

            let result = decode(&i);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
        }

        let gga =
            decode("001043.00,4404.14036,N,12118.85961,W,2,12,0.98,1113.0,M,-21.3,M,1.5,0069")
                .unwrap();
        assert_eq!(gga.fix_quality, Quality::DGPSFix);
        assert_eq!(gga.satellite_count, Some(12));
        assert_eq!(gga.altitude, Some(1113.0));
        assert_eq!(gga.geoidal_separation, Some(-21.3));
        assert_eq!(gga.age_of_dgps, Some(Duration::from_millis(1500)));
        assert_eq!(gga.ref_station_id, Some(69));

        let location = gga.location.unwrap();
        assert!((location.latitude - 44.069_006).abs() < 1e-6);
        assert!((location.longitude + 121.314_326_8).abs() < 1e-6);
    }

    #[test]
    fn test_gga_invalid() {
        let cases = [
            "001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M",
            "001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,",
            "001043.00,4404.14036,N,12118.85961,X,1,12,0.98,1113.0,M,-21.3,M,,",
            "001043.00,4404.14036,N,12118.85961,W,9,12,0.98,1113.0,M,-21.3,M,,",
            "001043.00,4404.14036,N,12118.85961,W,,12,0.98,1113.0,M,-21.3,M,,",
            "001043.00,4404.14036,N,12118.85961,W,1,A8,0.98,1113.0,M,-21.3,M,,",
            "001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,F,-21.3,M,,",
            "001043.00,4404.14036,,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,,",
            "001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,-1.0,",
        ];

        for input in cases {
            let result = decode(input);
            assert!(
                result.is_err(),
                "Decoded invalid fields: {input}\n\t{result:?}"
            );
        }
    }
}
