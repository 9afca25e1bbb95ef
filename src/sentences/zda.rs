use std::ops::RangeInclusive;

use nom::{Parser, bytes::complete::take_while_m_n, combinator::map_res};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, FieldParse, IResult, field::FieldReader, sentences::Decode};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// The local zone minutes carry the sign of the local zone hours.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    /// UTC time
    pub time: Option<time::Time>,
    /// UTC date
    pub date: Option<time::Date>,
    /// Local zone description, `None` if not reported
    pub local_zone: Option<time::UtcOffset>,
}

impl ZDA {
    /// The UTC instant, `None` unless both time and date are present.
    pub fn timestamp(&self) -> Option<time::OffsetDateTime> {
        let (date, time) = self.date.zip(self.time)?;
        Some(time::PrimitiveDateTime::new(date, time).assume_utc())
    }

    /// The reported instant expressed in the local zone.
    pub fn local_timestamp(&self) -> Option<time::OffsetDateTime> {
        Some(self.timestamp()?.to_offset(self.local_zone?))
    }
}

impl Decode for ZDA {
    const FIELDS: RangeInclusive<usize> = 6..=6;

    fn decode(i: &mut FieldReader<'_, '_>) -> Result<Self, DecodeError> {
        let time = i.optional()?;

        let day_index = i.position();
        let day = i.optional::<u8>()?;
        let month = i.optional::<u8>()?;
        let year = i.optional_with(four_digit_year)?;

        let date = match (day, month, year) {
            (None, None, None) => None,
            (Some(day), Some(month), Some(year)) => {
                let month = time::Month::try_from(month)
                    .map_err(|_| DecodeError::InvalidField { index: day_index + 1 })?;
                let date = time::Date::from_calendar_date(i32::from(year), month, day)
                    .map_err(|_| DecodeError::InvalidField { index: day_index })?;
                Some(date)
            }
            (day, month, _) => {
                let offset = if day.is_none() {
                    0
                } else if month.is_none() {
                    1
                } else {
                    2
                };
                return Err(DecodeError::MissingField {
                    index: day_index + offset,
                });
            }
        };

        let zone_index = i.position();
        let zone_hours = i.optional_with(|i| {
            let negative = i.starts_with('-');
            i8::parse(i).map(|(rest, hours)| (rest, (negative, hours)))
        })?;
        let zone_minutes = i.optional::<u8>()?;

        let local_zone = match (zone_hours, zone_minutes) {
            (None, None) => None,
            (None, Some(_)) => return Err(DecodeError::MissingField { index: zone_index }),
            (Some((negative, hours)), minutes) => {
                let minutes = i8::try_from(minutes.unwrap_or_default())
                    .map_err(|_| DecodeError::InvalidField { index: zone_index + 1 })?;
                let minutes = if negative { -minutes } else { minutes };
                let offset = time::UtcOffset::from_hms(hours, minutes, 0)
                    .map_err(|_| DecodeError::InvalidField { index: zone_index })?;
                Some(offset)
            }
        };

        Ok(Self {
            time,
            date,
            local_zone,
        })
    }
}

fn four_digit_year(i: &str) -> IResult<&str, u16> {
    map_res(take_while_m_n(4, 4, |c: char| c.is_ascii_digit()), str::parse::<u16>).parse(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageType, NmeaSentence};
    use time::macros::{date, datetime, offset, time};

    fn decode(fields: &str) -> Result<ZDA, DecodeError> {
        let fields: Vec<&str> = fields.split(',').collect();
        match NmeaSentence::decode(MessageType::ZDA, &fields, 83)? {
            NmeaSentence::ZDA(zda) => Ok(zda),
            other => panic!("Decoded as {other:?}"),
        }
    }

    #[test]
    fn test_zda_parsing() {
        let zda = decode("160012.71,11,03,2004,-1,00").unwrap();
        assert_eq!(zda.time, Some(time!(16:00:12.71)));
        assert_eq!(zda.date, Some(date!(2004 - 03 - 11)));
        assert_eq!(zda.local_zone, Some(offset!(-1)));
        assert_eq!(zda.timestamp(), Some(datetime!(2004-03-11 16:00:12.71 UTC)));
        assert_eq!(
            zda.local_timestamp(),
            Some(datetime!(2004-03-11 15:00:12.71 -1))
        );

        let zda = decode("201530.00,04,07,2002,-05,30").unwrap();
        assert_eq!(zda.local_zone, Some(offset!(-5:30)));

        let zda = decode("201530.00,04,07,2002,05,45").unwrap();
        assert_eq!(zda.local_zone, Some(offset!(+5:45)));

        let zda = decode("201530.00,,,,,").unwrap();
        assert_eq!(zda.date, None);
        assert_eq!(zda.local_zone, None);
        assert_eq!(zda.timestamp(), None);
    }

    #[test]
    fn test_zda_invalid() {
        let cases = [
            ("160012.71,32,03,2004,-1,00", DecodeError::InvalidField { index: 1 }),
            ("160012.71,11,13,2004,-1,00", DecodeError::InvalidField { index: 2 }),
            ("160012.71,11,03,04,-1,00", DecodeError::InvalidField { index: 3 }),
            ("160012.71,11,,2004,-1,00", DecodeError::MissingField { index: 2 }),
            ("160012.71,11,03,2004,,30", DecodeError::MissingField { index: 4 }),
            ("160012.71,11,03,2004,-1,75", DecodeError::InvalidField { index: 4 }),
            ("160012.71,11,03,2004,-30,00", DecodeError::InvalidField { index: 4 }),
            (
                "160012.71,11,03,2004,-1",
                DecodeError::FieldCount {
                    min: 6,
                    max: 6,
                    found: 5,
                },
            ),
        ];

        for (fields, expected) in cases {
            assert_eq!(decode(fields), Err(expected), "Fields: {fields:?}");
        }
    }
}
