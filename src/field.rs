//! # Field Parsing
//!
//! Typed conversion of individual data fields. A field is decoded only when it
//! is non-empty, and its parser must consume it completely: `"1.5x"` is not a
//! number.

use std::ops::RangeInclusive;

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
};

use crate::{DecodeError, Error, IResult};

/// Types that can be parsed from the text of a single field.
///
/// Implementations are provided for the integer and floating point types used
/// by the decoders, [`time::Time`] and the single-character indicator enums
/// such as [`Status`](crate::Status).
///
/// ```rust
/// use nmea0183_decoder::{FieldParse, IResult};
///
/// let result: IResult<_, _> = f32::parse("77.52");
/// assert_eq!(result, Ok(("", 77.52)));
///
/// let result: IResult<_, _> = u8::parse("08");
/// assert_eq!(result, Ok(("", 8)));
/// ```
pub trait FieldParse: Sized {
    /// Parses a value from the start of `i`, returning the unparsed rest.
    fn parse(i: &str) -> IResult<&str, Self>;
}

macro_rules! impl_int_type {
    ($($t:tt),*) => ($(
        impl FieldParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

impl_int_type!(u8, u16, i8);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl FieldParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                let result: IResult<_, _> = nom::number::complete::$p.parse(i);
                let (rest, value) = result?;

                // nom also accepts "nan" and "inf" spellings.
                if !value.is_finite() {
                    return Err(nom::Err::Error(Error::InvalidField(i)));
                }

                Ok((rest, value))
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

/// `hhmmss` with an optional fraction of any precision, e.g. `083559.00`.
impl FieldParse for time::Time {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
        let fraction: IResult<_, _> = opt(preceded(char('.'), digit1)).parse(i);
        let (i, fraction) = fraction?;

        let time =
            time::Time::from_hms_nano(hour, minute, second, fraction.map_or(0, nanoseconds))
                .map_err(|_| nom::Err::Error(Error::InvalidField(i)))?;

        Ok((i, time))
    }
}

/// Parses a `ddmmyy` date.
///
/// Two-digit years at or above `century_pivot` fall in the 1900s, the others in
/// the 2000s.
pub(crate) fn date<'a>(century_pivot: u8) -> impl FnMut(&'a str) -> IResult<&'a str, time::Date> {
    move |i: &'a str| {
        let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

        let year = if year >= century_pivot {
            1900 + i32::from(year)
        } else {
            2000 + i32::from(year)
        };

        let month =
            time::Month::try_from(month).map_err(|_| nom::Err::Error(Error::InvalidField(i)))?;
        let date = time::Date::from_calendar_date(year, month, day)
            .map_err(|_| nom::Err::Error(Error::InvalidField(i)))?;

        Ok((i, date))
    }
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), |digits: &str| {
        digits.parse::<u8>()
    })
    .parse(i)
}

/// Converts the digits after the decimal point of a seconds field to
/// nanoseconds. Digits beyond nanosecond precision are dropped.
fn nanoseconds(fraction: &str) -> u32 {
    fraction
        .bytes()
        .take(9)
        .zip((0..9).rev())
        .map(|(digit, exponent)| u32::from(digit - b'0') * 10u32.pow(exponent))
        .sum()
}

/// Sequential access to the data fields of one sentence.
///
/// Each accessor consumes one field and reports failures with the index of
/// that field. Fields past the end of a shorter accepted layout read as empty.
pub(crate) struct FieldReader<'f, 'a> {
    fields: &'f [&'a str],
    index: usize,
    century_pivot: u8,
}

impl<'f, 'a> FieldReader<'f, 'a> {
    /// Checks the field count against `arity` before any field is read.
    pub(crate) fn new(
        fields: &'f [&'a str],
        arity: RangeInclusive<usize>,
        century_pivot: u8,
    ) -> Result<Self, DecodeError> {
        if !arity.contains(&fields.len()) {
            return Err(DecodeError::FieldCount {
                min: *arity.start(),
                max: *arity.end(),
                found: fields.len(),
            });
        }

        Ok(Self {
            fields,
            index: 0,
            century_pivot,
        })
    }

    /// Index of the next field to be read.
    pub(crate) fn position(&self) -> usize {
        self.index
    }

    /// The raw text of the next field, empty when past the end.
    pub(crate) fn raw(&mut self) -> &'a str {
        let raw = self.fields.get(self.index).copied().unwrap_or_default();
        self.index += 1;
        raw
    }

    /// Parses the next field with `parser`, `None` when it is empty.
    pub(crate) fn optional_with<T, P>(&mut self, parser: P) -> Result<Option<T>, DecodeError>
    where
        P: FnMut(&'a str) -> IResult<&'a str, T>,
    {
        let index = self.index;
        let raw = self.raw();

        if raw.is_empty() {
            return Ok(None);
        }

        let result: IResult<_, _> = all_consuming(parser).parse(raw);
        result
            .map(|(_, value)| Some(value))
            .map_err(|_| DecodeError::InvalidField { index })
    }

    pub(crate) fn optional<T: FieldParse>(&mut self) -> Result<Option<T>, DecodeError> {
        self.optional_with(T::parse)
    }

    /// Parses the next field, reading an empty field as `T::default()`.
    pub(crate) fn or_default<T: FieldParse + Default>(&mut self) -> Result<T, DecodeError> {
        Ok(self.optional()?.unwrap_or_default())
    }

    pub(crate) fn required<T: FieldParse>(&mut self) -> Result<T, DecodeError> {
        let index = self.index;
        self.optional()?.ok_or(DecodeError::MissingField { index })
    }

    /// Parses the next field as a `ddmmyy` date using the configured pivot.
    pub(crate) fn date(&mut self) -> Result<Option<time::Date>, DecodeError> {
        self.optional_with(date(self.century_pivot))
    }

    /// Copies the next field verbatim into a string of at most `N` characters.
    pub(crate) fn code<const N: usize>(&mut self) -> Result<heapless::String<N>, DecodeError> {
        let index = self.index;
        heapless::String::try_from(self.raw()).map_err(|_| DecodeError::InvalidField { index })
    }

    /// Parses a value followed by its unit field, e.g. `545.4,M`.
    ///
    /// The unit field must be empty or exactly `unit`.
    pub(crate) fn with_unit<T: FieldParse>(
        &mut self,
        unit: char,
    ) -> Result<Option<T>, DecodeError> {
        let value = self.optional()?;
        self.optional_with(|i| char(unit).parse(i))?;
        Ok(value)
    }
}

/// Applies a hemisphere to an unsigned magnitude.
pub(crate) trait Signed {
    fn is_negative(&self) -> bool;

    fn apply<T: std::ops::Neg<Output = T>>(&self, value: T) -> T {
        if self.is_negative() { -value } else { value }
    }
}
