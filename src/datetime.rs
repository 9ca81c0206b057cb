//! Date/time register frame of the DS3231.
//!
//! The chip keeps the current time in 7 consecutive registers starting at
//! [`RegAddr::Seconds`](crate::RegAddr::Seconds):
//! seconds, minutes, hours, day, date, month and year, each BCD encoded.
//! `DS3231DateTime` holds one such frame and converts it to and from
//! [`RtcDateTime`].
//!
//! # Quirks
//!
//! - The hours register is either 24-hour (bit 5 is the 20-hour digit) or
//!   12-hour (bit 5 is PM). Both are decoded; writes use the driver's
//!   configured [`TimeRepresentation`].
//! - The day register counts 1-7 (Sunday = 1), one more than
//!   [`RtcDateTime::weekday`].
//! - The century flag in the month register is never written. Reading it set
//!   means the year is past 2099 and is rejected.

use crate::bcd::{join_bcd, make_bcd};
use crate::{
    Date, Day, Hours, Minutes, Month, RtcDateTime, Seconds, TimeRepresentation, Year,
};

/// Raw contents of the 7 date/time registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct DS3231DateTime {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    day: Day,
    date: Date,
    month: Month,
    year: Year,
}

impl DS3231DateTime {
    fn convert_seconds(seconds: u8) -> Result<Seconds, DS3231DateTimeError> {
        let (ones, tens) = make_bcd(seconds, 59)?;
        let mut value = Seconds::default();
        value.set_seconds(ones);
        value.set_ten_seconds(tens);
        Ok(value)
    }

    fn convert_minutes(minutes: u8) -> Result<Minutes, DS3231DateTimeError> {
        let (ones, tens) = make_bcd(minutes, 59)?;
        let mut value = Minutes::default();
        value.set_minutes(ones);
        value.set_ten_minutes(tens);
        Ok(value)
    }

    /// Encodes a 0-23 hour in the given representation.
    pub(crate) fn convert_hours(
        hour: u8,
        time_representation: TimeRepresentation,
    ) -> Result<Hours, DS3231DateTimeError> {
        if hour > 23 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let mut value = Hours::default();
        value.set_time_representation(time_representation);
        match time_representation {
            TimeRepresentation::TwentyFourHour => {
                value.set_hours(hour % 10);
                value.set_ten_hours(u8::from((10..20).contains(&hour)));
                value.set_pm_or_twenty_hours(u8::from(hour >= 20));
            }
            TimeRepresentation::TwelveHour => {
                let hour12 = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                value.set_hours(hour12 % 10);
                value.set_ten_hours(hour12 / 10);
                value.set_pm_or_twenty_hours(u8::from(hour >= 12));
            }
        }
        Ok(value)
    }

    /// Decodes an hours register in either representation to 0-23.
    pub(crate) fn decode_hours(hours: Hours) -> Result<u8, DS3231DateTimeError> {
        let hour = join_bcd(hours.hours(), hours.ten_hours())?;
        let is_set = hours.pm_or_twenty_hours() != 0;
        let hour = match hours.time_representation() {
            TimeRepresentation::TwentyFourHour => hour + if is_set { 20 } else { 0 },
            TimeRepresentation::TwelveHour => {
                if hour == 0 || hour > 12 {
                    return Err(DS3231DateTimeError::InvalidDateTime);
                }
                match (hour, is_set) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, false) => h,
                    (h, true) => h + 12,
                }
            }
        };
        if hour > 23 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        Ok(hour)
    }

    fn convert_day(weekday: u8) -> Result<Day, DS3231DateTimeError> {
        if weekday > 6 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let mut value = Day::default();
        value.set_day(weekday + 1);
        Ok(value)
    }

    fn convert_date(date: u8) -> Result<Date, DS3231DateTimeError> {
        if date == 0 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let (ones, tens) = make_bcd(date, 31)?;
        let mut value = Date::default();
        value.set_date(ones);
        value.set_ten_date(tens);
        Ok(value)
    }

    fn convert_month(month: u8) -> Result<Month, DS3231DateTimeError> {
        if month == 0 {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        let (ones, tens) = make_bcd(month, 12)?;
        let mut value = Month::default();
        value.set_month(ones);
        value.set_ten_month(tens);
        Ok(value)
    }

    fn convert_year(year: u16) -> Result<Year, DS3231DateTimeError> {
        if !(2000..=2099).contains(&year) {
            error!("Year {} is outside of 2000-2099", year);
            return Err(DS3231DateTimeError::YearOutOfRange);
        }
        let (ones, tens) = make_bcd((year - 2000) as u8, 99)?;
        let mut value = Year::default();
        value.set_year(ones);
        value.set_ten_year(tens);
        Ok(value)
    }

    /// Encodes `datetime` into register values.
    ///
    /// Day-of-month is only checked against 1-31, not against the month's
    /// length; the chip itself does not validate it either.
    pub(crate) fn from_datetime(
        datetime: &RtcDateTime,
        time_representation: TimeRepresentation,
    ) -> Result<Self, DS3231DateTimeError> {
        let raw = DS3231DateTime {
            seconds: Self::convert_seconds(datetime.second())?,
            minutes: Self::convert_minutes(datetime.minute())?,
            hours: Self::convert_hours(datetime.hour(), time_representation)?,
            day: Self::convert_day(datetime.weekday())?,
            date: Self::convert_date(datetime.day())?,
            month: Self::convert_month(datetime.month())?,
            year: Self::convert_year(datetime.year())?,
        };
        debug!("raw={:?}", <[u8; 7]>::from(&raw));
        Ok(raw)
    }

    /// Decodes register values into a date/time.
    ///
    /// The weekday is taken from the day register as stored. A day register
    /// outside 1-7 is treated as unset and replaced by the weekday derived
    /// from the date.
    pub(crate) fn into_datetime(self) -> Result<RtcDateTime, DS3231DateTimeError> {
        if self.month.century() {
            error!("Century flag set, year is past 2099");
            return Err(DS3231DateTimeError::YearOutOfRange);
        }
        let second = join_bcd(self.seconds.seconds(), self.seconds.ten_seconds())?;
        let minute = join_bcd(self.minutes.minutes(), self.minutes.ten_minutes())?;
        let hour = Self::decode_hours(self.hours)?;
        let date = join_bcd(self.date.date(), self.date.ten_date())?;
        let month = join_bcd(self.month.month(), self.month.ten_month())?;
        let year = join_bcd(self.year.year(), self.year.ten_year())?;
        if second > 59 || minute > 59 || !(1..=31).contains(&date) || !(1..=12).contains(&month) {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }

        let year = 2000 + u16::from(year);
        debug!(
            "decoded {}-{}-{} {}:{}:{}",
            year, month, date, hour, minute, second
        );
        let datetime = match self.day.day() {
            day @ 1..=7 => {
                RtcDateTime::with_weekday(year, month, date, hour, minute, second, day - 1)
            }
            day => {
                warn!(
                    "Day register {} is not a weekday, deriving it from the date",
                    day
                );
                RtcDateTime::new(year, month, date, hour, minute, second)
            }
        };
        if !datetime.weekday_matches_date() {
            warn!(
                "Weekday register {} disagrees with the date",
                datetime.weekday()
            );
        }
        Ok(datetime)
    }

    /// The 12/24-hour mode the hours register is in.
    pub(crate) fn time_representation(&self) -> TimeRepresentation {
        self.hours.time_representation()
    }

    /// Re-encodes the hours register in `time_representation`, keeping the
    /// hour of the day. The other registers are untouched.
    pub(crate) fn with_time_representation(
        mut self,
        time_representation: TimeRepresentation,
    ) -> Result<Self, DS3231DateTimeError> {
        if self.hours.time_representation() != time_representation {
            let hour = Self::decode_hours(self.hours)?;
            self.hours = Self::convert_hours(hour, time_representation)?;
        }
        Ok(self)
    }
}

impl From<[u8; 7]> for DS3231DateTime {
    fn from(data: [u8; 7]) -> Self {
        DS3231DateTime {
            seconds: Seconds(data[0]),
            minutes: Minutes(data[1]),
            hours: Hours(data[2]),
            day: Day(data[3]),
            date: Date(data[4]),
            month: Month(data[5]),
            year: Year(data[6]),
        }
    }
}

impl From<&DS3231DateTime> for [u8; 7] {
    fn from(dt: &DS3231DateTime) -> [u8; 7] {
        [
            dt.seconds.0,
            dt.minutes.0,
            dt.hours.0,
            dt.day.0,
            dt.date.0,
            dt.month.0,
            dt.year.0,
        ]
    }
}

/// Errors that can occur during date/time conversion, parsing or validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DS3231DateTimeError {
    /// A field is out of range or not valid BCD
    InvalidDateTime,
    /// The year is outside of 2000-2099
    YearOutOfRange,
    /// Date or time text does not follow the fixed-width layout
    InvalidFormat,
    /// Date text names an unknown month abbreviation
    UnknownMonth,
}
