//! Calendar date/time value for the DS3231's 2000–2099 window.
//!
//! [`RtcDateTime`] is a small `Copy` value holding one point in civil time at
//! second resolution. It converts to and from a linear count of seconds since
//! 2000-01-01T00:00:00 (the chip's own epoch) and the Unix epoch, and it can
//! be built from the compile-time style `"Mmm dd yyyy"` / `"HH:MM:SS"` text
//! pair.
//!
//! The leap year rule is the simplified "every fourth year" rule, which is
//! exact for the whole supported century (2000 is a leap year, 2100 is
//! outside the window).
//!
//! # Example
//!
//! ```
//! use ds3231_clock::RtcDateTime;
//!
//! let dt = RtcDateTime::from_epoch_seconds_2000(0);
//! assert_eq!((dt.year(), dt.month(), dt.day()), (2000, 1, 1));
//! assert_eq!(dt.weekday(), 6); // Saturday
//! assert_eq!(dt.to_unix_timestamp(), 946_684_800);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::DS3231DateTimeError;

/// Seconds between 1970-01-01T00:00:00 and 2000-01-01T00:00:00.
pub const UNIX_EPOCH_OFFSET: u32 = 946_684_800;

const SECONDS_PER_DAY: u32 = 86_400;
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const MONTH_ABBREVIATIONS: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov",
    b"Dec",
];

fn is_leap_year(year_offset: u8) -> bool {
    year_offset % 4 == 0
}

fn days_in_year(year_offset: u8) -> u32 {
    if is_leap_year(year_offset) {
        366
    } else {
        365
    }
}

/// Length of `month` (1-12) in the year `2000 + year_offset`.
fn days_in_month(year_offset: u8, month: u8) -> u8 {
    if month == 2 && is_leap_year(year_offset) {
        29
    } else {
        DAYS_IN_MONTH[usize::from(month.clamp(1, 12) - 1)]
    }
}

/// A date and time between 2000-01-01 and 2099-12-31, with weekday.
///
/// The year is stored as an offset from 2000. Weekdays count from Sunday = 0
/// to Saturday = 6. Values built with [`RtcDateTime::new`] derive the weekday
/// from the date; values read from the chip carry the weekday register as
/// stored, which [`RtcDateTime::weekday_matches_date`] can check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcDateTime {
    year_offset: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    weekday: u8,
}

impl RtcDateTime {
    /// Decomposes a count of seconds since 2000-01-01T00:00:00.
    ///
    /// Counters beyond 2099-12-31T23:59:59 still decode deterministically,
    /// but the simplified leap year rule makes them wrong after 2100-02-28.
    #[must_use]
    pub fn from_epoch_seconds_2000(counter: u32) -> Self {
        let second = (counter % 60) as u8;
        let minutes = counter / 60;
        let minute = (minutes % 60) as u8;
        let hours = minutes / 60;
        let hour = (hours % 24) as u8;
        let mut days = hours / 24;

        // 2000-01-01 was a Saturday
        let weekday = ((days + 6) % 7) as u8;

        let mut year_offset: u8 = 0;
        while days >= days_in_year(year_offset) {
            days -= days_in_year(year_offset);
            year_offset += 1;
        }

        let mut month: u8 = 1;
        while days >= u32::from(days_in_month(year_offset, month)) {
            days -= u32::from(days_in_month(year_offset, month));
            month += 1;
        }

        Self {
            year_offset,
            month,
            day: days as u8 + 1,
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Builds a value from a Unix timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231DateTimeError::YearOutOfRange`] for timestamps before
    /// 2000-01-01T00:00:00.
    pub fn from_unix_timestamp(timestamp: u32) -> Result<Self, DS3231DateTimeError> {
        timestamp
            .checked_sub(UNIX_EPOCH_OFFSET)
            .map(Self::from_epoch_seconds_2000)
            .ok_or(DS3231DateTimeError::YearOutOfRange)
    }

    /// Builds a value from its fields, deriving the weekday from the date.
    ///
    /// A `year` of 2000 or later is a full year; smaller values are taken as
    /// an offset from 2000, so `new(24, ..)` and `new(2024, ..)` are equal.
    /// Nothing is validated: an over-range field (say, February 31st) yields a
    /// deterministic but meaningless epoch counter. Use
    /// [`RtcDateTime::try_new`] to reject such input.
    #[must_use]
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let mut value = Self::with_weekday(year, month, day, hour, minute, second, 0);
        value.weekday = value.derived_weekday();
        value
    }

    /// Builds a value from its fields with an explicitly supplied weekday.
    ///
    /// Like [`RtcDateTime::new`] nothing is validated; the weekday is kept as
    /// given even if it disagrees with the date.
    #[must_use]
    pub fn with_weekday(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
    ) -> Self {
        let offset = if year >= 2000 { year - 2000 } else { year };
        Self {
            // Only offsets 0-99 are meaningful; larger ones wrap
            year_offset: offset as u8,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Builds a value from its fields, rejecting anything the calendar or the
    /// chip cannot represent.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231DateTimeError::YearOutOfRange`] if `year` is not within
    /// 2000-2099, and [`DS3231DateTimeError::InvalidDateTime`] for an invalid
    /// month, a day beyond the month's length, or an out-of-range time.
    pub fn try_new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DS3231DateTimeError> {
        if !(2000..=2099).contains(&year) {
            error!("Year {} is outside of 2000-2099", year);
            return Err(DS3231DateTimeError::YearOutOfRange);
        }
        let value = Self::new(year, month, day, hour, minute, second);
        if !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(value.year_offset, month)
            || hour > 23
            || minute > 59
            || second > 59
        {
            return Err(DS3231DateTimeError::InvalidDateTime);
        }
        Ok(value)
    }

    /// Parses compile-time style date and time text.
    ///
    /// `date` must look like `"Jun 15 2024"` (the day may be space padded,
    /// `"Jun  5 2024"`) and `time` like `"14:30:00"`. The weekday is derived
    /// from the date.
    ///
    /// ```
    /// use ds3231_clock::RtcDateTime;
    ///
    /// let dt = RtcDateTime::from_text("Feb 29 2024", "23:59:58").unwrap();
    /// assert_eq!(dt, RtcDateTime::new(2024, 2, 29, 23, 59, 58));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DS3231DateTimeError::UnknownMonth`] for an unrecognized month
    /// abbreviation and [`DS3231DateTimeError::InvalidFormat`] for anything
    /// else: a broken layout, or well-formed text naming a value that does
    /// not exist (`"25:30:05"`, `"Feb 30 2024"`, a year outside 2000-2099).
    pub fn from_text(date: &str, time: &str) -> Result<Self, DS3231DateTimeError> {
        let date = date.as_bytes();
        let time = time.as_bytes();
        if date.len() != 11 || date[3] != b' ' || date[6] != b' ' {
            return Err(DS3231DateTimeError::InvalidFormat);
        }
        if time.len() != 8 || time[2] != b':' || time[5] != b':' {
            return Err(DS3231DateTimeError::InvalidFormat);
        }

        let month = MONTH_ABBREVIATIONS
            .iter()
            .position(|abbreviation| abbreviation[..] == date[..3])
            .ok_or(DS3231DateTimeError::UnknownMonth)?;
        let day_tens = if date[4] == b' ' { b'0' } else { date[4] };
        let day = parse_two_digits(day_tens, date[5])?;
        let century = parse_two_digits(date[7], date[8])?;
        let year = parse_two_digits(date[9], date[10])?;
        let hour = parse_two_digits(time[0], time[1])?;
        let minute = parse_two_digits(time[3], time[4])?;
        let second = parse_two_digits(time[6], time[7])?;

        Self::try_new(
            u16::from(century) * 100 + u16::from(year),
            month as u8 + 1,
            day,
            hour,
            minute,
            second,
        )
        .map_err(|_| DS3231DateTimeError::InvalidFormat)
    }

    /// Full year, 2000-2099 for in-range values.
    #[must_use]
    pub fn year(&self) -> u16 {
        2000 + u16::from(self.year_offset)
    }

    /// Month of the year, January = 1.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day, 0-23.
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, 0-59.
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute, 0-59.
    #[must_use]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Day of the week, Sunday = 0 through Saturday = 6.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Returns `true` if the stored weekday agrees with the calendar date.
    #[must_use]
    pub fn weekday_matches_date(&self) -> bool {
        self.weekday == self.derived_weekday()
    }

    /// Seconds since 2000-01-01T00:00:00.
    ///
    /// Exact inverse of [`RtcDateTime::from_epoch_seconds_2000`] for every
    /// value in range. Over-range fields wrap instead of failing.
    #[must_use]
    pub fn to_epoch_seconds_2000(&self) -> u32 {
        self.days_since_epoch()
            .wrapping_mul(SECONDS_PER_DAY)
            .wrapping_add(u32::from(self.hour) * 3600)
            .wrapping_add(u32::from(self.minute) * 60)
            .wrapping_add(u32::from(self.second))
    }

    /// Seconds since 1970-01-01T00:00:00.
    #[must_use]
    pub fn to_unix_timestamp(&self) -> u32 {
        self.to_epoch_seconds_2000().wrapping_add(UNIX_EPOCH_OFFSET)
    }

    fn days_since_epoch(&self) -> u32 {
        let year_offset = u32::from(self.year_offset);
        // Leap days of the years before this one, 2000 included
        let mut days = 365 * year_offset + (year_offset + 3) / 4;
        for month in 1..self.month.min(13) {
            days += u32::from(days_in_month(self.year_offset, month));
        }
        days.wrapping_add(u32::from(self.day)).wrapping_sub(1)
    }

    fn derived_weekday(&self) -> u8 {
        ((self.days_since_epoch() % 7 + 6) % 7) as u8
    }
}

fn parse_two_digits(tens: u8, ones: u8) -> Result<u8, DS3231DateTimeError> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return Err(DS3231DateTimeError::InvalidFormat);
    }
    Ok((tens - b'0') * 10 + (ones - b'0'))
}

impl TryFrom<&NaiveDateTime> for RtcDateTime {
    type Error = DS3231DateTimeError;

    fn try_from(datetime: &NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(datetime.year()).map_err(|_| DS3231DateTimeError::YearOutOfRange)?;
        // chrono's fields are already range checked
        Self::try_new(
            year,
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        )
    }
}

impl TryFrom<RtcDateTime> for NaiveDateTime {
    type Error = DS3231DateTimeError;

    fn try_from(value: RtcDateTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(value.year()),
            u32::from(value.month),
            u32::from(value.day),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(value.hour),
                u32::from(value.minute),
                u32::from(value.second),
            )
        })
        .ok_or(DS3231DateTimeError::InvalidDateTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn reference(value: &RtcDateTime) -> NaiveDateTime {
        NaiveDateTime::try_from(*value).unwrap()
    }

    #[test]
    fn test_epoch_origin() {
        let dt = RtcDateTime::from_epoch_seconds_2000(0);
        assert_eq!(dt.year(), 2000);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
        assert_eq!(dt.to_epoch_seconds_2000(), 0);
        assert_eq!(dt.to_unix_timestamp(), 946_684_800);
    }

    #[test]
    fn test_weekday_anchor_is_saturday() {
        let dt = RtcDateTime::new(2000, 1, 1, 0, 0, 0);
        assert_eq!(dt.weekday(), 6);
        assert_eq!(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().weekday(),
            Weekday::Sat
        );
        assert_eq!(RtcDateTime::from_epoch_seconds_2000(0).weekday(), 6);
        // 2000-01-02 was a Sunday
        assert_eq!(RtcDateTime::from_epoch_seconds_2000(SECONDS_PER_DAY).weekday(), 0);
    }

    #[test]
    fn test_round_trip_every_day_of_the_century() {
        let mut expected_counter = 0u32;
        for year in 2000..=2099u16 {
            for month in 1..=12u8 {
                let year_offset = (year - 2000) as u8;
                for day in 1..=days_in_month(year_offset, month) {
                    let dt = RtcDateTime::new(year, month, day, 23, 59, 59);
                    let counter = dt.to_epoch_seconds_2000();
                    assert_eq!(counter, expected_counter + SECONDS_PER_DAY - 1);
                    assert_eq!(RtcDateTime::from_epoch_seconds_2000(counter), dt);

                    let midnight = RtcDateTime::new(year, month, day, 0, 0, 0);
                    assert_eq!(midnight.to_epoch_seconds_2000(), expected_counter);
                    assert_eq!(
                        RtcDateTime::from_epoch_seconds_2000(expected_counter),
                        midnight
                    );
                    expected_counter += SECONDS_PER_DAY;
                }
            }
        }
        assert_eq!(expected_counter / SECONDS_PER_DAY, 36_525);
    }

    #[test]
    fn test_matches_chrono_reference() {
        // Walk the century in uneven steps so every time-of-day field varies
        let mut counter = 0u32;
        while counter < 3_155_760_000 {
            let dt = RtcDateTime::from_epoch_seconds_2000(counter);
            let naive = reference(&dt);
            assert_eq!(
                i64::from(dt.to_unix_timestamp()),
                naive.and_utc().timestamp()
            );
            assert_eq!(
                u32::from(dt.weekday()),
                naive.weekday().num_days_from_sunday()
            );
            assert_eq!(dt.year() as i32, naive.year());
            counter += 86_399 * 3 + 7_261;
        }
    }

    #[test]
    fn test_leap_day_is_contiguous() {
        let last = RtcDateTime::new(2000, 2, 29, 23, 59, 59);
        let first = RtcDateTime::new(2000, 3, 1, 0, 0, 0);
        assert_eq!(
            last.to_epoch_seconds_2000() + 1,
            first.to_epoch_seconds_2000()
        );
        let decoded = RtcDateTime::from_epoch_seconds_2000(last.to_epoch_seconds_2000());
        assert_eq!((decoded.month(), decoded.day()), (2, 29));
        let decoded = RtcDateTime::from_epoch_seconds_2000(first.to_epoch_seconds_2000());
        assert_eq!((decoded.month(), decoded.day()), (3, 1));

        // 2001 is not a leap year
        let feb28 = RtcDateTime::new(2001, 2, 28, 23, 59, 59);
        let mar1 = RtcDateTime::new(2001, 3, 1, 0, 0, 0);
        assert_eq!(feb28.to_epoch_seconds_2000() + 1, mar1.to_epoch_seconds_2000());
    }

    #[test]
    fn test_last_second_of_window() {
        let dt = RtcDateTime::new(2099, 12, 31, 23, 59, 59);
        assert_eq!(dt.to_epoch_seconds_2000(), 3_155_759_999);
        assert_eq!(RtcDateTime::from_epoch_seconds_2000(3_155_759_999), dt);
        assert_eq!(dt.weekday(), 4); // Thursday
    }

    #[test]
    fn test_unix_timestamp_conversions() {
        let dt = RtcDateTime::from_unix_timestamp(1_718_461_800).unwrap();
        assert_eq!(dt, RtcDateTime::new(2024, 6, 15, 14, 30, 0));
        assert_eq!(dt.to_unix_timestamp(), 1_718_461_800);
        assert!(matches!(
            RtcDateTime::from_unix_timestamp(UNIX_EPOCH_OFFSET - 1),
            Err(DS3231DateTimeError::YearOutOfRange)
        ));
    }

    #[test]
    fn test_year_offset_and_full_year_are_equivalent() {
        assert_eq!(
            RtcDateTime::new(24, 6, 15, 14, 30, 0),
            RtcDateTime::new(2024, 6, 15, 14, 30, 0)
        );
    }

    #[test]
    fn test_permissive_day_overflow_is_deterministic() {
        // February 31st lands on March 2nd in a leap year
        let overflow = RtcDateTime::new(2024, 2, 31, 0, 0, 0);
        assert_eq!(overflow.day(), 31);
        let counter = overflow.to_epoch_seconds_2000();
        assert_eq!(counter, RtcDateTime::new(2024, 3, 2, 0, 0, 0).to_epoch_seconds_2000());
        assert_eq!(
            RtcDateTime::from_epoch_seconds_2000(counter),
            RtcDateTime::new(2024, 3, 2, 0, 0, 0)
        );
        // Day zero before the epoch wraps instead of panicking
        let day_zero = RtcDateTime::new(2000, 1, 0, 0, 0, 0);
        assert_eq!(day_zero.to_epoch_seconds_2000(), 0u32.wrapping_sub(SECONDS_PER_DAY));
    }

    #[test]
    fn test_explicit_weekday_is_kept() {
        let dt = RtcDateTime::with_weekday(2024, 6, 15, 14, 30, 0, 2);
        assert_eq!(dt.weekday(), 2);
        assert!(!dt.weekday_matches_date());
        let dt = RtcDateTime::with_weekday(2024, 6, 15, 14, 30, 0, 6);
        assert!(dt.weekday_matches_date());
        assert_eq!(dt, RtcDateTime::new(2024, 6, 15, 14, 30, 0));
    }

    #[test]
    fn test_try_new_validation() {
        assert!(RtcDateTime::try_new(2024, 2, 29, 0, 0, 0).is_ok());
        assert!(matches!(
            RtcDateTime::try_new(2023, 2, 29, 0, 0, 0),
            Err(DS3231DateTimeError::InvalidDateTime)
        ));
        assert!(matches!(
            RtcDateTime::try_new(1999, 12, 31, 0, 0, 0),
            Err(DS3231DateTimeError::YearOutOfRange)
        ));
        assert!(matches!(
            RtcDateTime::try_new(2100, 1, 1, 0, 0, 0),
            Err(DS3231DateTimeError::YearOutOfRange)
        ));
        assert!(RtcDateTime::try_new(2024, 13, 1, 0, 0, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 0, 1, 0, 0, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 4, 31, 0, 0, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 4, 0, 0, 0, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 4, 1, 24, 0, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 4, 1, 0, 60, 0).is_err());
        assert!(RtcDateTime::try_new(2024, 4, 1, 0, 0, 60).is_err());
    }

    #[test]
    fn test_from_text() {
        let dt = RtcDateTime::from_text("Jun 15 2024", "14:30:05").unwrap();
        assert_eq!(dt, RtcDateTime::new(2024, 6, 15, 14, 30, 5));
        assert_eq!(dt.weekday(), 6);

        let dt = RtcDateTime::from_text("Jan  1 2000", "00:00:00").unwrap();
        assert_eq!(dt.to_epoch_seconds_2000(), 0);

        for (index, abbreviation) in ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            .iter()
            .enumerate()
        {
            let mut date = [b' '; 11];
            date[..3].copy_from_slice(abbreviation.as_bytes());
            date[3..].copy_from_slice(b" 10 2031");
            let date = core::str::from_utf8(&date).unwrap();
            let dt = RtcDateTime::from_text(date, "12:00:00").unwrap();
            assert_eq!(usize::from(dt.month()), index + 1);
        }
    }

    #[test]
    fn test_from_text_errors() {
        assert!(matches!(
            RtcDateTime::from_text("jun 15 2024", "14:30:05"),
            Err(DS3231DateTimeError::UnknownMonth)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jux 15 2024", "14:30:05"),
            Err(DS3231DateTimeError::UnknownMonth)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun 15 24", "14:30:05"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun-15-2024", "14:30:05"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun 15 2024", "14:30"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun 15 2024", "14.30.05"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun 1x 2024", "14:30:05"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
        assert!(matches!(
            RtcDateTime::from_text("Jun 15 2024", "14:30:05x"),
            Err(DS3231DateTimeError::InvalidFormat)
        ));
    }

    #[test]
    fn test_from_text_out_of_range_values() {
        // Well-formed text naming values that do not exist
        for (date, time) in [
            ("Jun 15 2024", "25:30:05"),
            ("Jun 15 2024", "14:60:05"),
            ("Jun 15 2024", "14:30:60"),
            ("Feb 30 2024", "14:30:05"),
            ("Feb 29 2023", "14:30:05"),
            ("Jun 31 2024", "14:30:05"),
            ("Jun 00 2024", "14:30:05"),
            ("Jun 15 1999", "14:30:05"),
            ("Jun 15 2100", "14:30:05"),
        ] {
            assert_eq!(
                RtcDateTime::from_text(date, time),
                Err(DS3231DateTimeError::InvalidFormat),
                "{} {}",
                date,
                time
            );
        }
    }

    #[test]
    fn test_chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        let dt = RtcDateTime::try_from(&naive).unwrap();
        assert_eq!(dt, RtcDateTime::new(2024, 3, 14, 15, 30, 0));
        assert_eq!(dt.weekday(), 4); // Thursday
        assert_eq!(NaiveDateTime::try_from(dt).unwrap(), naive);

        let too_late = NaiveDate::from_ymd_opt(2100, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            RtcDateTime::try_from(&too_late),
            Err(DS3231DateTimeError::YearOutOfRange)
        ));
        assert!(NaiveDateTime::try_from(RtcDateTime::new(2023, 2, 29, 0, 0, 0)).is_err());
    }
}
