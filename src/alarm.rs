//! Alarm configuration for the DS3231.
//!
//! Each alarm register carries a mask bit in bit 7. A set mask bit makes the
//! chip ignore that field ("don't care") when comparing against the current
//! time; the alarm fires once per second in which every unmasked field
//! matches. Only some mask combinations are meaningful, and the
//! configuration enums below enumerate exactly those.
//!
//! # Alarm 1 (seconds precision)
//!
//! | Config | A1M4..A1M1 | Fires |
//! |---|---|---|
//! | [`Alarm1Config::EverySecond`] | 1111 | every second |
//! | [`Alarm1Config::AtSeconds`] | 1110 | when seconds match |
//! | [`Alarm1Config::AtMinutesSeconds`] | 1100 | when minutes and seconds match |
//! | [`Alarm1Config::AtTime`] | 1000 | daily at hours:minutes:seconds |
//! | [`Alarm1Config::AtTimeOnDate`] | 0000, DY/DT=0 | on a date of the month |
//! | [`Alarm1Config::AtTimeOnDay`] | 0000, DY/DT=1 | on a day of the week |
//!
//! # Alarm 2 (minute precision, fires at 00 seconds)
//!
//! | Config | A2M4..A2M2 |
//! |---|---|
//! | [`Alarm2Config::EveryMinute`] | 111 |
//! | [`Alarm2Config::AtMinutes`] | 110 |
//! | [`Alarm2Config::AtTime`] | 100 |
//! | [`Alarm2Config::AtTimeOnDate`] / [`Alarm2Config::AtTimeOnDay`] | 000 |
//!
//! Hours are always given in 24-hour form and weekdays count from
//! Sunday = 0, like [`RtcDateTime`](crate::RtcDateTime). Alarms are written
//! in 24-hour mode; 12-hour alarm registers written by other software are
//! still decoded.

use crate::bcd::{join_bcd, make_bcd};
use crate::datetime::DS3231DateTime;
use crate::{
    AlarmDayDate, AlarmHours, AlarmMinutes, AlarmSeconds, DS3231DateTimeError, DayDateSelect,
    Hours, TimeRepresentation,
};

/// Error type for alarm configuration operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmError {
    /// Invalid time component value
    InvalidTime(&'static str),
    /// Invalid day of week (must be 0-6)
    InvalidDayOfWeek,
    /// Invalid date of month (must be 1-31)
    InvalidDateOfMonth,
    /// The mask bits read from the chip do not form a supported alarm mode
    InvalidMaskCombination,
    /// A register value is not valid BCD
    DateTime(DS3231DateTimeError),
}

impl From<DS3231DateTimeError> for AlarmError {
    fn from(e: DS3231DateTimeError) -> Self {
        AlarmError::DateTime(e)
    }
}

/// The canonical periodic interrupts, all generated by alarm 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Periodicity {
    /// Fire every second
    EverySecond,
    /// Fire every minute at 00 seconds
    EveryMinute,
    /// Fire every hour at 00:00
    EveryHour,
}

impl From<Periodicity> for Alarm1Config {
    fn from(periodicity: Periodicity) -> Self {
        match periodicity {
            Periodicity::EverySecond => Alarm1Config::EverySecond,
            Periodicity::EveryMinute => Alarm1Config::AtSeconds { seconds: 0 },
            Periodicity::EveryHour => Alarm1Config::AtMinutesSeconds {
                minutes: 0,
                seconds: 0,
            },
        }
    }
}

/// Alarm 1 configurations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm1Config {
    /// Trigger every second
    EverySecond,
    /// Trigger when seconds match
    AtSeconds {
        /// Seconds value (0-59)
        seconds: u8,
    },
    /// Trigger when minutes and seconds match
    AtMinutesSeconds {
        /// Minutes value (0-59)
        minutes: u8,
        /// Seconds value (0-59)
        seconds: u8,
    },
    /// Trigger daily when hours, minutes and seconds match
    AtTime {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
        /// Seconds value (0-59)
        seconds: u8,
    },
    /// Trigger at a time on a date of the month
    AtTimeOnDate {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
        /// Seconds value (0-59)
        seconds: u8,
        /// Date of month (1-31)
        date: u8,
    },
    /// Trigger at a time on a day of the week
    AtTimeOnDay {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
        /// Seconds value (0-59)
        seconds: u8,
        /// Day of week (0-6, Sunday = 0)
        weekday: u8,
    },
}

/// Alarm 2 configurations. Alarm 2 has no seconds register and always fires
/// at 00 seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm2Config {
    /// Trigger every minute
    EveryMinute,
    /// Trigger when minutes match
    AtMinutes {
        /// Minutes value (0-59)
        minutes: u8,
    },
    /// Trigger daily when hours and minutes match
    AtTime {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
    },
    /// Trigger at a time on a date of the month
    AtTimeOnDate {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
        /// Date of month (1-31)
        date: u8,
    },
    /// Trigger at a time on a day of the week
    AtTimeOnDay {
        /// Hours value (0-23)
        hours: u8,
        /// Minutes value (0-59)
        minutes: u8,
        /// Day of week (0-6, Sunday = 0)
        weekday: u8,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DayMatch {
    Weekday(u8),
    Date(u8),
}

/// The fields an alarm compares. `None` is a masked field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct AlarmMatch {
    seconds: Option<u8>,
    minutes: Option<u8>,
    hours: Option<u8>,
    day: Option<DayMatch>,
}

impl AlarmMatch {
    fn validate(&self) -> Result<(), AlarmError> {
        if self.seconds.is_some_and(|s| s > 59) {
            return Err(AlarmError::InvalidTime("seconds must be 0-59"));
        }
        if self.minutes.is_some_and(|m| m > 59) {
            return Err(AlarmError::InvalidTime("minutes must be 0-59"));
        }
        if self.hours.is_some_and(|h| h > 23) {
            return Err(AlarmError::InvalidTime("hours must be 0-23"));
        }
        match self.day {
            Some(DayMatch::Weekday(weekday)) if weekday > 6 => Err(AlarmError::InvalidDayOfWeek),
            Some(DayMatch::Date(date)) if date == 0 || date > 31 => {
                Err(AlarmError::InvalidDateOfMonth)
            }
            _ => Ok(()),
        }
    }
}

fn encode_seconds(seconds: Option<u8>) -> Result<AlarmSeconds, AlarmError> {
    let mut value = AlarmSeconds::default();
    match seconds {
        None => value.set_alarm_mask1(true),
        Some(seconds) => {
            let (ones, tens) = make_bcd(seconds, 59)?;
            value.set_seconds(ones);
            value.set_ten_seconds(tens);
        }
    }
    Ok(value)
}

fn encode_minutes(minutes: Option<u8>) -> Result<AlarmMinutes, AlarmError> {
    let mut value = AlarmMinutes::default();
    match minutes {
        None => value.set_alarm_mask2(true),
        Some(minutes) => {
            let (ones, tens) = make_bcd(minutes, 59)?;
            value.set_minutes(ones);
            value.set_ten_minutes(tens);
        }
    }
    Ok(value)
}

fn encode_hours(hours: Option<u8>) -> Result<AlarmHours, AlarmError> {
    match hours {
        None => {
            let mut value = AlarmHours::default();
            value.set_alarm_mask3(true);
            Ok(value)
        }
        // Same layout as the time keeping hours register below the mask bit
        Some(hours) => Ok(AlarmHours::from(u8::from(DS3231DateTime::convert_hours(
            hours,
            TimeRepresentation::TwentyFourHour,
        )?))),
    }
}

fn encode_day(day: Option<DayMatch>) -> Result<AlarmDayDate, AlarmError> {
    let mut value = AlarmDayDate::default();
    match day {
        None => value.set_alarm_mask4(true),
        Some(DayMatch::Weekday(weekday)) => {
            if weekday > 6 {
                return Err(AlarmError::InvalidDayOfWeek);
            }
            value.set_day_date_select(DayDateSelect::Day);
            value.set_day_or_date(weekday + 1);
        }
        Some(DayMatch::Date(date)) => {
            if date == 0 {
                return Err(AlarmError::InvalidDateOfMonth);
            }
            let (ones, tens) = make_bcd(date, 31).map_err(|_| AlarmError::InvalidDateOfMonth)?;
            value.set_day_date_select(DayDateSelect::Date);
            value.set_day_or_date(ones);
            value.set_ten_date(tens);
        }
    }
    Ok(value)
}

fn decode_seconds(value: AlarmSeconds) -> Result<Option<u8>, AlarmError> {
    if value.alarm_mask1() {
        return Ok(None);
    }
    match join_bcd(value.seconds(), value.ten_seconds())? {
        seconds @ 0..=59 => Ok(Some(seconds)),
        _ => Err(AlarmError::InvalidTime("Invalid BCD seconds value")),
    }
}

fn decode_minutes(value: AlarmMinutes) -> Result<Option<u8>, AlarmError> {
    if value.alarm_mask2() {
        return Ok(None);
    }
    match join_bcd(value.minutes(), value.ten_minutes())? {
        minutes @ 0..=59 => Ok(Some(minutes)),
        _ => Err(AlarmError::InvalidTime("Invalid BCD minutes value")),
    }
}

fn decode_hours(value: AlarmHours) -> Result<Option<u8>, AlarmError> {
    if value.alarm_mask3() {
        return Ok(None);
    }
    let hours = Hours::from(u8::from(value) & 0x7F);
    DS3231DateTime::decode_hours(hours)
        .map(Some)
        .map_err(|_| AlarmError::InvalidTime("Invalid BCD hours value"))
}

fn decode_day(value: AlarmDayDate) -> Result<Option<DayMatch>, AlarmError> {
    if value.alarm_mask4() {
        return Ok(None);
    }
    match value.day_date_select() {
        DayDateSelect::Day => match value.day_or_date() {
            day @ 1..=7 => Ok(Some(DayMatch::Weekday(day - 1))),
            _ => Err(AlarmError::InvalidDayOfWeek),
        },
        DayDateSelect::Date => match join_bcd(value.day_or_date(), value.ten_date()) {
            Ok(date @ 1..=31) => Ok(Some(DayMatch::Date(date))),
            _ => Err(AlarmError::InvalidDateOfMonth),
        },
    }
}

impl Alarm1Config {
    /// Validates the alarm configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any time component is out of valid range.
    pub fn validate(&self) -> Result<(), AlarmError> {
        self.to_match().validate()
    }

    fn to_match(self) -> AlarmMatch {
        match self {
            Alarm1Config::EverySecond => AlarmMatch::default(),
            Alarm1Config::AtSeconds { seconds } => AlarmMatch {
                seconds: Some(seconds),
                ..AlarmMatch::default()
            },
            Alarm1Config::AtMinutesSeconds { minutes, seconds } => AlarmMatch {
                seconds: Some(seconds),
                minutes: Some(minutes),
                ..AlarmMatch::default()
            },
            Alarm1Config::AtTime {
                hours,
                minutes,
                seconds,
            } => AlarmMatch {
                seconds: Some(seconds),
                minutes: Some(minutes),
                hours: Some(hours),
                day: None,
            },
            Alarm1Config::AtTimeOnDate {
                hours,
                minutes,
                seconds,
                date,
            } => AlarmMatch {
                seconds: Some(seconds),
                minutes: Some(minutes),
                hours: Some(hours),
                day: Some(DayMatch::Date(date)),
            },
            Alarm1Config::AtTimeOnDay {
                hours,
                minutes,
                seconds,
                weekday,
            } => AlarmMatch {
                seconds: Some(seconds),
                minutes: Some(minutes),
                hours: Some(hours),
                day: Some(DayMatch::Weekday(weekday)),
            },
        }
    }

    fn from_match(fields: AlarmMatch) -> Result<Self, AlarmError> {
        match (fields.seconds, fields.minutes, fields.hours, fields.day) {
            (None, None, None, None) => Ok(Alarm1Config::EverySecond),
            (Some(seconds), None, None, None) => Ok(Alarm1Config::AtSeconds { seconds }),
            (Some(seconds), Some(minutes), None, None) => {
                Ok(Alarm1Config::AtMinutesSeconds { minutes, seconds })
            }
            (Some(seconds), Some(minutes), Some(hours), None) => Ok(Alarm1Config::AtTime {
                hours,
                minutes,
                seconds,
            }),
            (Some(seconds), Some(minutes), Some(hours), Some(DayMatch::Date(date))) => {
                Ok(Alarm1Config::AtTimeOnDate {
                    hours,
                    minutes,
                    seconds,
                    date,
                })
            }
            (Some(seconds), Some(minutes), Some(hours), Some(DayMatch::Weekday(weekday))) => {
                Ok(Alarm1Config::AtTimeOnDay {
                    hours,
                    minutes,
                    seconds,
                    weekday,
                })
            }
            _ => Err(AlarmError::InvalidMaskCombination),
        }
    }
}

impl Alarm2Config {
    /// Validates the alarm configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any time component is out of valid range.
    pub fn validate(&self) -> Result<(), AlarmError> {
        self.to_match().validate()
    }

    fn to_match(self) -> AlarmMatch {
        match self {
            Alarm2Config::EveryMinute => AlarmMatch::default(),
            Alarm2Config::AtMinutes { minutes } => AlarmMatch {
                minutes: Some(minutes),
                ..AlarmMatch::default()
            },
            Alarm2Config::AtTime { hours, minutes } => AlarmMatch {
                minutes: Some(minutes),
                hours: Some(hours),
                ..AlarmMatch::default()
            },
            Alarm2Config::AtTimeOnDate {
                hours,
                minutes,
                date,
            } => AlarmMatch {
                seconds: None,
                minutes: Some(minutes),
                hours: Some(hours),
                day: Some(DayMatch::Date(date)),
            },
            Alarm2Config::AtTimeOnDay {
                hours,
                minutes,
                weekday,
            } => AlarmMatch {
                seconds: None,
                minutes: Some(minutes),
                hours: Some(hours),
                day: Some(DayMatch::Weekday(weekday)),
            },
        }
    }

    fn from_match(fields: AlarmMatch) -> Result<Self, AlarmError> {
        match (fields.minutes, fields.hours, fields.day) {
            (None, None, None) => Ok(Alarm2Config::EveryMinute),
            (Some(minutes), None, None) => Ok(Alarm2Config::AtMinutes { minutes }),
            (Some(minutes), Some(hours), None) => Ok(Alarm2Config::AtTime { hours, minutes }),
            (Some(minutes), Some(hours), Some(DayMatch::Date(date))) => {
                Ok(Alarm2Config::AtTimeOnDate {
                    hours,
                    minutes,
                    date,
                })
            }
            (Some(minutes), Some(hours), Some(DayMatch::Weekday(weekday))) => {
                Ok(Alarm2Config::AtTimeOnDay {
                    hours,
                    minutes,
                    weekday,
                })
            }
            _ => Err(AlarmError::InvalidMaskCombination),
        }
    }
}

/// Register values of alarm 1 (0x07-0x0A).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DS3231Alarm1 {
    seconds: AlarmSeconds,
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm1 {
    /// Encodes an `Alarm1Config` into register values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration contains out-of-range values.
    pub fn from_config(config: &Alarm1Config) -> Result<Self, AlarmError> {
        let fields = config.to_match();
        fields.validate()?;
        Ok(Self {
            seconds: encode_seconds(fields.seconds)?,
            minutes: encode_minutes(fields.minutes)?,
            hours: encode_hours(fields.hours)?,
            day_date: encode_day(fields.day)?,
        })
    }

    /// Decodes the register values back into an `Alarm1Config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is not valid BCD or the mask bits do not
    /// form one of the supported alarm modes.
    pub fn to_config(&self) -> Result<Alarm1Config, AlarmError> {
        Alarm1Config::from_match(AlarmMatch {
            seconds: decode_seconds(self.seconds)?,
            minutes: decode_minutes(self.minutes)?,
            hours: decode_hours(self.hours)?,
            day: decode_day(self.day_date)?,
        })
    }

    /// Gets the alarm seconds register
    #[must_use]
    pub fn seconds(&self) -> AlarmSeconds {
        self.seconds
    }

    /// Gets the alarm minutes register
    #[must_use]
    pub fn minutes(&self) -> AlarmMinutes {
        self.minutes
    }

    /// Gets the alarm hours register
    #[must_use]
    pub fn hours(&self) -> AlarmHours {
        self.hours
    }

    /// Gets the alarm day/date register
    #[must_use]
    pub fn day_date(&self) -> AlarmDayDate {
        self.day_date
    }
}

impl From<[u8; 4]> for DS3231Alarm1 {
    fn from(data: [u8; 4]) -> Self {
        Self {
            seconds: AlarmSeconds(data[0]),
            minutes: AlarmMinutes(data[1]),
            hours: AlarmHours(data[2]),
            day_date: AlarmDayDate(data[3]),
        }
    }
}

impl From<&DS3231Alarm1> for [u8; 4] {
    fn from(alarm: &DS3231Alarm1) -> [u8; 4] {
        [
            alarm.seconds.0,
            alarm.minutes.0,
            alarm.hours.0,
            alarm.day_date.0,
        ]
    }
}

/// Register values of alarm 2 (0x0B-0x0D).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DS3231Alarm2 {
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm2 {
    /// Encodes an `Alarm2Config` into register values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration contains out-of-range values.
    pub fn from_config(config: &Alarm2Config) -> Result<Self, AlarmError> {
        let fields = config.to_match();
        fields.validate()?;
        Ok(Self {
            minutes: encode_minutes(fields.minutes)?,
            hours: encode_hours(fields.hours)?,
            day_date: encode_day(fields.day)?,
        })
    }

    /// Decodes the register values back into an `Alarm2Config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is not valid BCD or the mask bits do not
    /// form one of the supported alarm modes.
    pub fn to_config(&self) -> Result<Alarm2Config, AlarmError> {
        Alarm2Config::from_match(AlarmMatch {
            seconds: None,
            minutes: decode_minutes(self.minutes)?,
            hours: decode_hours(self.hours)?,
            day: decode_day(self.day_date)?,
        })
    }

    /// Gets the alarm minutes register
    #[must_use]
    pub fn minutes(&self) -> AlarmMinutes {
        self.minutes
    }

    /// Gets the alarm hours register
    #[must_use]
    pub fn hours(&self) -> AlarmHours {
        self.hours
    }

    /// Gets the alarm day/date register
    #[must_use]
    pub fn day_date(&self) -> AlarmDayDate {
        self.day_date
    }
}

impl From<[u8; 3]> for DS3231Alarm2 {
    fn from(data: [u8; 3]) -> Self {
        Self {
            minutes: AlarmMinutes(data[0]),
            hours: AlarmHours(data[1]),
            day_date: AlarmDayDate(data[2]),
        }
    }
}

impl From<&DS3231Alarm2> for [u8; 3] {
    fn from(alarm: &DS3231Alarm2) -> [u8; 3] {
        [alarm.minutes.0, alarm.hours.0, alarm.day_date.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm1_bytes(config: Alarm1Config) -> [u8; 4] {
        (&DS3231Alarm1::from_config(&config).unwrap()).into()
    }

    fn alarm2_bytes(config: Alarm2Config) -> [u8; 3] {
        (&DS3231Alarm2::from_config(&config).unwrap()).into()
    }

    #[test]
    fn test_periodicity_mask_patterns() {
        assert_eq!(
            alarm1_bytes(Periodicity::EverySecond.into()),
            [0x80, 0x80, 0x80, 0x80]
        );
        assert_eq!(
            alarm1_bytes(Periodicity::EveryMinute.into()),
            [0x00, 0x80, 0x80, 0x80]
        );
        // Minutes and seconds must match, hours and day are ignored
        assert_eq!(
            alarm1_bytes(Periodicity::EveryHour.into()),
            [0x00, 0x00, 0x80, 0x80]
        );
    }

    #[test]
    fn test_every_hour_mask_bits() {
        let alarm = DS3231Alarm1::from_config(&Periodicity::EveryHour.into()).unwrap();
        assert!(!alarm.seconds().alarm_mask1());
        assert!(!alarm.minutes().alarm_mask2());
        assert!(alarm.hours().alarm_mask3());
        assert!(alarm.day_date().alarm_mask4());
    }

    #[test]
    fn test_daily_alarm_bytes() {
        assert_eq!(
            alarm1_bytes(Alarm1Config::AtTime {
                hours: 14,
                minutes: 30,
                seconds: 5
            }),
            [0x05, 0x30, 0x14, 0x80]
        );
        assert_eq!(
            alarm1_bytes(Alarm1Config::AtTime {
                hours: 23,
                minutes: 59,
                seconds: 59
            }),
            [0x59, 0x59, 0x23, 0x80]
        );
    }

    #[test]
    fn test_date_and_day_alarm_bytes() {
        assert_eq!(
            alarm1_bytes(Alarm1Config::AtTimeOnDate {
                hours: 8,
                minutes: 0,
                seconds: 0,
                date: 31
            }),
            [0x00, 0x00, 0x08, 0x31]
        );
        // Friday is stored as day 6 with DY/DT set
        assert_eq!(
            alarm1_bytes(Alarm1Config::AtTimeOnDay {
                hours: 8,
                minutes: 0,
                seconds: 0,
                weekday: 5
            }),
            [0x00, 0x00, 0x08, 0x46]
        );
        assert_eq!(alarm2_bytes(Alarm2Config::EveryMinute), [0x80, 0x80, 0x80]);
        assert_eq!(
            alarm2_bytes(Alarm2Config::AtTimeOnDay {
                hours: 20,
                minutes: 15,
                weekday: 0
            }),
            [0x15, 0x20, 0x41]
        );
    }

    #[test]
    fn test_alarm1_round_trip() {
        let configs = [
            Alarm1Config::EverySecond,
            Alarm1Config::AtSeconds { seconds: 30 },
            Alarm1Config::AtMinutesSeconds {
                minutes: 15,
                seconds: 45,
            },
            Alarm1Config::AtTime {
                hours: 9,
                minutes: 30,
                seconds: 0,
            },
            Alarm1Config::AtTimeOnDate {
                hours: 12,
                minutes: 0,
                seconds: 0,
                date: 15,
            },
            Alarm1Config::AtTimeOnDay {
                hours: 18,
                minutes: 45,
                seconds: 30,
                weekday: 6,
            },
        ];
        for config in configs {
            let alarm = DS3231Alarm1::from_config(&config).unwrap();
            let bytes: [u8; 4] = (&alarm).into();
            assert_eq!(DS3231Alarm1::from(bytes).to_config().unwrap(), config);
        }
    }

    #[test]
    fn test_alarm2_round_trip() {
        let configs = [
            Alarm2Config::EveryMinute,
            Alarm2Config::AtMinutes { minutes: 30 },
            Alarm2Config::AtTime {
                hours: 14,
                minutes: 30,
            },
            Alarm2Config::AtTimeOnDate {
                hours: 8,
                minutes: 15,
                date: 25,
            },
            Alarm2Config::AtTimeOnDay {
                hours: 20,
                minutes: 0,
                weekday: 3,
            },
        ];
        for config in configs {
            let alarm = DS3231Alarm2::from_config(&config).unwrap();
            assert_eq!(alarm.to_config().unwrap(), config);
        }
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            Alarm1Config::AtSeconds { seconds: 60 }.validate(),
            Err(AlarmError::InvalidTime("seconds must be 0-59"))
        );
        assert_eq!(
            Alarm1Config::AtMinutesSeconds {
                minutes: 60,
                seconds: 0
            }
            .validate(),
            Err(AlarmError::InvalidTime("minutes must be 0-59"))
        );
        assert_eq!(
            Alarm1Config::AtTime {
                hours: 24,
                minutes: 0,
                seconds: 0
            }
            .validate(),
            Err(AlarmError::InvalidTime("hours must be 0-23"))
        );
        assert_eq!(
            Alarm1Config::AtTimeOnDay {
                hours: 0,
                minutes: 0,
                seconds: 0,
                weekday: 7
            }
            .validate(),
            Err(AlarmError::InvalidDayOfWeek)
        );
        assert_eq!(
            Alarm2Config::AtTimeOnDate {
                hours: 0,
                minutes: 0,
                date: 0
            }
            .validate(),
            Err(AlarmError::InvalidDateOfMonth)
        );
        assert_eq!(
            DS3231Alarm2::from_config(&Alarm2Config::AtTimeOnDate {
                hours: 0,
                minutes: 0,
                date: 32
            }),
            Err(AlarmError::InvalidDateOfMonth)
        );
        assert!(Alarm1Config::from(Periodicity::EveryHour).validate().is_ok());
    }

    #[test]
    fn test_unsupported_mask_combination() {
        // Seconds ignored while minutes must match
        let alarm = DS3231Alarm1::from([0x80, 0x00, 0x80, 0x80]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidMaskCombination));
        // Day matched while hours are ignored
        let alarm = DS3231Alarm2::from([0x00, 0x80, 0x01]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidMaskCombination));
    }

    #[test]
    fn test_decode_twelve_hour_alarm() {
        // 2 PM written in 12-hour mode
        let alarm = DS3231Alarm1::from([0x00, 0x30, 0x62, 0x80]);
        assert_eq!(
            alarm.to_config().unwrap(),
            Alarm1Config::AtTime {
                hours: 14,
                minutes: 30,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_decode_invalid_registers() {
        let alarm = DS3231Alarm1::from([0x6A, 0x80, 0x80, 0x80]);
        assert!(alarm.to_config().is_err());
        let alarm = DS3231Alarm1::from([0x00, 0x00, 0x00, 0x40]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidDayOfWeek));
        let alarm = DS3231Alarm1::from([0x00, 0x00, 0x00, 0x00]);
        assert_eq!(alarm.to_config(), Err(AlarmError::InvalidDateOfMonth));
    }
}
