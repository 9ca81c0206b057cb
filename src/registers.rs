//! Register map and bitfield views of the DS3231.
//!
//! Each register is a single byte. The time keeping and alarm registers hold
//! BCD digits (see [`crate::bcd`]); the bitfield types below expose those
//! digits and the flag bits that share the byte with them.

use bitfield::bitfield;

/// Default I2C address of the DS3231.
pub const DS3231_ADDRESS: u8 = 0x68;

/// Register addresses for the DS3231 RTC.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Seconds register (0-59)
    Seconds = 0x00,
    /// Minutes register (0-59)
    Minutes = 0x01,
    /// Hours register (1-12 + AM/PM or 0-23)
    Hours = 0x02,
    /// Day of week register (1-7)
    Day = 0x03,
    /// Date register (1-31)
    Date = 0x04,
    /// Month register (1-12) and century flag
    Month = 0x05,
    /// Year register (0-99)
    Year = 0x06,
    /// Alarm 1 seconds register
    Alarm1Seconds = 0x07,
    /// Alarm 1 minutes register
    Alarm1Minutes = 0x08,
    /// Alarm 1 hours register
    Alarm1Hours = 0x09,
    /// Alarm 1 day/date register
    Alarm1DayDate = 0x0A,
    /// Alarm 2 minutes register
    Alarm2Minutes = 0x0B,
    /// Alarm 2 hours register
    Alarm2Hours = 0x0C,
    /// Alarm 2 day/date register
    Alarm2DayDate = 0x0D,
    /// Control register
    Control = 0x0E,
    /// Control/Status register
    ControlStatus = 0x0F,
    /// Aging offset register
    AgingOffset = 0x10,
    /// Temperature MSB register
    MSBTemp = 0x11,
    /// Temperature LSB register
    LSBTemp = 0x12,
}

impl From<RegAddr> for u8 {
    fn from(register: RegAddr) -> Self {
        register as u8
    }
}

// Declares a field enum along with its conversions from and to the raw bits.
// Bits outside `$mask` are ignored when converting from a register value, so
// the conversion is total.
macro_rules! register_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $mask:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl From<u8> for $name {
            fn from(v: u8) -> Self {
                match v & $mask {
                    $($value => $name::$variant,)+
                    _ => unreachable!(),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> Self {
                v as u8
            }
        }
    };
}

register_enum! {
    /// Time representation of the hours registers.
    pub enum TimeRepresentation: 0b1 {
        /// 24-hour format (0-23)
        TwentyFourHour = 0,
        /// 12-hour format (1-12 + AM/PM)
        TwelveHour = 1,
    }
}

register_enum! {
    /// Oscillator control (the EOSC bit, active low).
    pub enum Oscillator: 0b1 {
        /// Oscillator runs on battery power
        Enabled = 0,
        /// Oscillator stops when switched to battery power
        Disabled = 1,
    }
}

register_enum! {
    /// Function of the INT/SQW pin.
    pub enum InterruptControl: 0b1 {
        /// Output square wave on INT/SQW pin
        SquareWave = 0,
        /// Output alarm interrupts on INT/SQW pin
        Interrupt = 1,
    }
}

register_enum! {
    /// Square wave output frequency.
    pub enum SquareWaveFrequency: 0b11 {
        /// 1 Hz square wave output
        Hz1 = 0b00,
        /// 1.024 kHz square wave output
        Hz1024 = 0b01,
        /// 4.096 kHz square wave output
        Hz4096 = 0b10,
        /// 8.192 kHz square wave output
        Hz8192 = 0b11,
    }
}

register_enum! {
    /// Day/Date select for alarm registers (DY/DT bit).
    ///
    /// This controls whether the alarm day/date register matches against
    /// the day of the week or the date of the month.
    pub enum DayDateSelect: 0b1 {
        /// Match against date of the month (1-31)
        Date = 0,
        /// Match against day of the week
        Day = 1,
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ident) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                $typ(v)
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
        #[cfg(feature = "defmt")]
        impl defmt::Format for $typ {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{}({=u8:#x})", stringify!($typ), self.0);
            }
        }
    };
}

bitfield! {
    /// Seconds register (0-59).
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Seconds(u8);
    impl Debug;
    /// Tens place of seconds (0-5)
    pub ten_seconds, set_ten_seconds: 6, 4;
    /// Ones place of seconds (0-9)
    pub seconds, set_seconds: 3, 0;
}
from_register_u8!(Seconds);

bitfield! {
    /// Minutes register (0-59).
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Minutes(u8);
    impl Debug;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(Minutes);

bitfield! {
    /// Hours register with 12/24 hour selection.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Hours(u8);
    impl Debug;
    /// Time representation format (12/24 hour)
    pub from into TimeRepresentation, time_representation, set_time_representation: 6, 6;
    /// PM flag (12-hour) or 20-hour digit (24-hour)
    pub pm_or_twenty_hours, set_pm_or_twenty_hours: 5, 5;
    /// 10-hour digit
    pub ten_hours, set_ten_hours: 4, 4;
    /// Ones place of hours
    pub hours, set_hours: 3, 0;
}
from_register_u8!(Hours);

bitfield! {
    /// Day of week register. The chip counts 1-7 and wraps from 7 to 1.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Day(u8);
    impl Debug;
    /// Day of week (1-7, 1 = Sunday)
    pub day, set_day: 2, 0;
}
from_register_u8!(Day);

bitfield! {
    /// Date register (1-31).
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Date(u8);
    impl Debug;
    /// Tens place of date (0-3)
    pub ten_date, set_ten_date: 5, 4;
    /// Ones place of date (0-9)
    pub date, set_date: 3, 0;
}
from_register_u8!(Date);

bitfield! {
    /// Month register (1-12) with century flag.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Month(u8);
    impl Debug;
    /// Century flag, toggled by the chip when the year wraps from 99 to 00
    pub century, set_century: 7;
    /// Tens place of month (0-1)
    pub ten_month, set_ten_month: 4, 4;
    /// Ones place of month (0-9)
    pub month, set_month: 3, 0;
}
from_register_u8!(Month);

bitfield! {
    /// Year register (0-99).
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Year(u8);
    impl Debug;
    /// Tens place of year (0-9)
    pub ten_year, set_ten_year: 7, 4;
    /// Ones place of year (0-9)
    pub year, set_year: 3, 0;
}
from_register_u8!(Year);

bitfield! {
    /// Control register.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Control(u8);
    impl Debug;
    /// Oscillator enable/disable control
    pub from into Oscillator, oscillator_enable, set_oscillator_enable: 7, 7;
    /// Enable square wave output on battery power
    pub battery_backed_square_wave, set_battery_backed_square_wave: 6;
    /// Start a temperature conversion; reads back set until it completes
    pub convert_temperature, set_convert_temperature: 5;
    /// Square wave output frequency selection
    pub from into SquareWaveFrequency, square_wave_frequency, set_square_wave_frequency: 4, 3;
    /// INT/SQW pin function control
    pub from into InterruptControl, interrupt_control, set_interrupt_control: 2, 2;
    /// Enable alarm 2 interrupt
    pub alarm2_interrupt_enable, set_alarm2_interrupt_enable: 1;
    /// Enable alarm 1 interrupt
    pub alarm1_interrupt_enable, set_alarm1_interrupt_enable: 0;
}
from_register_u8!(Control);

bitfield! {
    /// Status register.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Status(u8);
    impl Debug;
    /// Oscillator stop flag
    pub oscillator_stop_flag, set_oscillator_stop_flag: 7;
    /// Enable 32kHz output
    pub enable_32khz_output, set_enable_32khz_output: 3;
    /// Temperature conversion in progress
    pub busy, set_busy: 2;
    /// Alarm 2 triggered flag
    pub alarm2_flag, set_alarm2_flag: 1;
    /// Alarm 1 triggered flag
    pub alarm1_flag, set_alarm1_flag: 0;
}
from_register_u8!(Status);

bitfield! {
    /// Aging offset register, in two's complement.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AgingOffset(u8);
    impl Debug;
    /// Aging offset value (-128 to +127)
    pub i8, aging_offset, set_aging_offset: 7, 0;
}
from_register_u8!(AgingOffset);

bitfield! {
    /// Temperature register, integer degrees Celsius in two's complement.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Temperature(u8);
    impl Debug;
    /// Integer part (-128 to +127)
    pub i8, temperature, set_temperature: 7, 0;
}
from_register_u8!(Temperature);

bitfield! {
    /// Temperature fraction register; only the top two bits are used.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct TemperatureFraction(u8);
    impl Debug;
    /// Quarter degrees (0-3)
    pub temperature_fraction, set_temperature_fraction: 7, 6;
}
from_register_u8!(TemperatureFraction);

impl Temperature {
    /// Combines the integer and fraction registers into quarter degrees.
    ///
    /// The two registers form one 10-bit two's complement value, so -0.25 °C
    /// reads as `0xFF`/`0xC0` (-1 + 0.75).
    #[must_use]
    pub fn quarter_degrees(self, fraction: TemperatureFraction) -> i16 {
        i16::from(self.temperature()) * 4 + i16::from(fraction.temperature_fraction())
    }

    /// Combines the integer and fraction registers into degrees Celsius.
    #[must_use]
    pub fn celsius(self, fraction: TemperatureFraction) -> f32 {
        f32::from(self.temperature()) + f32::from(fraction.temperature_fraction()) * 0.25
    }
}

bitfield! {
    /// Alarm seconds register with mask bit (alarm 1 only).
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AlarmSeconds(u8);
    impl Debug;
    /// Alarm mask bit 1 (A1M1), set when seconds are ignored
    pub alarm_mask1, set_alarm_mask1: 7;
    /// Tens place of seconds (0-5)
    pub ten_seconds, set_ten_seconds: 6, 4;
    /// Ones place of seconds (0-9)
    pub seconds, set_seconds: 3, 0;
}
from_register_u8!(AlarmSeconds);

bitfield! {
    /// Alarm minutes register with mask bit.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AlarmMinutes(u8);
    impl Debug;
    /// Alarm mask bit 2 (A1M2/A2M2), set when minutes are ignored
    pub alarm_mask2, set_alarm_mask2: 7;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(AlarmMinutes);

bitfield! {
    /// Alarm hours register with mask bit and 12/24 hour selection.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AlarmHours(u8);
    impl Debug;
    /// Alarm mask bit 3 (A1M3/A2M3), set when hours are ignored
    pub alarm_mask3, set_alarm_mask3: 7;
    /// Time representation format (12/24 hour)
    pub from into TimeRepresentation, time_representation, set_time_representation: 6, 6;
    /// PM flag (12-hour) or 20-hour digit (24-hour)
    pub pm_or_twenty_hours, set_pm_or_twenty_hours: 5, 5;
    /// 10-hour digit
    pub ten_hours, set_ten_hours: 4, 4;
    /// Ones place of hours
    pub hours, set_hours: 3, 0;
}
from_register_u8!(AlarmHours);

bitfield! {
    /// Alarm day/date register with mask bit and DY/DT select.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AlarmDayDate(u8);
    impl Debug;
    /// Alarm mask bit 4 (A1M4/A2M4), set when day and date are ignored
    pub alarm_mask4, set_alarm_mask4: 7;
    /// Day/Date select (1=day of week, 0=date of month)
    pub from into DayDateSelect, day_date_select, set_day_date_select: 6, 6;
    /// Tens place of date (0-3) when DY/DT=0, unused when DY/DT=1
    pub ten_date, set_ten_date: 5, 4;
    /// Day of week (1-7) when DY/DT=1, ones place of date when DY/DT=0
    pub day_or_date, set_day_or_date: 3, 0;
}
from_register_u8!(AlarmDayDate);
