//! # DS3231 Real-Time Clock Driver
//!
//! A platform-agnostic `no_std` driver for the DS3231 real-time clock, built
//! on the `embedded-hal` I2C traits.
//!
//! The driver keeps time as an [`RtcDateTime`], a compact calendar value for
//! 2000-01-01 through 2099-12-31 that converts to and from seconds since
//! 2000 and Unix timestamps without any allocation.
//!
//! ## Features
//!
//! - Read and set the current date and time (one burst transaction each)
//! - Set the time from a Unix timestamp
//! - Periodic (every second, minute or hour) and daily alarm interrupts
//! - General alarm 1 and alarm 2 configuration
//! - Temperature conversion and reading in quarter degrees
//! - Typed access to the control, status, hours and aging registers
//! - Optional async driver (feature `async`)
//! - Optional logging through `log` or `defmt`
//!
//! ## Example
//!
//! ```rust,ignore
//! use ds3231_clock::{DS3231, DS3231_ADDRESS, Periodicity, RtcDateTime};
//!
//! let mut rtc = DS3231::new(i2c, DS3231_ADDRESS);
//!
//! rtc.set_datetime(&RtcDateTime::new(2024, 6, 15, 14, 30, 0))?;
//! rtc.enable_interrupts(Periodicity::EveryMinute)?;
//!
//! let now = rtc.now()?;
//! let celsius = rtc.temperature()?;
//! ```
//!
//! ## Cargo features
//!
//! - `async`: adds `asynch::DS3231` using `embedded-hal-async`
//! - `log`: log through the `log` crate
//! - `defmt`: log through `defmt` and derive `defmt::Format` on public types
#![no_std]

#[macro_use]
mod fmt;

pub mod alarm;
#[cfg(feature = "async")]
pub mod asynch;
pub mod bcd;
mod calendar;
mod datetime;
mod registers;

use embedded_hal::i2c::I2c;
use paste::paste;

pub use alarm::{
    Alarm1Config, Alarm2Config, AlarmError, DS3231Alarm1, DS3231Alarm2, Periodicity,
};
pub use calendar::{RtcDateTime, UNIX_EPOCH_OFFSET};
pub use datetime::DS3231DateTimeError;
pub use registers::*;

use datetime::DS3231DateTime;

/// Configuration for the DS3231.
///
/// The default matches the chip's power-on state: 24-hour mode, 8.192 kHz
/// square wave, INT/SQW pin driven by the alarms, no square wave on battery,
/// oscillator running.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Time representation (12/24 hour)
    pub time_representation: TimeRepresentation,
    /// Square wave output frequency
    pub square_wave_frequency: SquareWaveFrequency,
    /// Interrupt control mode
    pub interrupt_control: InterruptControl,
    /// Enable square wave output on battery power
    pub battery_backed_square_wave: bool,
    /// Oscillator enable/disable on battery power
    pub oscillator_enable: Oscillator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_representation: TimeRepresentation::TwentyFourHour,
            square_wave_frequency: SquareWaveFrequency::Hz8192,
            interrupt_control: InterruptControl::Interrupt,
            battery_backed_square_wave: false,
            oscillator_enable: Oscillator::Enabled,
        }
    }
}

/// Error type for DS3231 operations.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DS3231Error<I2CE> {
    /// I2C bus error
    I2c(I2CE),
    /// Date/time could not be encoded or decoded
    DateTime(DS3231DateTimeError),
    /// Alarm configuration could not be encoded or decoded
    Alarm(AlarmError),
}

impl<I2CE> From<I2CE> for DS3231Error<I2CE> {
    fn from(e: I2CE) -> Self {
        DS3231Error::I2c(e)
    }
}

/// DS3231 Real-Time Clock driver.
///
/// Every operation is a single short I2C exchange, or a read-modify-write of
/// one register. Nothing is retried: the first bus error is returned.
pub struct DS3231<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> DS3231<I2C> {
    /// Creates a new DS3231 driver instance.
    ///
    /// No bus traffic happens until the first operation, and the driver keeps
    /// no copy of chip state between operations.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus implementation
    /// * `address` - The I2C address of the device (typically [`DS3231_ADDRESS`])
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Destroys the driver and returns the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Reads a single register.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] if the bus transaction fails.
    pub fn read_register(&mut self, register: RegAddr) -> Result<u8, DS3231Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[register.into()], &mut data)?;
        Ok(data[0])
    }

    /// Writes a single register.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] if the bus transaction fails.
    pub fn write_register(
        &mut self,
        register: RegAddr,
        value: u8,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.i2c.write(self.address, &[register.into(), value])?;
        Ok(())
    }

    /// Configures the device according to the provided configuration.
    ///
    /// Changing the time representation rewrites the seven time keeping
    /// registers in one burst with the hour re-encoded, so the clock keeps the
    /// same time of day. Nothing is written when the chip is already in the
    /// requested mode.
    ///
    /// # Arguments
    /// * `config` - The configuration to apply
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure and
    /// [`DS3231Error::DateTime`] if the hours register holds garbage.
    pub fn configure(&mut self, config: &Config) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_oscillator_enable(config.oscillator_enable);
        control.set_battery_backed_square_wave(config.battery_backed_square_wave);
        control.set_square_wave_frequency(config.square_wave_frequency);
        control.set_interrupt_control(config.interrupt_control);
        debug!("writing control: {:?}", control);
        self.set_control(control)?;

        // Whole frame: a rollover between read and write costs at most the gap
        let raw = self.read_raw_datetime()?;
        if raw.time_representation() != config.time_representation {
            let raw = raw
                .with_time_representation(config.time_representation)
                .map_err(DS3231Error::DateTime)?;
            debug!("switching to {:?}", config.time_representation);
            self.write_raw_datetime(&raw)?;
        }
        Ok(())
    }

    fn read_raw_datetime(&mut self) -> Result<DS3231DateTime, DS3231Error<I2C::Error>> {
        let mut data = [0; 7];
        self.i2c
            .write_read(self.address, &[RegAddr::Seconds.into()], &mut data)?;
        debug!("read datetime registers: {:?}", data);
        Ok(data.into())
    }

    fn write_raw_datetime(
        &mut self,
        datetime: &DS3231DateTime,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 7] = datetime.into();
        self.i2c.write(
            self.address,
            &[
                RegAddr::Seconds.into(),
                data[0],
                data[1],
                data[2],
                data[3],
                data[4],
                data[5],
                data[6],
            ],
        )?;
        Ok(())
    }

    /// Gets the current date and time from the device.
    ///
    /// All seven time keeping registers are read in one transaction, so the
    /// value cannot tear across a rollover.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure and
    /// [`DS3231Error::DateTime`] if the registers do not hold a valid time.
    pub fn now(&mut self) -> Result<RtcDateTime, DS3231Error<I2C::Error>> {
        let raw = self.read_raw_datetime()?;
        raw.into_datetime().map_err(DS3231Error::DateTime)
    }

    /// Sets the current date and time on the device.
    ///
    /// The hours register is read first and the hour is encoded in the
    /// chip's current 12/24-hour mode. All seven registers are then written
    /// in one burst starting with seconds at 0x00, in address order: seconds,
    /// minutes, hours, day, date, month, year. The day register is written
    /// from [`RtcDateTime::weekday`].
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::DateTime`] if a field is out of range, in which
    /// case nothing is written, and [`DS3231Error::I2c`] on bus failure.
    pub fn set_datetime(&mut self, datetime: &RtcDateTime) -> Result<(), DS3231Error<I2C::Error>> {
        let raw = DS3231DateTime::from_datetime(datetime, TimeRepresentation::TwentyFourHour)
            .map_err(DS3231Error::DateTime)?;
        let time_representation = self.hour()?.time_representation();
        let raw = raw
            .with_time_representation(time_representation)
            .map_err(DS3231Error::DateTime)?;
        self.write_raw_datetime(&raw)
    }

    /// Sets the current date and time from a Unix timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::DateTime`] for timestamps outside 2000-2099 and
    /// [`DS3231Error::I2c`] on bus failure.
    pub fn set_epoch(&mut self, timestamp: u32) -> Result<(), DS3231Error<I2C::Error>> {
        let datetime = RtcDateTime::from_unix_timestamp(timestamp).map_err(DS3231Error::DateTime)?;
        self.set_datetime(&datetime)
    }

    /// Writes the alarm 1 registers.
    ///
    /// The interrupt enables in the control register are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::Alarm`] for an invalid configuration and
    /// [`DS3231Error::I2c`] on bus failure.
    pub fn set_alarm1(&mut self, config: &Alarm1Config) -> Result<(), DS3231Error<I2C::Error>> {
        let alarm = DS3231Alarm1::from_config(config).map_err(DS3231Error::Alarm)?;
        let data: [u8; 4] = (&alarm).into();
        debug!("writing alarm1 registers: {:?}", data);
        self.i2c.write(
            self.address,
            &[RegAddr::Alarm1Seconds.into(), data[0], data[1], data[2], data[3]],
        )?;
        Ok(())
    }

    /// Reads the alarm 1 registers.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::Alarm`] if the registers do not hold a
    /// supported alarm and [`DS3231Error::I2c`] on bus failure.
    pub fn alarm1(&mut self) -> Result<Alarm1Config, DS3231Error<I2C::Error>> {
        let mut data = [0; 4];
        self.i2c
            .write_read(self.address, &[RegAddr::Alarm1Seconds.into()], &mut data)?;
        DS3231Alarm1::from(data)
            .to_config()
            .map_err(DS3231Error::Alarm)
    }

    /// Writes the alarm 2 registers.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::Alarm`] for an invalid configuration and
    /// [`DS3231Error::I2c`] on bus failure.
    pub fn set_alarm2(&mut self, config: &Alarm2Config) -> Result<(), DS3231Error<I2C::Error>> {
        let alarm = DS3231Alarm2::from_config(config).map_err(DS3231Error::Alarm)?;
        let data: [u8; 3] = (&alarm).into();
        debug!("writing alarm2 registers: {:?}", data);
        self.i2c.write(
            self.address,
            &[RegAddr::Alarm2Minutes.into(), data[0], data[1], data[2]],
        )?;
        Ok(())
    }

    /// Reads the alarm 2 registers.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::Alarm`] if the registers do not hold a
    /// supported alarm and [`DS3231Error::I2c`] on bus failure.
    pub fn alarm2(&mut self) -> Result<Alarm2Config, DS3231Error<I2C::Error>> {
        let mut data = [0; 3];
        self.i2c
            .write_read(self.address, &[RegAddr::Alarm2Minutes.into()], &mut data)?;
        DS3231Alarm2::from(data)
            .to_config()
            .map_err(DS3231Error::Alarm)
    }

    // INTCN and A1IE on, A2IE off, everything else kept.
    fn route_alarm1_to_int_pin(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_interrupt_control(InterruptControl::Interrupt);
        control.set_alarm1_interrupt_enable(true);
        control.set_alarm2_interrupt_enable(false);
        debug!("writing control: {:?}", control);
        self.set_control(control)
    }

    /// Makes the INT pin fire periodically, using alarm 1.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn enable_interrupts(
        &mut self,
        periodicity: Periodicity,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.set_alarm1(&periodicity.into())?;
        self.route_alarm1_to_int_pin()
    }

    /// Makes the INT pin fire once a day at `hour:minute:second`, using
    /// alarm 1.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::Alarm`] if the time is out of range, in which
    /// case nothing is written, and [`DS3231Error::I2c`] on bus failure.
    pub fn enable_daily_interrupt(
        &mut self,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.set_alarm1(&Alarm1Config::AtTime {
            hours: hour,
            minutes: minute,
            seconds: second,
        })?;
        self.route_alarm1_to_int_pin()
    }

    /// Clears both alarm interrupt enables. The alarm registers are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn disable_interrupts(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_alarm1_interrupt_enable(false);
        control.set_alarm2_interrupt_enable(false);
        debug!("writing control: {:?}", control);
        self.set_control(control)
    }

    /// Clears both alarm flags, releasing the INT pin.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn clear_int_status(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status()?;
        status.set_alarm1_flag(false);
        status.set_alarm2_flag(false);
        self.set_status(status)
    }

    /// Starts a temperature conversion and returns without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn convert_temperature(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_convert_temperature(true);
        self.set_control(control)
    }

    /// Returns `true` while a temperature conversion started with
    /// [`DS3231::convert_temperature`] is still running.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn is_converting_temperature(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.control()?.convert_temperature())
    }

    /// Reads the last converted temperature in degrees Celsius, with a
    /// resolution of 0.25 °C.
    ///
    /// # Errors
    ///
    /// Returns [`DS3231Error::I2c`] on bus failure.
    pub fn temperature(&mut self) -> Result<f32, DS3231Error<I2C::Error>> {
        let mut data = [0; 2];
        self.i2c
            .write_read(self.address, &[RegAddr::MSBTemp.into()], &mut data)?;
        Ok(Temperature(data[0]).celsius(TemperatureFraction(data[1])))
    }
}

// Register access implementations
macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ident)),+) => {
        impl<I2C: I2c> DS3231<I2C> {
            $(
                paste! {
                    #[doc = concat!("Gets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "\n\nReturns `DS3231Error::I2c` on bus failure."]
                    pub fn $name(&mut self) -> Result<$typ, DS3231Error<I2C::Error>> {
                        Ok($typ(self.read_register($regaddr)?))
                    }

                    #[doc = concat!("Sets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "\n\nReturns `DS3231Error::I2c` on bus failure."]
                    pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), DS3231Error<I2C::Error>> {
                        self.write_register($regaddr, value.into())
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (hour, RegAddr::Hours, Hours),
    (control, RegAddr::Control, Control),
    (status, RegAddr::ControlStatus, Status),
    (aging_offset, RegAddr::AgingOffset, AgingOffset)
);
