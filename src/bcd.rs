//! Binary-coded-decimal codec.
//!
//! Every time and date register of the DS3231 stores its value as two
//! decimal digits: the tens digit in the high nibble and the units digit in
//! the low nibble. The bitfield register types in [`crate::registers`] only
//! carry the individual digits; this module is the one place that turns a
//! number into digits and back, enforcing the field's range on the way.

use crate::DS3231DateTimeError;

/// Splits `value` into its `(ones, tens)` digits.
///
/// # Errors
///
/// Returns [`DS3231DateTimeError::InvalidDateTime`] if `value` is greater than
/// `max_value` or cannot be represented with two decimal digits.
pub(crate) fn make_bcd(value: u8, max_value: u8) -> Result<(u8, u8), DS3231DateTimeError> {
    if value > max_value || value > 99 {
        return Err(DS3231DateTimeError::InvalidDateTime);
    }
    Ok((value % 10, value / 10))
}

/// Joins `(ones, tens)` digits back into a number.
///
/// # Errors
///
/// Returns [`DS3231DateTimeError::InvalidDateTime`] if either digit is not a
/// decimal digit.
pub(crate) fn join_bcd(ones: u8, tens: u8) -> Result<u8, DS3231DateTimeError> {
    if ones > 9 || tens > 9 {
        return Err(DS3231DateTimeError::InvalidDateTime);
    }
    Ok(tens * 10 + ones)
}

/// Encodes `value` as a packed BCD byte, rejecting anything above `max_value`.
///
/// ```
/// use ds3231_clock::bcd;
///
/// assert_eq!(bcd::encode(59, 59).unwrap(), 0x59);
/// assert!(bcd::encode(60, 59).is_err());
/// ```
///
/// # Errors
///
/// Returns [`DS3231DateTimeError::InvalidDateTime`] if `value` is out of range.
pub fn encode(value: u8, max_value: u8) -> Result<u8, DS3231DateTimeError> {
    let (ones, tens) = make_bcd(value, max_value)?;
    Ok((tens << 4) | ones)
}

/// Decodes a packed BCD byte.
///
/// # Errors
///
/// Returns [`DS3231DateTimeError::InvalidDateTime`] if either nibble is
/// greater than 9.
pub fn decode(byte: u8) -> Result<u8, DS3231DateTimeError> {
    join_bcd(byte & 0x0F, byte >> 4)
}
