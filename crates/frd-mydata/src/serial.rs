//! Console serial number check digit.
//!
//! A 3DS serial is a two-letter prefix followed by eight digits; the label
//! on the console adds a ninth digit computed from the other eight. The
//! friend data only stores the first ten characters.

use crate::{Error, Result};

/// Number of leading characters excluded from the check digit.
pub const SERIAL_PREFIX_LEN: usize = 2;

/// Number of characters the check digit is computed from, prefix included.
pub const SERIAL_BODY_LEN: usize = 10;

/// Compute the check digit of `serial`.
///
/// Digits at positions 2, 4, 6, 8 are summed into `odd`, positions 3, 5, 7, 9
/// into `even`; with `r = (3 * even + odd) % 10` the digit is `0` when `r` is
/// zero and `10 - r` otherwise. Characters past position 9 are ignored.
///
/// Returns [`Error::InvalidSerial`] if `serial` is shorter than ten
/// characters or has a non-digit in positions 2..10.
pub fn check_digit(serial: &str) -> Result<u8> {
    let body: Vec<char> = serial.chars().take(SERIAL_BODY_LEN).collect();
    if body.len() < SERIAL_BODY_LEN {
        return Err(Error::InvalidSerial(serial.to_string()));
    }

    let mut odd_sum = 0u32;
    let mut even_sum = 0u32;
    for (i, c) in body[SERIAL_PREFIX_LEN..].iter().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| Error::InvalidSerial(serial.to_string()))?;

        if i % 2 == 0 {
            odd_sum += digit;
        } else {
            even_sum += digit;
        }
    }

    let remainder = (3 * even_sum + odd_sum) % 10;
    Ok(if remainder == 0 { 0 } else { (10 - remainder) as u8 })
}

/// Append the check digit to `serial`, as printed on the console label.
pub fn full_serial(serial: &str) -> Result<String> {
    let digit = check_digit(serial)?;
    Ok(format!("{serial}{digit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digit() {
        // odd = 1+3+5+7 = 16, even = 2+4+6+8 = 20, (60 + 16) % 10 = 6
        assert_eq!(check_digit("0012345678").unwrap(), 4);
        assert_eq!(full_serial("0012345678").unwrap(), "00123456784");
    }

    #[test]
    fn test_prefix_ignored() {
        assert_eq!(
            check_digit("CW12345678").unwrap(),
            check_digit("0012345678").unwrap()
        );
    }

    #[test]
    fn test_zero_remainder() {
        assert_eq!(check_digit("0000000000").unwrap(), 0);
        // odd = 5 + 5, even = 0, 10 % 10 = 0
        assert_eq!(check_digit("XX50500000").unwrap(), 0);
    }

    #[test]
    fn test_always_single_digit() {
        for n in 0..2000u32 {
            let serial = format!("CW{:08}", n * 49_991);
            let digit = check_digit(&serial).unwrap();
            assert!(digit <= 9);
        }
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(check_digit("CW1234"), Err(Error::InvalidSerial(_))));
        assert!(matches!(check_digit("CW1234X678"), Err(Error::InvalidSerial(_))));
        assert!(check_digit("").is_err());
    }
}
