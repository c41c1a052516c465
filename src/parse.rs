use crate::decimal::Decimal;
use crate::error::{Error, Result};

use std::fmt;
use std::str::FromStr;

impl Decimal {
    /// parses numeric string and updates decimal value
    #[inline]
    pub fn from_ascii_str(&mut self, s: &str, reset: bool) -> Result<()> {
        self.from_bytes_str(s.as_bytes(), reset)
    }

    /// parses numeric string and updates decimal value.
    ///
    /// Only plain notation is accepted: an optional sign, digits and
    /// at most one '.' separator. On error the value is left untouched,
    /// or zero if reset is requested.
    pub fn from_bytes_str(&mut self, bs: &[u8], reset: bool) -> Result<()> {
        if reset {
            self.set_zero();
        }
        if bs.is_empty() {
            return Err(Error::ConversionSyntax);
        }
        let mut d = 0; // total digits of input
        let mut dotchar = None; // position of dot character
        let mut cfirst = 0; // position of first digit or dot
        let mut neg = false; // if input is negative
        for (i, c) in bs.iter().enumerate() {
            if c.is_ascii_digit() {
                d += 1;
                continue;
            }
            if *c == b'.' && dotchar.is_none() {
                dotchar = Some(i);
                continue;
            }
            if i == 0 { // first in string
                if *c == b'-' {
                    cfirst += 1;
                    neg = true;
                    continue;
                }
                if *c == b'+' {
                    cfirst += 1;
                    continue;
                }
            }
            // c is not a digit, or a valid '+', '-' or single '.'.
            // exponents, NaNs and Infinities are not supported.
            return Err(Error::ConversionSyntax);
        }
        if d == 0 { // e.g. ".", "-", "+."
            return Err(Error::ConversionSyntax);
        }
        // Here when whole string has been inspected; syntax is good
        let (intg, frac) = match dotchar {
            Some(p) => (&bs[cfirst..p], &bs[p + 1..]),
            None => (&bs[cfirst..], &bs[bs.len()..]),
        };
        let intg = match intg.iter().position(|c| *c != b'0') {
            Some(p) => &intg[p..],
            None => &intg[intg.len()..],
        };
        let frac = match frac.iter().rposition(|c| *c != b'0') {
            Some(p) => &frac[..=p],
            None => &frac[..0],
        };
        self.intg.clear();
        self.intg.extend_from_slice(intg);
        self.frac.clear();
        self.frac.extend_from_slice(frac);
        self.set_pos();
        if neg {
            self.set_neg_and_check_zero();
        }
        Ok(())
    }

    /// appends normalized string format to given buffer.
    pub fn append_str_buf(&self, buf: &mut Vec<u8>) {
        if self.is_neg() {
            buf.push(b'-');
        }
        if self.intg.is_empty() {
            buf.push(b'0'); // append 0 if no integral part
        } else {
            buf.extend_from_slice(&self.intg);
        }
        if !self.frac.is_empty() {
            buf.push(b'.');
            buf.extend_from_slice(&self.frac);
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        let mut d = Decimal::zero();
        d.from_ascii_str(s, false)?;
        Ok(d)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.intg() + self.frac() + 3);
        self.append_str_buf(&mut buf);
        // digits are validated ASCII
        let s = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_from_str() {
        let mut d = Decimal::zero();
        for s in vec![
            "0",
            "1",
            "-1",
            "+1",
            "123",
            "123456789012345",
            "0.1",
            "0.123",
            "1.0",
            "-1.0",
            "1.",
            ".5",
            "-.5",
            "-0",
            "0000",
            "1234567890123456789012345678901234567890123456789012345678901234567890",
        ] {
            assert!(d.from_ascii_str(s, true).is_ok(), "failed to parse {}", s);
            println!("result={:?}", d);
        }
    }

    #[test]
    fn test_from_str_err() {
        let mut d = Decimal::zero();
        for s in vec![
            "",
            "abc",
            ".",
            ".a",
            "-",
            "+",
            "+.",
            "--1",
            "+-1",
            "1-",
            "NaN",
            "Infinity",
            "-Infinity",
            "0x1F",
            "12a",
            "1.2.3",
            "1..2",
            "1,000",
            "1e5",
            "1E+2",
            ".1e-2",
            " 1",
            "1 ",
            "１",
        ] {
            assert_eq!(Err(Error::ConversionSyntax), d.from_ascii_str(s, true), "input {:?}", s);
        }
    }

    #[test]
    fn test_from_str_err_keeps_value() {
        let mut d: Decimal = "12.5".parse().unwrap();
        assert!(d.from_ascii_str("1.2.3", false).is_err());
        assert_eq!("12.5", d.to_string());
        assert!(d.from_ascii_str("1.2.3", true).is_err());
        assert!(d.is_zero());
    }

    #[test]
    fn test_from_str_reuse() {
        let mut d = Decimal::zero();
        d.from_ascii_str("-123.456", true).unwrap();
        d.from_ascii_str("7", true).unwrap();
        assert!(!d.is_neg());
        assert_eq!(1, d.intg());
        assert_eq!(0, d.frac());
    }

    #[test]
    fn test_from_str_rand() {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();
        let mut d = Decimal::zero();
        for _ in 0..128 {
            let intg: u32 = rng.gen_range(1..1 << 30);
            let frac: u32 = rng.gen_range(0..1 << 20);
            let s = if frac > 0 {
                format!("{}.{}", intg, frac)
            } else {
                format!("{}", intg)
            };
            assert!(d.from_ascii_str(&s, true).is_ok());
            let frac_digits = if frac > 0 {
                frac.to_string().trim_end_matches('0').len()
            } else {
                0
            };
            assert_eq!(intg.to_string().len(), d.intg());
            assert_eq!(frac_digits, d.decimal_places());
            assert_eq!(d.intg() + d.frac(), d.precision());
        }
    }

    #[test]
    fn test_to_string() {
        let mut d = Decimal::zero();
        for (input, expected) in vec![
            ("0", "0"),
            ("1", "1"),
            ("-1", "-1"),
            ("+1", "1"),
            ("123", "123"),
            ("123456789012345", "123456789012345"),
            ("0.0", "0"),
            ("-0.0", "0"),
            ("0.100", "0.1"),
            ("0.12345678901234567890", "0.1234567890123456789"),
            ("1.0", "1"),
            ("-1.0", "-1"),
            ("1.", "1"),
            (".5", "0.5"),
            ("-.5", "-0.5"),
            ("+007.50", "7.5"),
            ("100", "100"),
            ("0.00120", "0.0012"),
        ] {
            assert!(d.from_ascii_str(input, true).is_ok());
            println!("d={:?}", d);
            let actual = d.to_string();
            assert_eq!(expected, &actual[..]);
        }
    }
}
