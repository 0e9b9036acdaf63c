//! Fixed-point measurements
//!
//! Each type wraps a signed integer in a fixed sub-unit and can only be
//! built from a raw sensor word through the sensor's transfer function.
//! Drivers construct them after a transfer has passed validation, so a
//! measurement never exists for partial or corrupted data.
//!
//! `Display` renders the endpoint text form: integer part, a dot, and a
//! single truncated fractional digit.

use core::fmt;

/// Illuminance in tenths of lux
///
/// BH1750 datasheet: `lux = raw / 1.2`. The driver applies
/// `raw * 10 / 12` with integer truncation, and that exact result is the
/// value carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Illuminance {
    deci_lux: i32,
}

impl Illuminance {
    /// Convert a raw 16-bit BH1750 reading
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            deci_lux: raw as i32 * 10 / 12,
        }
    }

    /// Value in tenths of lux
    pub const fn deci_lux(self) -> i32 {
        self.deci_lux
    }
}

impl fmt::Display for Illuminance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.deci_lux / 10, self.deci_lux % 10)
    }
}

/// Temperature in thousandths of a degree Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    milli_celsius: i32,
}

impl Temperature {
    /// Convert a raw 16-bit SHT30 temperature word
    ///
    /// Datasheet: `T = -45 + 175 * raw / 65535`. 175000 / 65535 ≈ 2.672,
    /// so `-45000 + raw * 2672 / 1000` gives millidegrees.
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            milli_celsius: -45_000 + raw as i32 * 2672 / 1000,
        }
    }

    /// Value in millidegrees Celsius
    pub const fn milli_celsius(self) -> i32 {
        self.milli_celsius
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.milli_celsius / 1000;
        let tenths = (self.milli_celsius % 1000).abs() / 100;

        // Integer division drops the sign between -1 and 0 degrees
        if self.milli_celsius < 0 && whole == 0 {
            write!(f, "-0.{}", tenths)
        } else {
            write!(f, "{}.{}", whole, tenths)
        }
    }
}

/// Relative humidity in thousandths of a percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Humidity {
    milli_percent: i32,
}

impl Humidity {
    /// Convert a raw 16-bit SHT30 humidity word
    ///
    /// Datasheet: `RH = 100 * raw / 65535`, scaled as `raw * 1526 / 1000`.
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            milli_percent: raw as i32 * 1526 / 1000,
        }
    }

    /// Value in thousandths of a percent
    pub const fn milli_percent(self) -> i32 {
        self.milli_percent
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}",
            self.milli_percent / 1000,
            (self.milli_percent % 1000) / 100
        )
    }
}

/// One validated temperature/humidity measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    pub temperature: Temperature,
    pub humidity: Humidity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lux_conversion() {
        assert_eq!(Illuminance::from_raw(0x0190).deci_lux(), 333);
        assert_eq!(Illuminance::from_raw(0x0190).to_string(), "33.3");

        // Exact multiple of 12, nothing truncated
        assert_eq!(Illuminance::from_raw(12).deci_lux(), 10);
        assert_eq!(Illuminance::from_raw(12).to_string(), "1.0");
    }

    #[test]
    fn test_lux_truncation_near_threshold() {
        assert_eq!(Illuminance::from_raw(6).to_string(), "0.5");
        assert_eq!(Illuminance::from_raw(7).to_string(), "0.5");
        assert_eq!(Illuminance::from_raw(11).to_string(), "0.9");
        assert_eq!(Illuminance::from_raw(0).to_string(), "0.0");
    }

    #[test]
    fn test_lux_full_scale() {
        assert_eq!(Illuminance::from_raw(u16::MAX).deci_lux(), 54612);
        assert_eq!(Illuminance::from_raw(u16::MAX).to_string(), "5461.2");
    }

    #[test]
    fn test_temperature_conversion() {
        let t = Temperature::from_raw(0x6000);
        assert_eq!(t.milli_celsius(), 20667);
        assert_eq!(t.to_string(), "20.6");
    }

    #[test]
    fn test_temperature_bounds() {
        assert_eq!(Temperature::from_raw(0).milli_celsius(), -45_000);
        assert_eq!(Temperature::from_raw(0).to_string(), "-45.0");
        assert_eq!(Temperature::from_raw(u16::MAX).milli_celsius(), 130_109);
    }

    #[test]
    fn test_negative_temperature_keeps_sign() {
        // raw 16650 -> -45000 + 44488 = -512
        let t = Temperature::from_raw(16650);
        assert_eq!(t.milli_celsius(), -512);
        assert_eq!(t.to_string(), "-0.5");

        // raw 14000 -> -45000 + 37408 = -7592
        assert_eq!(Temperature::from_raw(14000).to_string(), "-7.5");
    }

    #[test]
    fn test_humidity_conversion() {
        let h = Humidity::from_raw(0x8000);
        assert_eq!(h.milli_percent(), 50003);
        assert_eq!(h.to_string(), "50.0");

        assert_eq!(Humidity::from_raw(0).to_string(), "0.0");
        assert_eq!(Humidity::from_raw(u16::MAX).to_string(), "100.0");
    }

    proptest! {
        #[test]
        fn lux_matches_integer_formula(raw in any::<u16>()) {
            prop_assert_eq!(Illuminance::from_raw(raw).deci_lux(), raw as i32 * 10 / 12);
        }

        #[test]
        fn temperature_is_monotonic(a in any::<u16>(), b in any::<u16>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Temperature::from_raw(lo) <= Temperature::from_raw(hi));
        }

        #[test]
        fn humidity_is_monotonic(a in any::<u16>(), b in any::<u16>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Humidity::from_raw(lo) <= Humidity::from_raw(hi));
        }
    }
}
