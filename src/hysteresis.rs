use log::trace;

use crate::{Error, Result};

/// On/off switching points in degrees Celsius.
///
/// Between `off` and `on` lies the dead band where the fan keeps whatever
/// state it already has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    on: f64,
    off: f64,
}

impl Thresholds {
    pub fn new(on: f64, off: f64) -> Result<Self> {
        if !on.is_finite() || !off.is_finite() {
            return Err(Error::Config(format!(
                "thresholds must be finite numbers: on {on}, off {off}"
            )));
        }
        if off >= on {
            return Err(Error::Config(format!(
                "off threshold can't be >= on threshold: {off} >= {on}"
            )));
        }
        Ok(Self { on, off })
    }

    #[must_use]
    pub const fn on(&self) -> f64 {
        self.on
    }

    #[must_use]
    pub const fn off(&self) -> f64 {
        self.off
    }

    /// Returns the state the fan should switch to, or `None` to leave it alone.
    ///
    /// Both comparisons are strict: a reading equal to a threshold never
    /// switches the fan.
    #[must_use]
    pub fn decide(&self, current_temp: f64, fan_is_on: bool) -> Option<bool> {
        if !fan_is_on && current_temp > self.on {
            trace!("{current_temp} > {}, fan should start", self.on);
            Some(true)
        } else if fan_is_on && current_temp < self.off {
            trace!("{current_temp} < {}, fan should stop", self.off);
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        Thresholds::new(55.0, 45.0).unwrap()
    }

    #[test]
    fn test_off_equal_to_on_is_rejected() {
        let err = Thresholds::new(50.0, 50.0).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("off threshold can't be >="));
    }

    #[test]
    fn test_off_above_on_is_rejected() {
        assert!(matches!(
            Thresholds::new(45.0, 55.0),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_nan_threshold_is_rejected() {
        assert!(Thresholds::new(f64::NAN, 45.0).is_err());
        assert!(Thresholds::new(55.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_accessors() {
        let thresholds = thresholds();
        assert!((thresholds.on() - 55.0).abs() < f64::EPSILON);
        assert!((thresholds.off() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_temp_at_on_threshold_keeps_fan_off() {
        assert_eq!(thresholds().decide(55.0, false), None);
    }

    #[test]
    fn test_temp_above_on_threshold_starts_fan() {
        assert_eq!(thresholds().decide(55.1, false), Some(true));
    }

    #[test]
    fn test_temp_at_off_threshold_keeps_fan_on() {
        assert_eq!(thresholds().decide(45.0, true), None);
    }

    #[test]
    fn test_temp_below_off_threshold_stops_fan() {
        assert_eq!(thresholds().decide(44.9, true), Some(false));
    }

    #[test]
    fn test_dead_band_keeps_state() {
        let thresholds = thresholds();
        assert_eq!(thresholds.decide(50.0, false), None);
        assert_eq!(thresholds.decide(50.0, true), None);
    }

    #[test]
    fn test_no_redundant_transitions() {
        let thresholds = thresholds();
        assert_eq!(thresholds.decide(80.0, true), None);
        assert_eq!(thresholds.decide(20.0, false), None);
    }

    #[test]
    fn test_decide_is_deterministic() {
        let thresholds = thresholds();
        for temp in [20.0, 44.9, 45.0, 50.0, 55.0, 55.1, 90.0] {
            for fan_is_on in [false, true] {
                assert_eq!(
                    thresholds.decide(temp, fan_is_on),
                    thresholds.decide(temp, fan_is_on)
                );
            }
        }
    }
}
