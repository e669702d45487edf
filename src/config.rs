use crate::error::AutomatonError;

/// Construction-time parameters of a simulation session.
///
/// Dimensions and tick period are fixed once the session starts; the
/// generation buffers are sized from them exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomatonConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Seconds between generations while the clock runs.
    pub tick_period: f64,
}

impl AutomatonConfig {
    pub fn new(width: usize, height: usize, tick_period: f64) -> Result<Self, AutomatonError> {
        let config = Self {
            width,
            height,
            tick_period,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject non-positive dimensions or periods before any allocation.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        if self.width == 0 {
            return Err(AutomatonError::InvalidConfiguration {
                reason: "board width must be greater than zero",
            });
        }
        if self.height == 0 {
            return Err(AutomatonError::InvalidConfiguration {
                reason: "board height must be greater than zero",
            });
        }
        // The negated comparison also rejects NaN.
        if !(self.tick_period > 0.0) {
            return Err(AutomatonError::InvalidConfiguration {
                reason: "tick period must be greater than zero",
            });
        }
        Ok(())
    }
}

impl Default for AutomatonConfig {
    /// 50x50 board advancing every 0.1 seconds.
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            tick_period: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AutomatonConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        assert!(matches!(
            AutomatonConfig::new(0, 10, 0.1),
            Err(AutomatonError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_height_rejected() {
        assert!(matches!(
            AutomatonConfig::new(10, 0, 0.1),
            Err(AutomatonError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn non_positive_period_rejected() {
        assert!(AutomatonConfig::new(10, 10, 0.0).is_err());
        assert!(AutomatonConfig::new(10, 10, -1.0).is_err());
        assert!(AutomatonConfig::new(10, 10, f64::NAN).is_err());
    }
}
