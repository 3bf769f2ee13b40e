use super::Config;

/// Largest diameter, in pixels, accepted by [`Config::validate`].
pub const MAX_DIAMETER: u32 = 10_000;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// The clock diameter is zero or larger than [`MAX_DIAMETER`].
    InvalidDiameter { diameter: u32 },
    /// Both a fixed `time` and a ticking `start` time are set.
    ConflictingTimes
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDiameter {
                diameter
            } => {
                write!(
                    f,
                    "clock diameter {} is out of range 1-{}",
                    diameter, MAX_DIAMETER
                )
            }
            Self::ConflictingTimes => {
                write!(f, "clock time and start time cannot both be set")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Validates the configuration.
    ///
    /// Theme names are not checked here: unknown names fall back to the
    /// default theme when the clock is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::InvalidDiameter`] if the diameter is
    /// zero or above [`MAX_DIAMETER`], and
    /// [`ConfigValidationError::ConflictingTimes`] if a fixed time and a
    /// start time are both present.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let diameter = self.clock.diameter;

        if diameter == 0 || diameter > MAX_DIAMETER {
            return Err(ConfigValidationError::InvalidDiameter {
                diameter
            });
        }

        if self.clock.time.is_some() && self.clock.start.is_some() {
            return Err(ConfigValidationError::ConflictingTimes);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClockConfig, ThemeSelector, TimeOfDay};

    #[test]
    fn validate_accepts_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_diameter() {
        let config = Config {
            clock: ClockConfig {
                diameter: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        let error = config.validate().expect_err("expected diameter error");
        assert_eq!(
            error,
            ConfigValidationError::InvalidDiameter {
                diameter: 0
            }
        );
    }

    #[test]
    fn validate_rejects_oversized_diameter() {
        let config = Config {
            clock: ClockConfig {
                diameter: MAX_DIAMETER + 1,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_ignores_unknown_theme_names() {
        let config = Config {
            clock: ClockConfig {
                theme: Some(ThemeSelector::from("does-not-exist")),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_fixed_and_start_time_together() {
        let noon = TimeOfDay::new(12, 0, 0).expect("valid time");
        let config = Config {
            clock: ClockConfig {
                time: Some(noon),
                start: Some(noon),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(config.validate(), Err(ConfigValidationError::ConflictingTimes));
    }
}
