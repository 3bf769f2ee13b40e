use serde::Deserialize;

mod color;
mod themes;
mod time;
mod validation;


pub use color::{ThemeColor, ThemeColorError};
pub use themes::{DEFAULT_THEME, PresetTheme, Theme, ThemeOverride, ThemeSelector};
pub use time::{SECONDS_PER_DAY, TimeField, TimeOfDay, TimeParseError};
pub use validation::{ConfigValidationError, MAX_DIAMETER};

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/svgclock/config.toml";

/// Diameter used when neither the config file nor the command line sets one.
pub const DEFAULT_DIAMETER: u32 = 400;

/// Clock face options, the `[clock]` table of the config file.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default = "default_diameter")]
    pub diameter: u32,
    /// Fixed time to display. The clock does not tick when set.
    #[serde(default)]
    pub time:     Option<TimeOfDay>,
    /// Time a ticking clock starts from instead of the wall clock.
    #[serde(default)]
    pub start:    Option<TimeOfDay>,
    #[serde(default)]
    pub theme:    Option<ThemeSelector>,
    #[serde(default = "default_numerals")]
    pub numerals: bool
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            time:     None,
            start:    None,
            theme:    None,
            numerals: default_numerals()
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File the rendered SVG is written to. Standard output when absent.
    #[serde(default)]
    pub output:    Option<String>,
    #[serde(default)]
    pub clock:     ClockConfig
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output:    None,
            clock:     ClockConfig::default()
        }
    }
}

fn default_log_level() -> String {
    "warn".to_owned()
}

fn default_diameter() -> u32 {
    DEFAULT_DIAMETER
}

fn default_numerals() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.clock.diameter, DEFAULT_DIAMETER);
        assert!(config.clock.numerals);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn parses_full_clock_table() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"
            output = "/tmp/clock.svg"

            [clock]
            diameter = 120
            time = "12:30"
            start = "9:15"
            numerals = false
            theme = "light"
            "#
        )
        .expect("valid config");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output.as_deref(), Some("/tmp/clock.svg"));
        assert_eq!(config.clock.diameter, 120);
        assert_eq!(config.clock.time, Some(TimeOfDay::new(12, 30, 0).expect("valid time")));
        assert_eq!(config.clock.start, Some(TimeOfDay::new(9, 15, 0).expect("valid time")));
        assert!(!config.clock.numerals);
        assert_eq!(config.clock.theme, Some(ThemeSelector::Named("light".to_owned())));
    }

    #[test]
    fn parses_inline_theme_override() {
        let config: Config = toml::from_str(
            r##"
            [clock.theme]
            bezel = "red"
            second_hand = "#00ff00"
            "##
        )
        .expect("valid config");

        let Some(ThemeSelector::Override(overrides)) = config.clock.theme else {
            panic!("expected override selector");
        };
        assert_eq!(overrides.bezel, Some(ThemeColor::named("red")));
        assert_eq!(overrides.second_hand, Some(ThemeColor::rgb(0, 255, 0)));
        assert_eq!(overrides.background, None);
    }

    #[test]
    fn rejects_malformed_time() {
        let result = toml::from_str::<Config>(
            r#"
            [clock]
            time = "25:00"
            "#
        );
        assert!(result.is_err());
    }
}
