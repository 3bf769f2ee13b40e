//! Theme resolution.

use log::{debug, warn};
pub use svgclock_proto::config::{DEFAULT_THEME, PresetTheme, Theme, ThemeOverride, ThemeSelector};

/// Resolves a theme selector into a concrete theme.
///
/// - `None` resolves to [`DEFAULT_THEME`].
/// - A known preset name resolves to that preset.
/// - An unknown name resolves to [`DEFAULT_THEME`].
/// - An override is merged over [`DEFAULT_THEME`].
pub fn configure_theme(selector: Option<&ThemeSelector>) -> Theme {
    match selector {
        None => DEFAULT_THEME,
        Some(ThemeSelector::Named(name)) => match PresetTheme::from_name(name) {
            Some(preset) => {
                debug!("Using preset theme '{}'", preset.name());
                preset.theme()
            }
            None => {
                warn!("Unknown theme '{name}', falling back to the default theme");
                DEFAULT_THEME
            }
        },
        Some(ThemeSelector::Override(overrides)) => DEFAULT_THEME.merged(overrides)
    }
}

#[cfg(test)]
mod tests {
    use svgclock_proto::config::ThemeColor;

    use super::*;

    #[test]
    fn no_selector_returns_default_theme() {
        assert_eq!(configure_theme(None), DEFAULT_THEME);
    }

    #[test]
    fn known_name_returns_preset() {
        let selector = ThemeSelector::from("light");
        assert_eq!(configure_theme(Some(&selector)), PresetTheme::Light.theme());
    }

    #[test]
    fn unknown_name_returns_default_theme() {
        let selector = ThemeSelector::from("foo.bar");
        assert_eq!(configure_theme(Some(&selector)), DEFAULT_THEME);
    }

    #[test]
    fn override_extends_default_theme() {
        let selector = ThemeSelector::from(ThemeOverride {
            bezel: Some(ThemeColor::named("red")),
            ..Default::default()
        });

        let expected = Theme {
            bezel: ThemeColor::named("red"),
            ..DEFAULT_THEME
        };

        assert_eq!(configure_theme(Some(&selector)), expected);
    }
}
