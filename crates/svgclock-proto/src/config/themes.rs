use serde::Deserialize;

use super::color::ThemeColor;

/// Resolved set of paints used to draw the clock.
#[derive(Clone, Debug, PartialEq, Eq,)]
pub struct Theme
{
    /// Fill of the clock face.
    pub background:  ThemeColor,
    /// Stroke of the outer ring.
    pub bezel:       ThemeColor,
    pub ticks:       ThemeColor,
    pub numerals:    ThemeColor,
    pub hour_hand:   ThemeColor,
    pub minute_hand: ThemeColor,
    pub second_hand: ThemeColor,
    /// Cap drawn over the hands' pivot.
    pub center:      ThemeColor,
}

/// Theme used whenever no preset or override applies.
pub const DEFAULT_THEME: Theme = Theme {
    background:  ThemeColor::rgb(34, 34, 34,),
    bezel:       ThemeColor::rgb(85, 85, 85,),
    ticks:       ThemeColor::rgb(170, 170, 170,),
    numerals:    ThemeColor::rgb(238, 238, 238,),
    hour_hand:   ThemeColor::rgb(238, 238, 238,),
    minute_hand: ThemeColor::rgb(238, 238, 238,),
    second_hand: ThemeColor::rgb(229, 57, 53,),
    center:      ThemeColor::rgb(229, 57, 53,),
};

const LIGHT_THEME: Theme = Theme {
    background:  ThemeColor::rgb(255, 255, 255,),
    bezel:       ThemeColor::rgb(34, 34, 34,),
    ticks:       ThemeColor::rgb(102, 102, 102,),
    numerals:    ThemeColor::rgb(34, 34, 34,),
    hour_hand:   ThemeColor::rgb(34, 34, 34,),
    minute_hand: ThemeColor::rgb(34, 34, 34,),
    second_hand: ThemeColor::rgb(211, 47, 47,),
    center:      ThemeColor::rgb(211, 47, 47,),
};

const NAVY_THEME: Theme = Theme {
    background:  ThemeColor::rgb(16, 32, 64,),
    bezel:       ThemeColor::rgb(201, 166, 84,),
    ticks:       ThemeColor::rgb(201, 166, 84,),
    numerals:    ThemeColor::rgb(240, 236, 224,),
    hour_hand:   ThemeColor::rgb(240, 236, 224,),
    minute_hand: ThemeColor::rgb(240, 236, 224,),
    second_hand: ThemeColor::rgb(201, 166, 84,),
    center:      ThemeColor::rgb(201, 166, 84,),
};

impl Theme
{
    /// Returns a copy of `self` with every slot set in `overrides` replaced.
    ///
    /// Slots left as `None` keep the value from `self`.
    #[must_use]
    pub fn merged(&self, overrides: &ThemeOverride,) -> Theme
    {
        fn pick(base: &ThemeColor, replacement: &Option<ThemeColor,>,) -> ThemeColor
        {
            replacement.clone().unwrap_or_else(|| base.clone(),)
        }

        Theme {
            background:  pick(&self.background, &overrides.background,),
            bezel:       pick(&self.bezel, &overrides.bezel,),
            ticks:       pick(&self.ticks, &overrides.ticks,),
            numerals:    pick(&self.numerals, &overrides.numerals,),
            hour_hand:   pick(&self.hour_hand, &overrides.hour_hand,),
            minute_hand: pick(&self.minute_hand, &overrides.minute_hand,),
            second_hand: pick(&self.second_hand, &overrides.second_hand,),
            center:      pick(&self.center, &overrides.center,),
        }
    }
}

impl Default for Theme
{
    fn default() -> Self
    {
        DEFAULT_THEME
    }
}

/// Partial theme; set slots replace the matching slots of the default theme.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverride
{
    pub background:  Option<ThemeColor,>,
    pub bezel:       Option<ThemeColor,>,
    pub ticks:       Option<ThemeColor,>,
    pub numerals:    Option<ThemeColor,>,
    pub hour_hand:   Option<ThemeColor,>,
    pub minute_hand: Option<ThemeColor,>,
    pub second_hand: Option<ThemeColor,>,
    pub center:      Option<ThemeColor,>,
}

/// How a caller picks a theme: by preset name or by overriding slots.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq,)]
#[serde(untagged)]
pub enum ThemeSelector
{
    Named(String,),
    Override(ThemeOverride,),
}

impl From<&str,> for ThemeSelector
{
    fn from(name: &str,) -> Self
    {
        Self::Named(name.to_owned(),)
    }
}

impl From<ThemeOverride,> for ThemeSelector
{
    fn from(overrides: ThemeOverride,) -> Self
    {
        Self::Override(overrides,)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq,)]
#[serde(rename_all = "kebab-case")]
pub enum PresetTheme
{
    Dark,
    Light,
    Navy,
}

impl PresetTheme
{
    pub const ALL: [PresetTheme; 3] = [Self::Dark, Self::Light, Self::Navy,];

    pub fn name(self,) -> &'static str
    {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Navy => "navy",
        }
    }

    /// Looks a preset up by its name. Names are matched exactly.
    pub fn from_name(name: &str,) -> Option<Self,>
    {
        Self::ALL.into_iter().find(|preset| preset.name() == name,)
    }

    pub fn theme(self,) -> Theme
    {
        match self {
            Self::Dark => DEFAULT_THEME,
            Self::Light => LIGHT_THEME,
            Self::Navy => NAVY_THEME,
        }
    }
}
