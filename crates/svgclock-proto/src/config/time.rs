use std::{fmt, str::FromStr};

use serde_with::DeserializeFromStr;

/// Field of a [`TimeOfDay`], used to report out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds
}

impl TimeField {
    /// Largest value the field accepts.
    pub const fn max(self) -> u32 {
        match self {
            Self::Hours => 23,
            Self::Minutes | Self::Seconds => 59
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Minutes => write!(f, "minutes"),
            Self::Seconds => write!(f, "seconds")
        }
    }
}

/// Errors returned when parsing a `h:m:s` time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input was empty or whitespace only.
    Empty,

    /// More than three colon-separated components were supplied.
    TooManyComponents { count: usize },

    /// A component is not a non-negative integer.
    InvalidComponent { component: String },

    /// A component is outside of its valid range.
    OutOfRange { field: TimeField, value: u32 }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "time string is empty"),
            Self::TooManyComponents {
                count
            } => {
                write!(f, "expected at most 3 components in time string, found {}", count)
            }
            Self::InvalidComponent {
                component
            } => {
                write!(f, "'{}' is not a valid time component", component)
            }
            Self::OutOfRange {
                field,
                value
            } => {
                write!(f, "{} value {} is out of range 0-{}", field, value, field.max())
            }
        }
    }
}

impl std::error::Error for TimeParseError {}

/// Number of seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Wall-clock time with second precision.
///
/// Hours are kept in `0..24`, minutes and seconds in `0..60`; every
/// constructor enforces those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr)]
pub struct TimeOfDay {
    h: u8,
    m: u8,
    s: u8
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        h: 0, m: 0, s: 0
    };

    /// Builds a time from its fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeParseError::OutOfRange`] for the first field outside of
    /// its range.
    pub fn new(h: u32, m: u32, s: u32) -> Result<Self, TimeParseError> {
        Ok(Self {
            h: checked(TimeField::Hours, h)?,
            m: checked(TimeField::Minutes, m)?,
            s: checked(TimeField::Seconds, s)?
        })
    }

    pub fn hours(&self) -> u8 {
        self.h
    }

    pub fn minutes(&self) -> u8 {
        self.m
    }

    pub fn seconds(&self) -> u8 {
        self.s
    }

    /// Returns the time one second later, carrying into minutes and hours and
    /// wrapping from `23:59:59` to `0:0:0`.
    #[must_use]
    pub fn tick(self) -> Self {
        let mut next = self;

        next.s += 1;
        if next.s == 60 {
            next.s = 0;
            next.m += 1;
        }
        if next.m == 60 {
            next.m = 0;
            next.h += 1;
        }
        if next.h == 24 {
            next.h = 0;
        }

        next
    }

    /// Returns the time `seconds` later, wrapping past midnight.
    #[must_use]
    pub fn advanced(self, seconds: u64) -> Self {
        let offset = seconds % u64::from(SECONDS_PER_DAY);
        let total = u64::from(self.seconds_since_midnight()) + offset;

        // both terms are below one day, so the sum fits in u32
        Self::from_seconds_since_midnight(total as u32)
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.h) * 3600 + u32::from(self.m) * 60 + u32::from(self.s)
    }

    /// Builds a time from a second count, wrapping at [`SECONDS_PER_DAY`].
    pub fn from_seconds_since_midnight(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;

        Self {
            h: (seconds / 3600) as u8,
            m: (seconds / 60 % 60) as u8,
            s: (seconds % 60) as u8
        }
    }
}

fn checked(field: TimeField, value: u32) -> Result<u8, TimeParseError> {
    if value > field.max() {
        return Err(TimeParseError::OutOfRange {
            field,
            value
        });
    }

    // max() is at most 59, the cast cannot truncate
    Ok(value as u8)
}

fn parse_component(component: &str) -> Result<u32, TimeParseError> {
    let invalid = || TimeParseError::InvalidComponent {
        component: component.to_owned()
    };

    if component.is_empty() || !component.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }

    component.parse::<u32>().map_err(|_| invalid())
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Parses `h`, `h:m` or `h:m:s`. Missing trailing components are zero.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let components: Vec<&str> = value.split(':').collect();
        if components.len() > 3 {
            return Err(TimeParseError::TooManyComponents {
                count: components.len()
            });
        }

        let mut fields = [0u32; 3];
        for (slot, component) in fields.iter_mut().zip(&components) {
            *slot = parse_component(component)?;
        }

        let [h, m, s] = fields;
        Self::new(h, m, s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.h, self.m, self.s)
    }
}
