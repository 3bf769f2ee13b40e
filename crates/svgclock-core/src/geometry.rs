//! Clock-face geometry.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock: 90° is
//! 3 o'clock, 180° is 6 o'clock. The y axis points down as in SVG.

use svgclock_proto::config::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64
}

/// Point on the circle of `radius` around `(center_x, center_y)` at `degree`.
pub fn point_by_degree(degree: f64, radius: f64, center_x: f64, center_y: f64) -> Point {
    let radians = degree.to_radians();

    Point {
        x: center_x + radius * radians.sin(),
        y: center_y - radius * radians.cos()
    }
}

/// Angles of the three hands for a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour:   f64,
    pub minute: f64,
    pub second: f64
}

impl HandAngles {
    /// The hour and minute hands advance continuously with the smaller unit.
    pub fn from_time(time: &TimeOfDay) -> Self {
        let h = f64::from(time.hours() % 12);
        let m = f64::from(time.minutes());
        let s = f64::from(time.seconds());

        Self {
            hour:   h * 30.0 + m * 0.5,
            minute: m * 6.0 + s * 0.1,
            second: s * 6.0
        }
    }
}
