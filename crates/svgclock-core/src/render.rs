//! SVG rendering of the clock face.

use svgclock_proto::config::{Theme, TimeOfDay};

use crate::geometry::{HandAngles, Point, point_by_degree};

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderSpec<'a> {
    /// Width and height of the SVG, in pixels.
    pub diameter: u32,
    pub time:     TimeOfDay,
    pub theme:    &'a Theme,
    pub numerals: bool
}

struct Hand {
    class:  &'static str,
    angle:  f64,
    length: f64,
    width:  f64
}

/// Renders a standalone SVG document for the given frame.
pub fn render_svg(spec: &RenderSpec<'_>) -> String {
    let diameter = f64::from(spec.diameter);
    let radius = diameter / 2.0;
    let theme = spec.theme;

    let bezel_width = diameter / 40.0;
    let face_radius = radius - bezel_width / 2.0;

    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{d}\" height=\"{d}\" viewBox=\"0 0 {d} {d}\" style=\"width: {d}px; height: {d}px;\">",
        d = spec.diameter
    ));

    svg.push_str(&format!(
        "<circle class=\"clock-face\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{w}\"/>",
        c = num(radius),
        r = num(face_radius),
        fill = theme.background,
        stroke = theme.bezel,
        w = num(bezel_width)
    ));

    let tick_outer = face_radius - bezel_width;
    for index in 0..60u32 {
        let major = index % 5 == 0;
        let (length, width) = if major {
            (diameter * 0.06, diameter / 100.0)
        } else {
            (diameter * 0.03, diameter / 200.0)
        };

        let angle = f64::from(index) * 6.0;
        let from = point_by_degree(angle, tick_outer - length, radius, radius);
        let to = point_by_degree(angle, tick_outer, radius, radius);

        svg.push_str(&line(
            if major {
                "clock-tick clock-tick--major"
            } else {
                "clock-tick"
            },
            from,
            to,
            &theme.ticks.to_string(),
            width
        ));
    }

    if spec.numerals {
        let font_size = diameter * 0.08;
        for hour in 1..=12u32 {
            let at = point_by_degree(f64::from(hour) * 30.0, radius * 0.68, radius, radius);
            svg.push_str(&format!(
                "<text class=\"clock-numeral\" x=\"{x}\" y=\"{y}\" fill=\"{fill}\" font-size=\"{size}\" font-family=\"sans-serif\" text-anchor=\"middle\" dominant-baseline=\"central\">{hour}</text>",
                x = num(at.x),
                y = num(at.y),
                fill = theme.numerals,
                size = num(font_size)
            ));
        }
    }

    let angles = HandAngles::from_time(&spec.time);
    let hands = [
        (
            Hand {
                class:  "clock-hand clock-hand--hour",
                angle:  angles.hour,
                length: radius * 0.5,
                width:  diameter / 40.0
            },
            &theme.hour_hand
        ),
        (
            Hand {
                class:  "clock-hand clock-hand--minute",
                angle:  angles.minute,
                length: radius * 0.75,
                width:  diameter / 60.0
            },
            &theme.minute_hand
        ),
        (
            Hand {
                class:  "clock-hand clock-hand--second",
                angle:  angles.second,
                length: radius * 0.85,
                width:  diameter / 200.0
            },
            &theme.second_hand
        )
    ];

    let center = Point {
        x: radius,
        y: radius
    };
    for (hand, color) in &hands {
        let tip = point_by_degree(hand.angle, hand.length, radius, radius);
        svg.push_str(&line(hand.class, center, tip, &color.to_string(), hand.width));
    }

    svg.push_str(&format!(
        "<circle class=\"clock-center\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"{fill}\"/>",
        c = num(radius),
        r = num(diameter / 40.0),
        fill = theme.center
    ));

    svg.push_str("</svg>");
    svg
}

fn line(class: &str, from: Point, to: Point, stroke: &str, width: f64) -> String {
    format!(
        "<line class=\"{class}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
        num(from.x),
        num(from.y),
        num(to.x),
        num(to.y),
        num(width)
    )
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
