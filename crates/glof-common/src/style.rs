//! Color scale for hazard rendering.
//!
//! Defines the continuous gradient used to turn a hazard probability into a
//! marker fill color, plus the small color type shared by the renderer and
//! the legend.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ffa500`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        let lerp_u8 = |a: u8, b: u8| -> u8 {
            ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8
        };

        Color {
            r: lerp_u8(self.r, other.r),
            g: lerp_u8(self.g, other.g),
            b: lerp_u8(self.b, other.b),
        }
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// The data value at this stop
    pub value: f64,

    /// The color at this stop
    pub color: Color,
}

/// Continuous gradient color mapping over ordered stops.
///
/// Values outside the stop range clamp to the boundary stops. Out-of-range
/// input is expected and never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScale {
    /// Color stops defining the gradient, in ascending value order
    pub stops: Vec<ColorStop>,
}

impl ColorScale {
    /// The fixed hazard gradient: green, yellow, orange, red, darkred
    /// evenly spaced over [0, 1].
    pub fn hazard() -> Self {
        Self {
            stops: vec![
                ColorStop { value: 0.0, color: Color::new(0, 128, 0) },
                ColorStop { value: 0.25, color: Color::new(255, 255, 0) },
                ColorStop { value: 0.5, color: Color::new(255, 165, 0) },
                ColorStop { value: 0.75, color: Color::new(255, 0, 0) },
                ColorStop { value: 1.0, color: Color::new(139, 0, 0) },
            ],
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stops.len() < 2 {
            return Err("Color scale must have at least 2 stops".to_string());
        }

        // Check stops are in ascending order
        for i in 1..self.stops.len() {
            if self.stops[i].value <= self.stops[i - 1].value {
                return Err("Color stops must be in ascending value order".to_string());
            }
        }

        Ok(())
    }

    /// Interpolate the color for a given value.
    ///
    /// NaN clamps to the first stop, the same as any below-range value.
    pub fn color_at(&self, value: f64) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::new(0, 0, 0),
        };

        if value.is_nan() || value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }

        // Find bracketing stops
        for i in 1..self.stops.len() {
            if value <= self.stops[i].value {
                let low = &self.stops[i - 1];
                let high = &self.stops[i];
                let t = (value - low.value) / (high.value - low.value);
                return low.color.lerp(&high.color, t);
            }
        }

        last.color
    }

    /// The value range covered by the stops.
    pub fn domain(&self) -> (f64, f64) {
        let min = self.stops.first().map(|s| s.value).unwrap_or(0.0);
        let max = self.stops.last().map(|s| s.value).unwrap_or(1.0);
        (min, max)
    }
}
