//! Colors and gradients for height-mapped terrain.
//!
//! [`Rgba`] is a plain float color with exact equality, which matters for the
//! terrain mask pass: a mask sample counts as a wall only when it equals pure
//! white bit for bit. [`Gradient`] maps a normalized height in `[0, 1]` to a
//! color through sorted [`ColorStop`]s, and [`presets`] ships ready-made
//! elevation ramps.
//!
//! # Example
//!
//! ```
//! use relief_color::{Gradient, Rgba};
//!
//! let ramp = Gradient::two_color(Rgba::BLACK, Rgba::WHITE);
//! let mid = ramp.sample(0.5);
//! assert!((mid.r - 0.5).abs() < 0.001);
//! ```

// ===== Rgba =====

/// An RGBA color with `f32` channels, nominally in `[0, 1]`.
///
/// Equality is exact per channel. Comparisons against sentinel colors such as
/// [`Rgba::WHITE`] rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from channel values.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from 8-bit channels. 255 maps to exactly 1.0.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Linearly interpolates toward `other` by `t`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

// ===== Gradient =====

/// A color keyed to a position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, in `[0, 1]`.
    pub position: f32,
    /// Color at this position.
    pub color: Rgba,
}

impl ColorStop {
    /// Creates a stop at `position`.
    pub fn new(position: f32, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// A piecewise-linear color ramp over `[0, 1]`.
///
/// Stops are kept sorted by position. Sampling clamps its input, so callers
/// can hand in unnormalized values without wrapping artifacts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Creates an empty gradient. Sampling an empty gradient returns black.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Creates a two-stop gradient from `start` at 0 to `end` at 1.
    pub fn two_color(start: Rgba, end: Rgba) -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
        }
    }

    /// Creates a gradient with the given colors evenly spaced over `[0, 1]`.
    pub fn from_colors(colors: &[Rgba]) -> Self {
        let mut gradient = Self::new();
        if colors.len() == 1 {
            gradient.add_stop(0.0, colors[0]);
            return gradient;
        }
        let last = (colors.len().max(2) - 1) as f32;
        for (i, &color) in colors.iter().enumerate() {
            gradient.add_stop(i as f32 / last, color);
        }
        gradient
    }

    /// Inserts a stop, keeping the stop list sorted by position.
    pub fn add_stop(&mut self, position: f32, color: Rgba) {
        self.stops.push(ColorStop::new(position, color));
        self.stops
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Samples the gradient at `t`, clamped to `[0, 1]`.
    ///
    /// Returns black for an empty gradient and the single stop's color for a
    /// one-stop gradient.
    pub fn sample(&self, t: f32) -> Rgba {
        if self.stops.is_empty() {
            return Rgba::BLACK;
        }
        if self.stops.len() == 1 {
            return self.stops[0].color;
        }

        let t = t.clamp(0.0, 1.0);
        if t <= self.stops[0].position {
            return self.stops[0].color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                return lo.color.lerp(hi.color, (t - lo.position) / span);
            }
        }

        self.stops[self.stops.len() - 1].color
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the gradient has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The sorted stops.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

// ===== Presets =====

/// Ready-made gradients.
pub mod presets {
    use super::{Gradient, Rgba};

    /// Terrain elevation ramp: deep water through sand, grass, and rock up to
    /// snow.
    pub fn elevation() -> Gradient {
        let mut g = Gradient::new();
        g.add_stop(0.0, Rgba::from_u8(22, 60, 112, 255));
        g.add_stop(0.18, Rgba::from_u8(66, 120, 179, 255));
        g.add_stop(0.3, Rgba::from_u8(210, 196, 140, 255));
        g.add_stop(0.45, Rgba::from_u8(86, 140, 62, 255));
        g.add_stop(0.7, Rgba::from_u8(56, 90, 48, 255));
        g.add_stop(0.85, Rgba::from_u8(120, 112, 104, 255));
        g.add_stop(1.0, Rgba::from_u8(240, 244, 248, 255));
        g
    }

    /// Black-to-white ramp.
    pub fn grayscale() -> Gradient {
        Gradient::two_color(Rgba::BLACK, Rgba::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_equality_is_exact() {
        assert_eq!(Rgba::new(1.0, 1.0, 1.0, 1.0), Rgba::WHITE);
        assert_ne!(Rgba::new(0.999, 1.0, 1.0, 1.0), Rgba::WHITE);
        assert_eq!(Rgba::from_u8(255, 255, 255, 255), Rgba::WHITE);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert!((mid.g - 0.5).abs() < 0.001);
        assert!((mid.b - 0.5).abs() < 0.001);
        assert!((mid.a - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_sample_endpoints() {
        let g = Gradient::two_color(Rgba::BLACK, Rgba::WHITE);
        assert_eq!(g.sample(0.0), Rgba::BLACK);
        assert_eq!(g.sample(1.0), Rgba::WHITE);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let g = Gradient::two_color(Rgba::BLACK, Rgba::WHITE);
        assert_eq!(g.sample(-2.0), g.sample(0.0));
        assert_eq!(g.sample(5.0), g.sample(1.0));
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let g = Gradient::two_color(Rgba::rgb(0.0, 0.0, 0.0), Rgba::rgb(1.0, 0.0, 0.0));
        let c = g.sample(0.25);
        assert!((c.r - 0.25).abs() < 0.001);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn test_empty_gradient_samples_black() {
        let g = Gradient::new();
        assert_eq!(g.sample(0.5), Rgba::BLACK);
        assert!(g.is_empty());
    }

    #[test]
    fn test_single_stop_gradient() {
        let mut g = Gradient::new();
        g.add_stop(0.4, Rgba::rgb(0.2, 0.3, 0.4));
        assert_eq!(g.sample(0.0), Rgba::rgb(0.2, 0.3, 0.4));
        assert_eq!(g.sample(1.0), Rgba::rgb(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_add_stop_keeps_order() {
        let mut g = Gradient::new();
        g.add_stop(0.8, Rgba::WHITE);
        g.add_stop(0.2, Rgba::BLACK);
        g.add_stop(0.5, Rgba::rgb(0.5, 0.5, 0.5));
        let positions: Vec<f32> = g.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.2, 0.5, 0.8]);
    }

    #[test]
    fn test_from_colors_spacing() {
        let g = Gradient::from_colors(&[Rgba::BLACK, Rgba::rgb(0.5, 0.5, 0.5), Rgba::WHITE]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.stops()[1].position, 0.5);
        assert_eq!(g.sample(0.5), Rgba::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_elevation_preset_covers_range() {
        let g = presets::elevation();
        assert!(g.len() >= 2);
        assert_ne!(g.sample(0.0), g.sample(1.0));
    }
}
