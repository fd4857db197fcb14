// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{BlendMode, Color};

/// Default widest angle, in degrees, covered by the broken arches at full expansion.
pub const DEFAULT_MAX_ARCHES_SPAN: f64 = 90.0;

/// Default number of broken arches drawn ahead of the main arc.
pub const DEFAULT_ARCH_COUNT: u32 = 3;

/// Stroke width used for the progress ring when the border has none.
pub const HAIRLINE_WIDTH: f64 = 1.0;

/// Tint applied to the image paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorFilter {
    /// Tint color.
    pub color: Color,
    /// How the tint combines with the image.
    pub blend: BlendMode,
}

impl ColorFilter {
    /// A tint with the given blend mode.
    #[must_use]
    pub fn new(color: Color, blend: impl Into<BlendMode>) -> Self {
        Self {
            color,
            blend: blend.into(),
        }
    }
}

/// Appearance of the animated progress ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingStyle {
    /// Degrees covered by the arches when fully expanded.
    pub max_arches_span: f64,
    /// Number of arches splitting that span.
    pub arch_count: u32,
    /// Ring color; `None` reuses the border color.
    pub color: Option<Color>,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            max_arches_span: DEFAULT_MAX_ARCHES_SPAN,
            arch_count: DEFAULT_ARCH_COUNT,
            color: None,
        }
    }
}

/// Everything that decides how an avatar looks, apart from its size and image.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarStyle {
    /// Border stroke width in pixels; zero draws no border.
    pub border_width: f64,
    /// Border stroke color.
    pub border_color: Color,
    /// Fill behind the image; fully transparent draws nothing.
    pub background_color: Color,
    /// Requested badge radius in pixels; zero fits the corner.
    pub badge_width: f64,
    /// Image opacity.
    pub image_alpha: u8,
    /// Optional tint over the image.
    pub color_filter: Option<ColorFilter>,
    /// Draw dashed layout guides on top.
    pub debug_guides: bool,
    /// Progress ring appearance.
    pub ring: RingStyle,
}

impl AvatarStyle {
    /// Width of the progress ring stroke.
    #[must_use]
    pub fn ring_width(&self) -> f64 {
        if self.border_width > 0.0 {
            self.border_width
        } else {
            HAIRLINE_WIDTH
        }
    }

    /// Color of the progress ring stroke.
    #[must_use]
    pub fn ring_color(&self) -> Color {
        self.ring.color.unwrap_or(self.border_color)
    }
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            badge_width: 0.0,
            image_alpha: u8::MAX,
            color_filter: None,
            debug_guides: false,
            ring: RingStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_falls_back_to_hairline_and_border_color() {
        let mut style = AvatarStyle::default();
        assert_eq!(style.ring_width(), HAIRLINE_WIDTH);
        assert_eq!(style.ring_color(), Color::BLACK);

        style.border_width = 6.0;
        style.ring.color = Some(Color::WHITE);
        assert_eq!(style.ring_width(), 6.0);
        assert_eq!(style.ring_color(), Color::WHITE);
    }
}
