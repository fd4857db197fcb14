// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Insets, Point, Rect, Size};

/// Gap between the border stroke and the drawable (image) circle, in pixels.
pub const DRAWABLE_INNER_MARGIN: f64 = 15.0;

/// Angle of the badge center on the border circle, measured so that
/// `x = sin(angle)` and `y = cos(angle)`; 45° puts it bottom-right.
pub const BADGE_ANGLE: f64 = core::f64::consts::FRAC_PI_4;

/// All circles needed to paint one avatar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarLayout {
    /// Largest centered square inside the padded widget box.
    pub bounds: Rect,
    /// Circle the border stroke is centered on.
    pub border: Circle,
    /// `bounds` inset by the border width plus [`DRAWABLE_INNER_MARGIN`].
    pub drawable_rect: Rect,
    /// Circle the background and image are painted into.
    pub drawable: Circle,
    /// Corner badge circle.
    pub badge: Circle,
}

impl AvatarLayout {
    /// Layout of a zero-size widget.
    pub const EMPTY: Self = Self {
        bounds: Rect::ZERO,
        border: Circle {
            center: Point::ZERO,
            radius: 0.0,
        },
        drawable_rect: Rect::ZERO,
        drawable: Circle {
            center: Point::ZERO,
            radius: 0.0,
        },
        badge: Circle {
            center: Point::ZERO,
            radius: 0.0,
        },
    };

    /// Returns `true` if the bounds have no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0
    }
}

impl Default for AvatarLayout {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Derives every circle of an avatar from the widget size and style.
///
/// - `padding` is subtracted from `size` before squaring; negative sides are
///   treated as zero.
/// - `border_width` is clamped to be non-negative.
/// - `badge_width` is the requested badge radius; zero or negative means
///   "fill the corner", and requests larger than the corner are clamped.
#[must_use]
pub fn compute_layout(size: Size, padding: Insets, border_width: f64, badge_width: f64) -> AvatarLayout {
    let border_width = border_width.max(0.0);
    let bounds = bounding_square(size, padding);
    let border = border_circle(bounds, border_width);
    let drawable_rect = drawable_rect(bounds, border_width);
    // The drawable rect is square here, so `max` and `min` agree; `max` is kept
    // for non-square rects where it overflows the inscribed circle.
    let drawable_radius = (drawable_rect.height() / 2.0).max(drawable_rect.width() / 2.0);
    AvatarLayout {
        bounds,
        border,
        drawable_rect,
        drawable: Circle::new(drawable_rect.center(), drawable_radius),
        badge: badge_circle(bounds, border, badge_width),
    }
}

/// Returns the largest square centered inside `size` minus `padding`.
#[must_use]
pub fn bounding_square(size: Size, padding: Insets) -> Rect {
    let left = padding.x0.max(0.0);
    let top = padding.y0.max(0.0);
    let available_width = (size.width - left - padding.x1.max(0.0)).max(0.0);
    let available_height = (size.height - top - padding.y1.max(0.0)).max(0.0);

    let side = available_width.min(available_height);
    let x0 = left + (available_width - side) / 2.0;
    let y0 = top + (available_height - side) / 2.0;
    Rect::new(x0, y0, x0 + side, y0 + side)
}

/// Circle the border stroke is centered on, so the stroke stays inside `bounds`.
#[must_use]
pub fn border_circle(bounds: Rect, border_width: f64) -> Circle {
    let radius = ((bounds.height() - border_width) / 2.0)
        .min((bounds.width() - border_width) / 2.0)
        .max(0.0);
    Circle::new(bounds.center(), radius)
}

/// Shrinks `bounds` by the border width plus [`DRAWABLE_INNER_MARGIN`] on every side.
///
/// An axis that would invert collapses to the center of `bounds`.
#[must_use]
pub fn drawable_rect(bounds: Rect, border_width: f64) -> Rect {
    let inset = border_width + DRAWABLE_INNER_MARGIN;
    let center = bounds.center();
    let (x0, x1) = shrink_axis(bounds.x0, bounds.x1, inset, center.x);
    let (y0, y1) = shrink_axis(bounds.y0, bounds.y1, inset, center.y);
    Rect::new(x0, y0, x1, y1)
}

fn shrink_axis(min: f64, max: f64, inset: f64, center: f64) -> (f64, f64) {
    let (lo, hi) = (min + inset, max - inset);
    if lo > hi { (center, center) } else { (lo, hi) }
}

/// Places the badge on `border` at [`BADGE_ANGLE`] and sizes it to the corner.
///
/// The radius is the distance from the badge center to the nearer of the
/// right and bottom edges of `bounds`; `badge_width` replaces it only when it
/// is positive and fits.
#[must_use]
pub fn badge_circle(bounds: Rect, border: Circle, badge_width: f64) -> Circle {
    let center = Point::new(
        border.center.x + BADGE_ANGLE.sin() * border.radius,
        border.center.y + BADGE_ANGLE.cos() * border.radius,
    );
    let max_radius = (bounds.x1 - center.x).min(bounds.y1 - center.y).max(0.0);
    let radius = if badge_width <= 0.0 || badge_width > max_radius {
        max_radius
    } else {
        badge_width
    };
    Circle::new(center, radius)
}
