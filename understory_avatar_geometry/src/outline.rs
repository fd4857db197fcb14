// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::RoundedRect;

use crate::AvatarLayout;

/// Pill-shaped outline around the avatar, used for shadows and view clipping.
///
/// The bounds are rounded outward to whole pixels and the corner radius is
/// half the rounded width, which makes a circle for square bounds.
#[must_use]
pub fn outline(layout: &AvatarLayout) -> RoundedRect {
    let rect = layout.bounds.expand();
    RoundedRect::from_rect(rect, rect.width() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_layout;
    use kurbo::{Insets, Rect, Size};

    #[test]
    fn outline_rounds_out_fractional_bounds() {
        // 101 x 100 leaves a half-pixel offset on x.
        let layout = compute_layout(Size::new(101.0, 100.0), Insets::ZERO, 0.0, 0.0);
        assert_eq!(layout.bounds.x0, 0.5);

        let rr = outline(&layout);
        assert_eq!(rr.rect(), Rect::new(0.0, 0.0, 101.0, 100.0));
    }

    #[test]
    fn square_bounds_give_a_circle() {
        let layout = compute_layout(Size::new(80.0, 120.0), Insets::ZERO, 4.0, 0.0);
        let rr = outline(&layout);
        assert_eq!(rr.rect(), Rect::new(0.0, 20.0, 80.0, 100.0));
        assert_eq!(rr.radii().as_single_radius(), Some(40.0));
    }
}
