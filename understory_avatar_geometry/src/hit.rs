// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::AvatarLayout;

/// Returns `true` if a touch at `pt` should be handled by the avatar.
///
/// Only points within the border circle are accepted. Points with a
/// non-positive coordinate and layouts with empty bounds are always accepted,
/// since hosts report such coordinates for events that did not originate over
/// the widget.
#[must_use]
pub fn in_touchable_area(layout: &AvatarLayout, pt: Point) -> bool {
    if pt.x <= 0.0 || pt.y <= 0.0 || layout.is_empty() {
        return true;
    }
    let r = layout.border.radius;
    (pt - layout.border.center).hypot2() <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_layout;
    use kurbo::{Insets, Size};

    #[test]
    fn accepts_inside_and_rejects_corners() {
        let layout = compute_layout(Size::new(200.0, 200.0), Insets::ZERO, 10.0, 0.0);
        assert!(in_touchable_area(&layout, Point::new(100.0, 100.0)));
        assert!(in_touchable_area(&layout, Point::new(100.0, 5.0)));
        assert!(!in_touchable_area(&layout, Point::new(195.0, 195.0)));
        assert!(!in_touchable_area(&layout, Point::new(3.0, 3.0)));
    }

    #[test]
    fn boundary_point_is_inside() {
        let layout = compute_layout(Size::new(200.0, 200.0), Insets::ZERO, 10.0, 0.0);
        assert!(in_touchable_area(&layout, Point::new(195.0, 100.0)));
        assert!(!in_touchable_area(&layout, Point::new(195.5, 100.0)));
    }

    #[test]
    fn origin_and_empty_layouts_always_hit() {
        let layout = compute_layout(Size::new(200.0, 200.0), Insets::ZERO, 10.0, 0.0);
        assert!(in_touchable_area(&layout, Point::ORIGIN));
        assert!(in_touchable_area(&layout, Point::new(-4.0, 150.0)));
        assert!(in_touchable_area(&AvatarLayout::EMPTY, Point::new(50.0, 50.0)));
    }
}
