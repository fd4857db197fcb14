// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns layout, style and animation state into a [`RenderPlan`].

use kurbo::{Circle, Line, Point, Rect, Size, Stroke, Vec2};
use peniko::Color;
use understory_avatar_geometry::AvatarLayout;
use understory_progress_animation::AnimationDrawingState;

use crate::{AvatarStyle, DrawOp, ImageShader, RenderPlan, StateOp};

/// Color of the layout guides.
pub const DEBUG_GUIDE_COLOR: Color = Color::from_rgba8(255, 0, 0, 255);

/// On/off dash lengths of the layout guides.
pub const DEBUG_GUIDE_DASHES: [f64; 4] = [5.0, 5.0, 5.0, 5.0];

/// Everything one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct RenderInputs<'a> {
    /// Full widget size; the offscreen layer covers it.
    pub size: Size,
    /// Appearance.
    pub style: &'a AvatarStyle,
    /// Circles derived from size and style.
    pub layout: &'a AvatarLayout,
    /// Positioned image, if any.
    pub shader: Option<&'a ImageShader>,
    /// Ring state; `None` draws no ring.
    pub progress: Option<&'a AnimationDrawingState>,
}

/// Builds the op list for one frame.
///
/// The avatar body is drawn inside one layer so that clearing the badge only
/// punches through the avatar, not through whatever is behind the widget.
/// The progress ring and the guides are drawn after the layer closes.
#[must_use]
pub fn derive(inputs: &RenderInputs<'_>) -> RenderPlan {
    let RenderInputs {
        size,
        style,
        layout,
        shader,
        progress,
    } = *inputs;
    let mut plan = RenderPlan::default();

    plan.push_state(StateOp::PushLayer {
        bounds: Rect::from_origin_size(Point::ORIGIN, size),
    });
    if style.background_color.components[3] > 0.0 {
        plan.push_draw(DrawOp::FillCircle {
            circle: layout.drawable,
            color: style.background_color,
        });
    }
    if let Some(shader) = shader {
        plan.push_draw(DrawOp::FillImageCircle {
            circle: layout.drawable,
            shader: shader.clone(),
            alpha: style.image_alpha,
            color_filter: style.color_filter,
        });
    }
    if style.border_width > 0.0 {
        plan.push_draw(DrawOp::StrokeCircle {
            circle: layout.border,
            stroke: Stroke::new(style.border_width),
            color: style.border_color,
        });
    }
    plan.push_draw(DrawOp::ClearCircle {
        circle: layout.badge,
    });
    plan.push_state(StateOp::PopLayer);

    if let Some(state) = progress {
        push_ring(&mut plan, style, layout.border, state);
    }
    if style.debug_guides {
        push_guides(&mut plan, layout.bounds);
    }
    plan
}

/// Broken arches first, then the main arc closing the rest of the circle.
fn push_ring(
    plan: &mut RenderPlan,
    style: &AvatarStyle,
    ring: Circle,
    state: &AnimationDrawingState,
) {
    let start = state.ring_start_degrees();
    let area = state
        .arches_area_in_degrees(style.ring.max_arches_span)
        .clamp(0.0, 360.0);
    let stroke = Stroke::new(style.ring_width());
    let color = style.ring_color();

    if area > 0.0 && style.ring.arch_count > 0 {
        let slot = area / f64::from(style.ring.arch_count);
        for i in 0..style.ring.arch_count {
            plan.push_draw(DrawOp::StrokeArc {
                arc: ring_arc(ring, start + slot * f64::from(i), slot / 2.0),
                stroke: stroke.clone(),
                color,
            });
        }
    }

    let sweep = 360.0 - area;
    if sweep > 0.0 {
        plan.push_draw(DrawOp::StrokeArc {
            arc: ring_arc(ring, start + area, sweep),
            stroke,
            color,
        });
    }
}

fn ring_arc(circle: Circle, start_degrees: f64, sweep_degrees: f64) -> kurbo::Arc {
    kurbo::Arc {
        center: circle.center,
        radii: Vec2::new(circle.radius, circle.radius),
        start_angle: start_degrees.to_radians(),
        sweep_angle: sweep_degrees.to_radians(),
        x_rotation: 0.0,
    }
}

/// Center cross plus the two diagonals toward the bottom-right quadrant.
fn push_guides(plan: &mut RenderPlan, bounds: Rect) {
    let c = bounds.center();
    let lines = [
        Line::new((bounds.x0, c.y), (bounds.x1, c.y)),
        Line::new((c.x, bounds.y0), (c.x, bounds.y1)),
        Line::new(c, (bounds.x1, bounds.y1)),
        Line::new((c.x, bounds.y1), (bounds.x1, c.y)),
    ];
    let stroke = Stroke::new(1.0).with_dashes(0.0, DEBUG_GUIDE_DASHES);
    for line in lines {
        plan.push_draw(DrawOp::DebugLine {
            line,
            stroke: stroke.clone(),
            color: DEBUG_GUIDE_COLOR,
        });
    }
}
