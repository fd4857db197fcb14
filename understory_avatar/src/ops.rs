// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic draw operations emitted by the composer.

use std::sync::Arc;

use kurbo::{Affine, BezPath, Circle, Line, Rect, Shape, Stroke, StrokeOpts};
use peniko::Color;

use crate::{AvatarImage, ColorFilter};

/// An image positioned in widget coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageShader {
    /// The bitmap.
    pub image: Arc<AvatarImage>,
    /// Image pixel space to widget space.
    pub transform: Affine,
}

/// Operations that change compositing state without producing pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Begin an offscreen layer covering `bounds`.
    ///
    /// Draws until the matching [`StateOp::PopLayer`] composite into the layer,
    /// so a [`DrawOp::ClearCircle`] only erases what the layer holds.
    PushLayer {
        /// Layer extent.
        bounds: Rect,
    },
    /// Composite the top layer onto whatever is below it.
    PopLayer,
}

/// Operations that produce pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Solid fill of a circle.
    FillCircle {
        /// Shape.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// Fill of a circle with an image.
    FillImageCircle {
        /// Shape.
        circle: Circle,
        /// Image and its placement.
        shader: ImageShader,
        /// Paint opacity.
        alpha: u8,
        /// Optional tint.
        color_filter: Option<ColorFilter>,
    },
    /// Stroke centered on a circle.
    StrokeCircle {
        /// Shape.
        circle: Circle,
        /// Stroke parameters.
        stroke: Stroke,
        /// Stroke color.
        color: Color,
    },
    /// Makes a circle fully transparent in the current layer.
    ClearCircle {
        /// Shape.
        circle: Circle,
    },
    /// Stroke of a circular arc.
    StrokeArc {
        /// Shape; angles in radians, clockwise from the positive x axis.
        arc: kurbo::Arc,
        /// Stroke parameters.
        stroke: Stroke,
        /// Stroke color.
        color: Color,
    },
    /// Dashed layout guide.
    DebugLine {
        /// Shape.
        line: Line,
        /// Stroke parameters, including the dash pattern.
        stroke: Stroke,
        /// Stroke color.
        color: Color,
    },
}

impl DrawOp {
    /// Area this op touches, as a fillable outline.
    ///
    /// Fills and clears return the circle itself; strokes are expanded into
    /// their stroked outline (dashes included) within `tolerance`.
    #[must_use]
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::FillCircle { circle, .. }
            | Self::FillImageCircle { circle, .. }
            | Self::ClearCircle { circle } => circle.to_path(tolerance),
            Self::StrokeCircle { circle, stroke, .. } => stroke_outline(circle, stroke, tolerance),
            Self::StrokeArc { arc, stroke, .. } => stroke_outline(arc, stroke, tolerance),
            Self::DebugLine { line, stroke, .. } => stroke_outline(line, stroke, tolerance),
        }
    }
}

fn stroke_outline(shape: &impl Shape, stroke: &Stroke, tolerance: f64) -> BezPath {
    kurbo::stroke(
        shape.path_elements(tolerance),
        stroke,
        &StrokeOpts::default(),
        tolerance,
    )
}

/// Either kind of operation, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum AvatarOp {
    /// State change.
    State(StateOp),
    /// Pixels.
    Draw(DrawOp),
}

/// Consumer of avatar operations: a renderer, a recorder, or an adapter.
pub trait AvatarCanvas {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// The ordered operations that paint one avatar frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPlan {
    ops: Vec<AvatarOp>,
}

impl RenderPlan {
    /// Wraps an op list.
    #[must_use]
    pub fn new(ops: Vec<AvatarOp>) -> Self {
        Self { ops }
    }

    /// Operations in order.
    #[must_use]
    pub fn ops(&self) -> &[AvatarOp] {
        &self.ops
    }

    /// Takes the op list.
    #[must_use]
    pub fn into_ops(self) -> Vec<AvatarOp> {
        self.ops
    }

    /// Returns `true` if nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Draw ops only, in order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops.iter().filter_map(|op| match op {
            AvatarOp::Draw(draw) => Some(draw),
            AvatarOp::State(_) => None,
        })
    }

    /// Feeds every op to `canvas` in order.
    pub fn replay(&self, canvas: &mut dyn AvatarCanvas) {
        for op in &self.ops {
            match op {
                AvatarOp::State(op) => canvas.state(op.clone()),
                AvatarOp::Draw(op) => canvas.draw(op.clone()),
            }
        }
    }

    pub(crate) fn push_state(&mut self, op: StateOp) {
        self.ops.push(AvatarOp::State(op));
    }

    pub(crate) fn push_draw(&mut self, op: DrawOp) {
        self.ops.push(AvatarOp::Draw(op));
    }
}
