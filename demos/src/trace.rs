// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that logs every op it receives.

use understory_avatar::{AvatarCanvas, DrawOp, StateOp};

/// Logs ops at `info` level, indented by layer depth.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    depth: usize,
    draws: usize,
}

impl TraceCanvas {
    /// Number of draw ops seen so far.
    pub fn draw_count(&self) -> usize {
        self.draws
    }
}

impl AvatarCanvas for TraceCanvas {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::PushLayer { bounds } => {
                log::info!("{:indent$}push layer {bounds:?}", "", indent = self.depth * 2);
                self.depth += 1;
            }
            StateOp::PopLayer => {
                self.depth = self.depth.saturating_sub(1);
                log::info!("{:indent$}pop layer", "", indent = self.depth * 2);
            }
        }
    }

    fn draw(&mut self, op: DrawOp) {
        self.draws += 1;
        let indent = self.depth * 2;
        match &op {
            DrawOp::FillCircle { circle, .. } => {
                log::info!("{:indent$}fill {:?} r={:.1}", "", circle.center, circle.radius);
            }
            DrawOp::FillImageCircle { circle, shader, .. } => {
                log::info!(
                    "{:indent$}image {}x{} into r={:.1}",
                    "",
                    shader.image.desc().width,
                    shader.image.desc().height,
                    circle.radius
                );
            }
            DrawOp::StrokeCircle { circle, stroke, .. } => {
                log::info!("{:indent$}border r={:.1} w={}", "", circle.radius, stroke.width);
            }
            DrawOp::ClearCircle { circle } => {
                log::info!("{:indent$}clear badge r={:.1}", "", circle.radius);
            }
            DrawOp::StrokeArc { arc, .. } => {
                log::info!(
                    "{:indent$}arc start={:.1} sweep={:.1} deg",
                    "",
                    arc.start_angle.to_degrees(),
                    arc.sweep_angle.to_degrees()
                );
            }
            DrawOp::DebugLine { line, .. } => {
                log::debug!("{:indent$}guide {:?} -> {:?}", "", line.p0, line.p1);
            }
        }
    }
}
