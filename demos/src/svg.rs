// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattens a render plan into a standalone SVG document.
//!
//! Layers are not composited: cleared circles are drawn as white cut-outs,
//! which is only correct on a white page.

use std::fmt::Write as _;

use kurbo::Size;
use peniko::Color;
use understory_avatar::{DrawOp, RenderPlan};

/// Flattening tolerance for curves.
const TOLERANCE: f64 = 0.1;

/// Renders `plan` for a widget of `size`.
pub fn to_svg(plan: &RenderPlan, size: Size) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        size.width, size.height
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    for op in plan.draws() {
        let fill = match op {
            DrawOp::FillCircle { color, .. }
            | DrawOp::StrokeCircle { color, .. }
            | DrawOp::StrokeArc { color, .. }
            | DrawOp::DebugLine { color, .. } => css(*color),
            // No rasterizer here; images show as mid grey.
            DrawOp::FillImageCircle { .. } => String::from("#808080"),
            DrawOp::ClearCircle { .. } => String::from("white"),
        };
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{fill}"/>"#,
            op.to_path(TOLERANCE).to_svg()
        );
    }
    out.push_str("</svg>\n");
    out
}

fn css(color: Color) -> String {
    let c = color.to_rgba8();
    format!(
        "rgba({},{},{},{:.3})",
        c.r,
        c.g,
        c.b,
        f64::from(c.a) / 255.0
    )
}
