// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a progress avatar with a fixed frame clock and logs every op.
//!
//! The optional argument is the number of 125 ms frames to run before the
//! ring is stopped (default 6).
//!
//! Examples:
//!   `RUST_LOG=info cargo run -p understory_avatar_demos --example avatar_trace`
//!   `RUST_LOG=trace cargo run -p understory_avatar_demos --example avatar_trace -- 20`

use std::env;
use std::time::Duration;

use kurbo::Size;
use peniko::Color;
use understory_avatar::{AvatarStyle, CircleProgressView, ImageSource};
use understory_avatar_demos::trace::TraceCanvas;

const FRAME: Duration = Duration::from_millis(125);

fn main() {
    env_logger::init();

    let frames: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(6);

    let mut view = CircleProgressView::new(AvatarStyle {
        border_width: 4.0,
        border_color: Color::from_rgb8(0x1e, 0x88, 0xe5),
        background_color: Color::from_rgb8(0xee, 0xee, 0xee),
        ..AvatarStyle::default()
    });
    view.view_mut().set_size(Size::new(96.0, 96.0));
    view.view_mut()
        .set_image(Some(ImageSource::Color(Color::from_rgb8(0xff, 0xb3, 0x00))));

    let mut canvas = TraceCanvas::default();
    let mut paint = |view: &mut CircleProgressView, label: &str| {
        if view.view_mut().take_paint_request() {
            log::info!("-- {label} ({:?})", view.phase());
            view.paint().replay(&mut canvas);
        }
    };

    paint(&mut view, "initial");
    view.start_progress();
    for frame in 0..frames {
        if !view.scheduler_mut().take_request() {
            break;
        }
        view.on_frame(FRAME);
        paint(&mut view, &format!("frame {frame}"));
    }

    view.stop_progress();
    let mut frame = 0;
    while view.scheduler_mut().take_request() {
        view.on_frame(FRAME);
        paint(&mut view, &format!("collapse {frame}"));
        frame += 1;
    }

    println!("{} draw ops, final state {:?}", canvas.draw_count(), view.animation_state());
}
