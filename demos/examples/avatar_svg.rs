// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes an SVG of a progress avatar, mid-spin, to stdout.
//!
//! Examples:
//!   `cargo run -p understory_avatar_demos --example avatar_svg > avatar.svg`
//!   `cargo run -p understory_avatar_demos --example avatar_svg -- guides > avatar.svg`

use std::env;
use std::time::Duration;

use kurbo::{Insets, Size};
use peniko::Color;
use understory_avatar::{AvatarStyle, CircleProgressView, ImageSource};
use understory_avatar_demos::svg::to_svg;
use understory_progress_animation::Phase;

fn main() {
    env_logger::init();
    let guides = env::args().any(|arg| arg == "guides");

    let size = Size::new(160.0, 160.0);
    let mut view = CircleProgressView::new(AvatarStyle {
        border_width: 6.0,
        border_color: Color::from_rgb8(0x43, 0xa0, 0x47),
        debug_guides: guides,
        ..AvatarStyle::default()
    });
    view.view_mut().set_size(size);
    view.view_mut().set_padding(Insets::uniform(8.0));
    view.view_mut()
        .set_image(Some(ImageSource::Color(Color::from_rgb8(0x90, 0xca, 0xf9))));

    view.start_progress();
    while view.phase() != Phase::ProgressRunning {
        view.on_frame(Duration::from_millis(50));
    }
    view.on_frame(Duration::from_millis(300));

    print!("{}", to_svg(&view.paint(), size));
}
