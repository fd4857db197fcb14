// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Avatar: circular avatar widgets as backend-agnostic op lists.
//!
//! An avatar is an image cropped into a circle, with an optional background
//! fill, a border stroke, and a transparent badge hole on the bottom-right of
//! the border. A progress variant adds an animated ring around it.
//!
//! # Layers
//!
//! - **Geometry** comes from [`understory_avatar_geometry`]: all circles are
//!   derived from size, padding and style by pure functions.
//! - **Animation** comes from [`understory_progress_animation`]: a host-clocked
//!   orchestrator writes an [`AnimationDrawingState`] each frame.
//! - **Composition** (this crate): [`derive`] turns layout, style, image and
//!   ring state into a [`RenderPlan`] of [`StateOp`]s and [`DrawOp`]s, which any
//!   [`AvatarCanvas`] can replay.
//! - **Views**: [`CircleBadgeView`] and [`CircleProgressView`] hold the state a
//!   widget needs between frames and only redo work when inputs change.
//!
//! # Plan order
//!
//! 1. push a layer over the widget rect,
//! 2. background fill, image fill, border stroke,
//! 3. clear the badge circle,
//! 4. pop the layer,
//! 5. progress arches and main arc (progress view only),
//! 6. dashed layout guides when enabled.
//!
//! ```rust
//! use kurbo::Size;
//! use peniko::Color;
//! use understory_avatar::{AvatarOp, AvatarStyle, CircleBadgeView, DrawOp, StateOp};
//!
//! let style = AvatarStyle {
//!     border_width: 4.0,
//!     background_color: Color::WHITE,
//!     ..AvatarStyle::default()
//! };
//! let mut view = CircleBadgeView::new(style);
//! view.set_size(Size::new(64.0, 64.0));
//!
//! let plan = view.paint();
//! assert!(matches!(plan.ops()[0], AvatarOp::State(StateOp::PushLayer { .. })));
//! assert!(matches!(plan.ops()[3], AvatarOp::Draw(DrawOp::ClearCircle { .. })));
//! assert!(matches!(plan.ops()[4], AvatarOp::State(StateOp::PopLayer)));
//! ```
//!
//! Image decoding uses the `image` crate; failures are reported through the
//! `log` facade and the avatar paints without an image.

mod compose;
mod error;
mod ops;
mod progress;
mod source;
mod style;
mod view;

pub use compose::{DEBUG_GUIDE_COLOR, DEBUG_GUIDE_DASHES, RenderInputs, derive};
pub use error::{ConfigError, ImageLoadError, ScaleMode};
pub use ops::{AvatarCanvas, AvatarOp, DrawOp, ImageShader, RenderPlan, StateOp};
pub use progress::CircleProgressView;
pub use source::{
    AvatarImage, COLOR_IMAGE_DIMENSION, ImageDesc, ImageResolver, ImageSource, ResourceId,
    load_image,
};
pub use style::{
    AvatarStyle, ColorFilter, DEFAULT_ARCH_COUNT, DEFAULT_MAX_ARCHES_SPAN, HAIRLINE_WIDTH,
    RingStyle,
};
pub use view::CircleBadgeView;

pub use understory_progress_animation::AnimationDrawingState;
