// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Avatar Geometry: circle layout for circular image widgets.
//!
//! This crate turns a rectangular widget box into the circles a circular
//! avatar needs:
//! - The largest centered square inside the padded box ([`bounding_square`]).
//! - The border circle, the inset drawable circle, and a corner badge circle
//!   placed at 45° on the border ([`compute_layout`]).
//! - A cover-fit transform mapping image pixels onto the drawable rect
//!   ([`cover_fit`], [`shader_transform`]).
//! - Touch hit testing against the border circle ([`in_touchable_area`]) and
//!   a rounded outline for shadows ([`outline`]).
//!
//! Everything is a pure function of its inputs. Degenerate input (zero-size
//! boxes, padding larger than the box, negative widths) is clamped and yields
//! zero-radius circles rather than errors.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use understory_avatar_geometry::compute_layout;
//!
//! let layout = compute_layout(Size::new(200.0, 200.0), Insets::ZERO, 10.0, 0.0);
//! assert_eq!(layout.border.radius, 95.0);
//! assert_eq!(layout.drawable.radius, 75.0);
//!
//! // The badge sits on the border circle, bottom-right.
//! let d = layout.badge.center - layout.border.center;
//! assert!((d.hypot() - layout.border.radius).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hit;
mod layout;
mod measure;
mod outline;
mod shader;

pub use hit::in_touchable_area;
pub use layout::{
    AvatarLayout, BADGE_ANGLE, DRAWABLE_INNER_MARGIN, badge_circle, border_circle,
    bounding_square, compute_layout, drawable_rect,
};
pub use measure::{MeasureSpec, dp_to_px, resolve_size};
pub use outline::outline;
pub use shader::{CoverFit, FitAxis, cover_fit, shader_transform};
