// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size negotiation helpers shared by avatar hosts.

/// Constraint handed down by a parent layout for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The parent dictates the exact size.
    Exactly(f64),
    /// The child may be at most this large.
    AtMost(f64),
    /// No constraint.
    Unspecified,
}

/// Resolves a size for one axis: the exact size, the default clamped to the
/// limit, or the default.
#[must_use]
pub fn resolve_size(spec: MeasureSpec, default: f64) -> f64 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(limit) => default.min(limit),
        MeasureSpec::Unspecified => default,
    }
}

/// Converts density-independent pixels to whole device pixels, rounding half up.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel sizes are far inside i32"
)]
pub fn dp_to_px(dp: f64, scale_factor: f64) -> i32 {
    (dp * scale_factor + 0.5) as i32
}
