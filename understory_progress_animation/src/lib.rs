// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Progress Animation: timers and sequencing for progress rings.
//!
//! This crate drives the animated parts of a progress ring without owning a
//! clock or a renderer:
//!
//! - [`AnimationDrawingState`]: the two progress values the renderer reads
//!   (rotation and arches expansion) and the angles derived from them.
//! - [`ValueTimer`]: a float timer advanced by host-supplied frame deltas.
//! - [`ProgressAnimator`] / [`AnimatorKind`]: a timer plus the reducer it
//!   feeds, as a tagged variant.
//! - [`AnimationOrchestrator`]: plays a setup group together, then a
//!   progress group together, with reverse and idempotent cancel.
//! - [`FrameScheduler`] / [`AnimationDriver`]: the injected frame clock.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start--> SetupRunning --all setup done--> ProgressRunning
//!                      |                                 |
//!                      +------------reverse--------------+--> Reversing --setup back at start--> Idle
//! any --cancel--> Idle
//! ```
//!
//! Every frame, the orchestrator folds all reducers fed by that frame into a
//! single update handed to an [`AnimatorInterface`], so the receiver never
//! sees a half-applied frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_progress_animation::{
//!     AnimationDrawingState, AnimationDriver, ManualFrames, default_orchestrator,
//! };
//!
//! let mut driver = AnimationDriver::new(default_orchestrator(), ManualFrames::default());
//! driver.orchestrator_mut().attach(|| {});
//! driver.start();
//!
//! let mut state = AnimationDrawingState::REST;
//! while driver.scheduler_mut().take_request() {
//!     driver.on_tick(Duration::from_millis(125), &mut state);
//!     if state.rotation_progress >= 0.5 {
//!         break;
//!     }
//! }
//! assert_eq!(state.arches_expansion_progress, 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod defaults;
mod orchestrator;
mod scheduler;
mod state;
mod timer;

pub use animator::{AnimatorInterface, AnimatorKind, ProgressAnimator, Reducer};
pub use defaults::{
    DEFAULT_EXPANSION_DURATION, DEFAULT_ROTATION_DURATION, default_orchestrator,
    default_orchestrator_with,
};
pub use orchestrator::{AnimationOrchestrator, Phase};
pub use scheduler::{AnimationDriver, FrameScheduler, ManualFrames};
pub use state::{AnimationDrawingState, RING_ORIGIN_DEGREES};
pub use timer::{Easing, RepeatMode, TimerStep, ValueTimer};
