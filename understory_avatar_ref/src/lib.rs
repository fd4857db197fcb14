// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Avatar Reference Canvas.
//!
//! This crate provides [`RecordingCanvas`], an [`AvatarCanvas`] that does not
//! rasterize anything. It records every op it receives together with the
//! layer state at that moment, so tests can assert on what an avatar emits
//! and where.
//!
//! ```rust
//! use kurbo::Size;
//! use understory_avatar::{AvatarStyle, CircleBadgeView};
//! use understory_avatar_ref::RecordingCanvas;
//!
//! let mut view = CircleBadgeView::new(AvatarStyle::default());
//! view.set_size(Size::new(48.0, 48.0));
//!
//! let mut canvas = RecordingCanvas::default();
//! view.paint().replay(&mut canvas);
//! assert!(canvas.is_balanced());
//! assert_eq!(canvas.draws().count(), 1);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use understory_avatar::{AvatarCanvas, AvatarOp, DrawOp, StateOp};

/// Layer state at the time an op was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Number of open layers.
    pub layer_depth: u32,
    /// Bounds of the innermost open layer, if any.
    pub layer_top: Option<Rect>,
}

/// Event recorded by the canvas.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying it.
        state: StateSnapshot,
    },
    /// Draw operation and the state it was drawn under.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// An [`AvatarCanvas`] that only records.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// The same ops without snapshots.
    ops: Vec<AvatarOp>,
    state: StateSnapshot,
    layer_stack: Vec<Rect>,
    unmatched_pops: u32,
}

impl RecordingCanvas {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw ops.
    pub fn ops(&self) -> &[AvatarOp] {
        &self.ops
    }

    /// Draw ops with the state each was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Current state.
    pub fn current_state(&self) -> StateSnapshot {
        self.state
    }

    /// Returns `true` if every pushed layer was popped and no pop was unmatched.
    pub fn is_balanced(&self) -> bool {
        self.layer_stack.is_empty() && self.unmatched_pops == 0
    }

    /// Clears all recorded events and state.
    pub fn clear_events(&mut self) {
        *self = Self::default();
    }

    fn sync_state(&mut self) {
        self.state = StateSnapshot {
            layer_depth: u32::try_from(self.layer_stack.len()).unwrap_or(u32::MAX),
            layer_top: self.layer_stack.last().copied(),
        };
    }
}

impl AvatarCanvas for RecordingCanvas {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::PushLayer { bounds } => self.layer_stack.push(*bounds),
            StateOp::PopLayer => {
                if self.layer_stack.pop().is_none() {
                    self.unmatched_pops += 1;
                }
            }
        }
        self.sync_state();

        self.ops.push(AvatarOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(AvatarOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Circle;

    #[test]
    fn draws_see_the_open_layer() {
        let mut canvas = RecordingCanvas::default();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        canvas.state(StateOp::PushLayer { bounds });
        canvas.draw(DrawOp::ClearCircle {
            circle: Circle::new((5.0, 5.0), 1.0),
        });
        canvas.state(StateOp::PopLayer);

        let (_, state) = canvas.draws().next().unwrap();
        assert_eq!(state.layer_depth, 1);
        assert_eq!(state.layer_top, Some(bounds));
        assert_eq!(canvas.current_state(), StateSnapshot::default());
        assert!(canvas.is_balanced());
        assert_eq!(canvas.ops().len(), 3);
    }

    #[test]
    fn unmatched_pop_is_flagged() {
        let mut canvas = RecordingCanvas::default();
        canvas.state(StateOp::PopLayer);
        assert!(!canvas.is_balanced());
        canvas.clear_events();
        assert!(canvas.is_balanced());
        assert!(canvas.events().is_empty());
    }
}
