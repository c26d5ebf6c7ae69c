//! Table-driven finite state machines for widget interaction states
//!
//! ```rust
//! use pagecurl_core::events::event_types;
//! use pagecurl_core::fsm::StateMachine;
//!
//! const IDLE: u32 = 0;
//! const HOVERED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, event_types::POINTER_ENTER, HOVERED)
//!     .on(HOVERED, event_types::POINTER_LEAVE, IDLE)
//!     .build();
//!
//! assert!(fsm.send(event_types::POINTER_ENTER).is_some());
//! assert_eq!(fsm.current(), HOVERED);
//! ```

use rustc_hash::FxHashMap;

use crate::events::{event_types, EventType};

/// State identifier
pub type StateId = u32;

/// A transition that fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: EventType,
    pub to: StateId,
}

/// A finite state machine keyed on (state, event type)
#[derive(Clone, Debug)]
pub struct StateMachine {
    current: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachine {
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial,
            transitions: FxHashMap::default(),
        }
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    /// Feed an event; returns the transition if one fired
    ///
    /// Events with no transition from the current state are ignored.
    pub fn send(&mut self, event: EventType) -> Option<Transition> {
        let to = *self.transitions.get(&(self.current, event))?;
        let transition = Transition {
            from: self.current,
            event,
            to,
        };
        tracing::trace!(
            from = transition.from,
            to = transition.to,
            event = event_types::name(event),
            "fsm transition"
        );
        self.current = to;
        Some(transition)
    }
}

/// Builder for [`StateMachine`]
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachineBuilder {
    /// Add a transition `from --event--> to`
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
        }
    }
}
