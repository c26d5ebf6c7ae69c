//! Hover interaction state
//!
//! Two states, driven by enter/leave on the hit region. Clicks are not part
//! of the machine: they fire the callback and leave the state untouched.

use pagecurl_core::event_types::{POINTER_ENTER, POINTER_LEAVE};
use pagecurl_core::{EventType, StateId, StateMachine, Transition};

/// Hover machine states
pub mod states {
    use pagecurl_core::StateId;

    pub const IDLE: StateId = 0;
    pub const HOVERED: StateId = 1;
}

/// Interaction state as seen by callers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Hovered,
}

impl From<StateId> for Interaction {
    fn from(state: StateId) -> Self {
        if state == states::HOVERED {
            Interaction::Hovered
        } else {
            Interaction::Idle
        }
    }
}

/// The hover flag, backed by a two-state FSM
#[derive(Clone, Debug)]
pub struct HoverState {
    fsm: StateMachine,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverState {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(states::IDLE)
            .on(states::IDLE, POINTER_ENTER, states::HOVERED)
            .on(states::HOVERED, POINTER_LEAVE, states::IDLE)
            .build();
        Self { fsm }
    }

    pub fn is_hovered(&self) -> bool {
        self.fsm.current() == states::HOVERED
    }

    pub fn interaction(&self) -> Interaction {
        self.fsm.current().into()
    }

    /// Feed an event; returns the transition when the flag changed
    pub fn handle(&mut self, event: EventType) -> Option<Transition> {
        self.fsm.send(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecurl_core::event_types::CLICK;

    #[test]
    fn test_starts_idle() {
        let s = HoverState::new();
        assert!(!s.is_hovered());
        assert_eq!(s.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_enter_leave() {
        let mut s = HoverState::new();
        assert!(s.handle(POINTER_ENTER).is_some());
        assert_eq!(s.interaction(), Interaction::Hovered);
        assert!(s.handle(POINTER_LEAVE).is_some());
        assert_eq!(s.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut s = HoverState::new();
        s.handle(POINTER_ENTER);
        assert!(s.handle(POINTER_ENTER).is_none());
        assert!(s.is_hovered());
        s.handle(POINTER_LEAVE);
        assert!(s.handle(POINTER_LEAVE).is_none());
        assert!(!s.is_hovered());
    }

    #[test]
    fn test_click_does_not_change_hover() {
        let mut s = HoverState::new();
        assert!(s.handle(CLICK).is_none());
        assert!(!s.is_hovered());
        s.handle(POINTER_ENTER);
        assert!(s.handle(CLICK).is_none());
        assert!(s.is_hovered());
    }
}
