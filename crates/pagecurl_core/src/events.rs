//! Pointer events
//!
//! Hosts translate their native input into `Event`s. Events that already
//! target the hit region (`POINTER_ENTER`, `POINTER_LEAVE`, `CLICK`) drive the
//! widget directly. `POINTER_MOVE`, and a `CLICK` with a position, carry
//! screen coordinates and are hit-tested first.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Well-known event types
pub mod event_types {
    use super::EventType;

    /// Pointer entered the target
    pub const POINTER_ENTER: EventType = 1;
    /// Pointer left the target
    pub const POINTER_LEAVE: EventType = 2;
    /// Pointer moved (screen coordinates)
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer button pressed and released over the target
    pub const CLICK: EventType = 4;
    /// Pointer left the host surface entirely
    pub const POINTER_EXIT_SURFACE: EventType = 5;

    /// Human-readable name, used in logs
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            POINTER_ENTER => "pointer_enter",
            POINTER_LEAVE => "pointer_leave",
            POINTER_MOVE => "pointer_move",
            CLICK => "click",
            POINTER_EXIT_SURFACE => "pointer_exit_surface",
            _ => "unknown",
        }
    }
}

/// Event payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    /// No payload
    None,
    /// Pointer position in screen pixels
    Pointer { x: f32, y: f32 },
}

/// A dispatched event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
        }
    }

    pub fn pointer(event_type: EventType, position: Point) -> Self {
        Self {
            event_type,
            data: EventData::Pointer {
                x: position.x,
                y: position.y,
            },
        }
    }

    /// Pointer position, if the event carries one
    pub fn position(&self) -> Option<Point> {
        match self.data {
            EventData::Pointer { x, y } => Some(Point::new(x, y)),
            EventData::None => None,
        }
    }

    pub fn name(&self) -> &'static str {
        event_types::name(self.event_type)
    }
}
