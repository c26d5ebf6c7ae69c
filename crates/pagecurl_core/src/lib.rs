//! PageCurl Core
//!
//! Foundational primitives shared by the PageCurl crates:
//!
//! - **Geometry**: points, sizes, rectangles and 2D affine transforms
//! - **Colors**: RGBA colors with CSS color parsing (`nom`)
//! - **Paths**: move/line/curve paths with nonzero point-in-path testing
//! - **Events**: pointer events delivered by the host
//! - **State Machines**: table-driven FSMs for interaction states

pub mod color;
mod css_color;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod path;

pub use color::Color;
pub use error::CoreError;
pub use events::{event_types, Event, EventData, EventType};
pub use fsm::{StateId, StateMachine, StateMachineBuilder, Transition};
pub use geometry::{Affine2D, Point, Rect, Size};
pub use path::{Path, PathCommand};
