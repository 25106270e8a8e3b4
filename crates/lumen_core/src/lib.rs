//! Lumen Core
//!
//! Host-agnostic primitives shared by the Lumen theme and component crates:
//!
//! - **Colors**: RGBA colors with hex parsing and formatting
//! - **Events**: Touch/pointer events delivered by the host framework
//! - **State Machines**: Small flat FSMs for component interaction states
//! - **Observers**: Subscription lists for synchronous change notification
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{Color, Observers};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let primary = Color::from_hex(0x2563EB);
//! assert_eq!(primary.to_hex_string(), "#2563eb");
//!
//! let observers: Observers<Color> = Observers::new();
//! let seen = Rc::new(Cell::new(0));
//! let seen_in = seen.clone();
//! observers.subscribe(move |_color: &Color| seen_in.set(seen_in.get() + 1));
//! observers.notify(&primary);
//! assert_eq!(seen.get(), 1);
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod observer;

pub use color::{Color, ColorParseError};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateId, StateMachine, Transition};
pub use observer::{Observers, SubscriptionId};
