//! Touch and pointer events
//!
//! The host framework translates its native gesture callbacks into these
//! events and forwards them to interactive components.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Finger or pointer went down on the component
    pub const POINTER_DOWN: EventType = 1;
    /// Finger or pointer lifted inside the component
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    /// Finger dragged out of the component's hit area
    pub const POINTER_LEAVE: EventType = 5;
    /// Gesture taken over by the host (scroll, system gesture)
    pub const POINTER_CANCEL: EventType = 6;

    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;

    /// Accessibility "activate" action (screen reader double tap)
    pub const ACTIVATE: EventType = 20;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        pressure: f32,
    },
    #[default]
    None,
}

impl Event {
    /// Create an event without payload
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
            timestamp: 0,
        }
    }

    /// Create a pointer event at a position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer {
                x,
                y,
                pressure: 1.0,
            },
            timestamp: 0,
        }
    }

    /// Set the host timestamp (milliseconds)
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Pointer position, if this is a pointer event
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some((x, y)),
            EventData::None => None,
        }
    }
}
