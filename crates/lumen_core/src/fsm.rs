//! Interaction state machines
//!
//! Flat state machines used by interactive components (pressable surfaces,
//! toggles). Transitions are grouped by source state; for each state the first
//! transition whose event matches and whose guard passes wins. Transitions may
//! carry actions and states may carry enter hooks.

use crate::events::EventType;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// A guard that decides whether a transition may fire
pub type Guard = Box<dyn Fn() -> bool>;

/// An action run when a transition fires or a state is entered
pub type Action = Box<dyn FnMut()>;

type Table = FxHashMap<StateId, SmallVec<[Transition; 4]>>;

/// One `from --event--> to` edge
pub struct Transition {
    pub from: StateId,
    pub event: EventType,
    pub to: StateId,
    guard: Option<Guard>,
    actions: SmallVec<[Action; 1]>,
}

impl Transition {
    pub fn new(from: StateId, event: EventType, to: StateId) -> Self {
        Transition {
            from,
            event,
            to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Only fire while `guard` returns true
    pub fn with_guard<F: Fn() -> bool + 'static>(self, guard: F) -> Self {
        Transition {
            guard: Some(Box::new(guard)),
            ..self
        }
    }

    /// Run `action` when this transition fires
    pub fn with_action<F: FnMut() + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn accepts(&self, event: EventType) -> bool {
        self.event == event && self.guard.as_ref().map_or(true, |allow| allow())
    }
}

/// Collects transitions and enter hooks for a [`StateMachine`]
pub struct StateMachineBuilder {
    start: StateId,
    table: Table,
    enter_hooks: FxHashMap<StateId, SmallVec<[Action; 1]>>,
}

impl StateMachineBuilder {
    pub fn new(start: StateId) -> Self {
        StateMachineBuilder {
            start,
            table: Table::default(),
            enter_hooks: FxHashMap::default(),
        }
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.table
            .entry(transition.from)
            .or_default()
            .push(transition);
        self
    }

    /// Add an unguarded transition
    pub fn on(self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Run `hook` every time `state` is entered through a transition
    pub fn on_enter<F: FnMut() + 'static>(mut self, state: StateId, hook: F) -> Self {
        self.enter_hooks
            .entry(state)
            .or_default()
            .push(Box::new(hook));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            state: self.start,
            table: self.table,
            enter_hooks: self.enter_hooks,
        }
    }
}

/// A running machine
pub struct StateMachine {
    state: StateId,
    table: Table,
    enter_hooks: FxHashMap<StateId, SmallVec<[Action; 1]>>,
}

impl StateMachine {
    pub fn builder(start: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(start)
    }

    /// A machine that stays in `state` and ignores every event
    pub fn inert(state: StateId) -> Self {
        StateMachineBuilder::new(state).build()
    }

    pub fn current_state(&self) -> StateId {
        self.state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.state == state
    }

    /// Whether `event` would move the machine out of the current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.table
            .get(&self.state)
            .is_some_and(|edges| edges.iter().any(|t| t.accepts(event)))
    }

    /// Deliver an event; returns the state after delivery
    pub fn send(&mut self, event: EventType) -> StateId {
        let from = self.state;
        let Some(edge) = self
            .table
            .get_mut(&from)
            .and_then(|edges| edges.iter_mut().find(|t| t.accepts(event)))
        else {
            return from;
        };

        edge.actions.iter_mut().for_each(|action| action());
        let to = edge.to;
        self.state = to;
        tracing::trace!("fsm: {} --{}--> {}", from, event, to);

        if let Some(hooks) = self.enter_hooks.get_mut(&to) {
            hooks.iter_mut().for_each(|hook| hook());
        }
        to
    }
}
