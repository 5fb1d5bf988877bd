//! Event-to-state transition table.
//!
//! A page's interaction logic is a reducer:
//! `(state, event) -> (state', message)`. Each entry binds one
//! `(event type, component id)` pair to a handler. Unbound pairs are a no-op
//! refresh: the state comes back unchanged and the message is empty.

use serde_json::Value;

use super::{Event, EventKind, StateMap};

/// Handler for one transition. Mutates the state copy and returns the message.
pub type Handler<C> = fn(&C, &mut StateMap, &Value) -> String;

struct Transition<C> {
    kind: EventKind,
    component_id: &'static str,
    handler: Handler<C>,
}

/// Outcome of reducing one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub state: StateMap,
    pub message: String,
}

/// Ordered set of transitions, looked up by `(kind, component id)`.
pub struct TransitionTable<C> {
    transitions: Vec<Transition<C>>,
}

impl<C> TransitionTable<C> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Bind a handler. The first binding of a pair wins.
    pub fn on(mut self, kind: EventKind, component_id: &'static str, handler: Handler<C>) -> Self {
        self.transitions.push(Transition {
            kind,
            component_id,
            handler,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Reduce an event against a copy of its state.
    ///
    /// `event.state` itself is never modified.
    pub fn reduce(&self, ctx: &C, event: &Event) -> Reduction {
        let mut state = event.state.clone();

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.kind == event.kind && t.component_id == event.component_id)
        else {
            tracing::debug!(
                kind = event.kind.as_str(),
                component_id = %event.component_id,
                "No transition bound, refreshing"
            );
            return Reduction {
                state,
                message: String::new(),
            };
        };

        tracing::debug!(
            kind = event.kind.as_str(),
            component_id = %event.component_id,
            "Dispatching transition"
        );
        let message = (transition.handler)(ctx, &mut state, &event.value);
        Reduction { state, message }
    }
}

impl<C> Default for TransitionTable<C> {
    fn default() -> Self {
        Self::new()
    }
}
