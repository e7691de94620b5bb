use crate::document::{Connection, Document, Node};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Default number of pre-image snapshots retained for undo.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// An immutable deep copy of a document at the moment of capture.
///
/// Once pushed onto a stack a snapshot is never mutated; restoring one hands
/// its collections back wholesale.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub(crate) fn capture(document: &Document) -> Self {
        Self {
            nodes: document.nodes.clone(),
            connections: document.connections.clone(),
            taken_at: Utc::now(),
        }
    }

    pub(crate) fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub(crate) fn restore(self) -> Document {
        Document {
            nodes: self.nodes,
            connections: self.connections,
        }
    }
}

/// Bounded undo stack plus unbounded redo stack.
///
/// The undo side evicts its oldest entry once `capacity` is reached; the
/// redo side grows freely and is cleared whenever a fresh edit is recorded.
#[derive(Debug, Clone)]
pub(crate) struct HistoryStacks {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl HistoryStacks {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.min(DEFAULT_UNDO_CAPACITY)),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Records the pre-image of a fresh edit. Invalidates any redo state.
    pub(crate) fn record(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        self.push_undo(snapshot);
    }

    /// Pushes onto the undo side, evicting the oldest entry at capacity.
    pub(crate) fn push_undo(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    pub(crate) fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    pub(crate) fn push_redo(&mut self, snapshot: Snapshot) {
        self.redo.push(snapshot);
    }

    pub(crate) fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub(crate) fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Capture time of the most recently recorded pre-image, if any.
    pub(crate) fn last_recorded_at(&self) -> Option<DateTime<Utc>> {
        self.undo.back().map(Snapshot::taken_at)
    }
}
