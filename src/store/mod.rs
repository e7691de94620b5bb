use crate::document::{Connection, Document, Node, SavedDocument, Value};
use ahash::AHashMap;
use chrono::{DateTime, Utc};

mod history;

pub use history::DEFAULT_UNDO_CAPACITY;

use history::{HistoryStacks, Snapshot};

/// An editable document with bounded undo/redo history.
///
/// Every mutation entry point captures a pre-image snapshot before applying
/// its change, marks the document dirty, and invalidates redo. Whole-
/// collection replacement additionally suppresses no-op reports: a
/// presentation layer may hand back the current state on every render tick
/// without polluting history.
///
/// All operations are total over their input domain; acting on an absent id
/// or an unchanged collection is defined as doing nothing. One store owns
/// one document, it is not designed for shared mutation.
pub struct EditorStore {
    document: Document,
    history: HistoryStacks,
    dirty: bool,
}

pub struct EditorStoreBuilder {
    capacity: usize,
    document: Document,
}

impl EditorStoreBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_UNDO_CAPACITY,
            document: Document::default(),
        }
    }

    /// Sets how many pre-image snapshots the undo stack retains.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Starts the session from an existing document instead of an empty one.
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    pub fn build(self) -> EditorStore {
        EditorStore {
            document: self.document,
            history: HistoryStacks::with_capacity(self.capacity),
            dirty: false,
        }
    }
}

impl Default for EditorStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Creates an empty store with the default undo capacity.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EditorStoreBuilder {
        EditorStoreBuilder::new()
    }

    /// Replaces the node collection wholesale.
    ///
    /// Equal input is a no-op: no snapshot, no dirty change, no redo clear.
    pub fn replace_nodes(&mut self, nodes: Vec<Node>) {
        if self.document.nodes == nodes {
            return;
        }
        self.checkpoint();
        self.document.nodes = nodes;
        self.dirty = true;
    }

    /// Replaces the connection collection wholesale, with the same no-op
    /// suppression as `replace_nodes`.
    pub fn replace_connections(&mut self, connections: Vec<Connection>) {
        if self.document.connections == connections {
            return;
        }
        self.checkpoint();
        self.document.connections = connections;
        self.dirty = true;
    }

    /// Appends a node. Duplicate ids are not rejected at this layer.
    pub fn add_node(&mut self, node: Node) {
        self.checkpoint();
        self.document.nodes.push(node);
        self.dirty = true;
    }

    /// Removes a node and every connection touching it.
    ///
    /// The node and its connections fall under one pre-image, so a single
    /// undo restores all of them. Absent id: no-op.
    pub fn remove_node(&mut self, node_id: &str) {
        if !self.document.contains_node(node_id) {
            return;
        }
        self.checkpoint();
        self.document.nodes.retain(|n| n.id != node_id);
        self.document
            .connections
            .retain(|c| c.source_node_id != node_id && c.target_node_id != node_id);
        self.dirty = true;
    }

    /// Shallow-merges `data` into the node's data bag. Absent id: no-op.
    pub fn update_node_data(&mut self, node_id: &str, data: AHashMap<String, Value>) {
        if !self.document.contains_node(node_id) {
            return;
        }
        self.checkpoint();
        if let Some(node) = self.document.node_mut(node_id) {
            for (key, value) in data {
                node.data.insert(key, value);
            }
        }
        self.dirty = true;
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.checkpoint();
        self.document.connections.push(connection);
        self.dirty = true;
    }

    /// Removes a connection by id. Absent id: no-op.
    pub fn remove_connection(&mut self, connection_id: &str) {
        if self.document.connection(connection_id).is_none() {
            return;
        }
        self.checkpoint();
        self.document.connections.retain(|c| c.id != connection_id);
        self.dirty = true;
    }

    /// Steps back to the most recent pre-image. Returns whether a restore
    /// happened. The current document moves onto the redo stack.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop_undo() else {
            return false;
        };
        self.history.push_redo(Snapshot::capture(&self.document));
        self.document = snapshot.restore();
        self.dirty = true;
        true
    }

    /// Mirror of `undo`. The push back onto the undo side respects the same
    /// capacity eviction as a fresh edit.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop_redo() else {
            return false;
        };
        self.history.push_undo(Snapshot::capture(&self.document));
        self.document = snapshot.restore();
        self.dirty = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Replaces the whole document from a persistence payload, clearing both
    /// stacks and the dirty flag. The only mutation that bypasses the
    /// snapshot machinery.
    pub fn load_document(&mut self, payload: SavedDocument) {
        self.document = payload.into_document();
        self.history.clear();
        self.dirty = false;
    }

    /// Clears the dirty flag after an explicit, successful save. History is
    /// untouched; undoing back past the save boundary reports dirty again.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Deep-copied payload of the current document under the given name,
    /// stamped with the current UTC time. History state is not touched.
    pub fn export_snapshot(&self, name: &str) -> SavedDocument {
        SavedDocument::new(name, &self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn nodes(&self) -> &[Node] {
        &self.document.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.document.connections
    }

    /// Capture time of the most recent checkpoint, if any edit is undoable.
    pub fn last_edit_at(&self) -> Option<DateTime<Utc>> {
        self.history.last_recorded_at()
    }

    fn checkpoint(&mut self) {
        self.history.record(Snapshot::capture(&self.document));
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
