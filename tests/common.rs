//! Common test utilities for building documents and stores.
use rireki::prelude::*;

/// Creates a bare node at the given canvas position.
#[allow(dead_code)]
pub fn node(id: &str, kind: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        kind: kind.to_string(),
        position: Position { x, y },
        data: AHashMap::new(),
    }
}

/// Creates a node carrying a "label" entry in its data bag.
#[allow(dead_code)]
pub fn labelled_node(id: &str, kind: &str, label: &str) -> Node {
    let mut data = AHashMap::new();
    data.insert("label".to_string(), Value::from(label));
    Node {
        id: id.to_string(),
        kind: kind.to_string(),
        position: Position { x: 0.0, y: 0.0 },
        data,
    }
}

/// Creates a plain connection with no source handle.
#[allow(dead_code)]
pub fn connection(id: &str, source: &str, target: &str) -> Connection {
    Connection {
        id: id.to_string(),
        source_node_id: source.to_string(),
        target_node_id: target.to_string(),
        source_handle: None,
    }
}

/// Creates a connection leaving a specific output handle.
#[allow(dead_code)]
pub fn handle_connection(id: &str, source: &str, target: &str, handle: &str) -> Connection {
    Connection {
        id: id.to_string(),
        source_node_id: source.to_string(),
        target_node_id: target.to_string(),
        source_handle: Some(handle.to_string()),
    }
}

/// Creates a simple two-node document for basic tests.
///
/// Shape: `trigger -> send`, one connection.
#[allow(dead_code)]
pub fn create_simple_document() -> Document {
    Document {
        nodes: vec![
            labelled_node("trigger", "manualTrigger", "When clicked"),
            node("send", "httpRequest", 240.0, 0.0),
        ],
        connections: vec![connection("c1", "trigger", "send")],
    }
}

/// Creates a document with a branch node and both of its output handles
/// connected.
///
/// Shape: `trigger -> branch`, `branch -(true)-> send`, `branch -(false)-> log`.
#[allow(dead_code)]
pub fn create_branching_document() -> Document {
    Document {
        nodes: vec![
            node("trigger", "manualTrigger", 0.0, 0.0),
            node("branch", "branch", 240.0, 0.0),
            node("send", "httpRequest", 480.0, -90.0),
            node("log", "print", 480.0, 90.0),
        ],
        connections: vec![
            connection("c1", "trigger", "branch"),
            handle_connection("c2", "branch", "send", "true"),
            handle_connection("c3", "branch", "log", "false"),
        ],
    }
}

/// Creates a store seeded with the simple document and a clean history.
#[allow(dead_code)]
pub fn store_with_simple_document() -> EditorStore {
    EditorStore::builder()
        .with_document(create_simple_document())
        .build()
}

/// Creates a store seeded with the branching document and a clean history.
#[allow(dead_code)]
pub fn store_with_branching_document() -> EditorStore {
    EditorStore::builder()
        .with_document(create_branching_document())
        .build()
}
