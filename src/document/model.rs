use super::value::Value;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// The complete, editable state of a node-based document.
/// This is the unit that snapshots capture and restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

/// A single node on the editor canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: String,
    pub position: Position,
    #[serde(default)]
    pub data: AHashMap<String, Value>,
}

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A directed connection between two nodes.
///
/// `source_handle` distinguishes multiple logical outputs of one node, such
/// as the "true"/"false" branches of a condition node. Endpoints are not
/// required to resolve to a live node; integrity is advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default)]
    pub source_handle: Option<String>,
}

impl Document {
    /// Looks up a node by id.
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    /// Connections with at least one endpoint that no longer resolves to a
    /// node in this document.
    pub fn dangling_connections(&self) -> Vec<&Connection> {
        let ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.connections
            .iter()
            .filter(|c| {
                !ids.contains(c.source_node_id.as_str()) || !ids.contains(c.target_node_id.as_str())
            })
            .collect()
    }
}
