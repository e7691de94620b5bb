use crate::document::{Connection, Document, IntoDocument, Node, Position, Value};
use crate::error::DocumentConversionError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::Deserialize;

/// A document in the camelCase wire format emitted by canvas editors.
#[derive(Debug, Clone, Deserialize)]
pub struct UiDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub nodes: Vec<UiNode>,
    #[serde(alias = "edges")]
    pub connections: Vec<UiConnection>,
}

/// UI node with id, kind and an open data bag.
#[derive(Debug, Clone, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: String,
    pub position: UiPosition,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// UI connection between two nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConnection {
    pub id: String,
    #[serde(alias = "sourceNodeId")]
    pub source: String,
    #[serde(alias = "targetNodeId")]
    pub target: String,
    #[serde(default)]
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
}

impl UiDocument {
    /// Parses a wire-format JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentConversionError> {
        serde_json::from_str(json)
            .map_err(|e| DocumentConversionError::ValidationError(e.to_string()))
    }
}

impl UiNode {
    pub fn into_node(self) -> Node {
        Node {
            id: self.id,
            kind: self.kind,
            position: Position {
                x: self.position.x,
                y: self.position.y,
            },
            data: convert_data_bag(self.data),
        }
    }
}

impl UiConnection {
    pub fn into_connection(self) -> Connection {
        Connection {
            id: self.id,
            source_node_id: self.source,
            target_node_id: self.target,
            source_handle: self.source_handle,
        }
    }
}

impl IntoDocument for UiDocument {
    /// Rejects duplicate node and connection ids; the store itself accepts
    /// duplicates silently, so the dedup contract lives at this boundary.
    /// Dangling connection endpoints pass through untouched.
    fn into_document(self) -> Result<Document, DocumentConversionError> {
        if let Some(id) = self.nodes.iter().map(|n| n.id.as_str()).duplicates().next() {
            return Err(DocumentConversionError::DuplicateId(id.to_string()));
        }
        if let Some(id) = self
            .connections
            .iter()
            .map(|c| c.id.as_str())
            .duplicates()
            .next()
        {
            return Err(DocumentConversionError::DuplicateId(id.to_string()));
        }

        Ok(Document {
            nodes: self.nodes.into_iter().map(UiNode::into_node).collect(),
            connections: self
                .connections
                .into_iter()
                .map(UiConnection::into_connection)
                .collect(),
        })
    }
}

/// Open JSON data bags become scalar maps; anything that is not an object
/// yields an empty bag, and non-scalar entries degrade to `Null`.
fn convert_data_bag(value: serde_json::Value) -> AHashMap<String, Value> {
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, raw)| (key, Value::from_json(&raw)))
            .collect(),
        _ => AHashMap::new(),
    }
}
