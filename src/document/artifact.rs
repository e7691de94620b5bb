use super::model::{Connection, Document, Node};
use crate::error::PersistError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// The serializable payload handed to a persistence collaborator.
///
/// Carries the document plus a caller-supplied name and a save timestamp.
/// History stacks are deliberately absent; only the live document survives a
/// save/load cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedDocument {
    pub name: String,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub saved_at: DateTime<Utc>,
}

impl SavedDocument {
    /// Deep-copies the given document under the given name, stamped now.
    pub fn new(name: &str, document: &Document) -> Self {
        Self {
            name: name.to_string(),
            nodes: document.nodes.clone(),
            connections: document.connections.clone(),
            saved_at: Utc::now(),
        }
    }

    pub fn into_document(self) -> Document {
        Document {
            nodes: self.nodes,
            connections: self.connections,
        }
    }

    /// Saves the payload to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), PersistError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a payload from a file.
    pub fn from_file(path: &str) -> Result<Self, PersistError> {
        let mut file = fs::File::open(path).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        encode_to_vec(self, standard()).map_err(|e| PersistError::Encode(e.to_string()))
    }

    /// Deserializes a payload from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        decode_from_slice(bytes, standard())
            .map(|(payload, _)| payload) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| PersistError::Decode(e.to_string()))
    }

    /// Renders the payload as pretty JSON, with data bags as plain scalars.
    pub fn to_json_string(&self) -> Result<String, PersistError> {
        serde_json::to_string_pretty(self).map_err(|e| PersistError::Encode(e.to_string()))
    }
}
