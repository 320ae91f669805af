use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A row from the lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Numeric identifier stored as text, e.g. "025"
    pub id: String,
    /// Generation the creature belongs to
    pub group: i64,
}

/// Paths to the two cached variants of a creature's artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPair {
    pub shrouded_path: PathBuf,
    pub unshrouded_path: PathBuf,
}

impl ArtifactPair {
    /// Both files must exist; a lone file is never a hit
    pub fn exists(&self) -> bool {
        self.shrouded_path.is_file() && self.unshrouded_path.is_file()
    }
}

/// What callers get back: the record plus its artwork paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub id: String,
    pub group: i64,
    pub shrouded_path: PathBuf,
    pub unshrouded_path: PathBuf,
}

impl ResultRecord {
    pub fn new(record: Record, artifacts: ArtifactPair) -> Self {
        Self {
            name: record.name,
            id: record.id,
            group: record.group,
            shrouded_path: artifacts.shrouded_path,
            unshrouded_path: artifacts.unshrouded_path,
        }
    }
}
