//! Listing entries and the flattened file map.
//!
//! - `ContentEntry`: one item of a GitHub directory listing (inbound wire shape)
//! - `FileEntry`: the retained per-file record (outbound shape)
//! - `RepoMap`: path → FileEntry, the artifact one traversal run produces
//! - `FileMapResponse`: response body for GET /files

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One entry of a directory listing, exactly as the contents API reports it.
/// Directory entries only drive further traversal and are never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub html_url: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// A single mapped file. Immutable once constructed; its `path` doubles as
/// the `RepoMap` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub url: String,
    pub download_url: Option<String>,
    pub size: u64,
    pub sha: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl From<ContentEntry> for FileEntry {
    fn from(entry: ContentEntry) -> Self {
        Self {
            name: entry.name,
            path: entry.path,
            url: entry.html_url,
            download_url: entry.download_url,
            size: entry.size,
            sha: entry.sha,
            kind: entry.kind,
            encoding: entry.encoding,
        }
    }
}

/// Flat path → file mapping built by one traversal run.
///
/// A `BTreeMap` keeps the serialized map in path order, so identical trees
/// always render identical JSON.
pub type RepoMap = BTreeMap<String, FileEntry>;

#[derive(Debug, Clone, Serialize)]
pub struct FileMapResponse {
    pub count: usize,
    pub files: RepoMap,
}
