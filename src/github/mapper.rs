//! The tree flattener.
//!
//! Walks a repository's directory structure depth-first through a
//! `DirectoryClient` and collapses every reachable file into one flat
//! path → metadata map. A subdirectory whose listing fails is logged and
//! contributes nothing; siblings and ancestors keep walking. Only a failed
//! listing of the requested root fails a run, since at that point nothing
//! has been gathered.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use crate::error::DirectoryListError;
use crate::github::client::{DirectoryClient, GitHubClient};
use crate::models::{ContentEntry, EntryKind, FileEntry, RepoMap};

pub struct RepoMapper<C> {
    client: C,
}

pub type SharedMapper = Arc<RepoMapper<GitHubClient>>;

impl<C: DirectoryClient> RepoMapper<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Flatten the subtree rooted at `root` (empty string = repository root)
    /// into one complete `RepoMap`. Returns only after every reachable
    /// directory has been visited or skipped; no partial result escapes.
    pub async fn flatten(&self, root: &str) -> Result<RepoMap, DirectoryListError> {
        let start = Instant::now();
        let entries = self.client.list_directory(root).await?;

        let mut files = RepoMap::new();
        self.descend(entries, &mut files).await;

        tracing::info!(
            "mapped {} files under '{}' in {:?}",
            files.len(),
            if root.is_empty() { "(root)" } else { root },
            start.elapsed()
        );
        Ok(files)
    }

    /// Depth-first, pre-order: a subtree is fully absorbed before the walk
    /// moves on to the next sibling. Self-recursion forces the boxed future.
    fn descend<'a>(
        &'a self,
        entries: Vec<ContentEntry>,
        files: &'a mut RepoMap,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            for entry in entries {
                match entry.kind {
                    EntryKind::File => {
                        let file = FileEntry::from(entry);
                        files.insert(file.path.clone(), file);
                    }
                    EntryKind::Dir => match self.client.list_directory(&entry.path).await {
                        Ok(children) => self.descend(children, &mut *files).await,
                        Err(e) => tracing::warn!("{}; skipping subtree", e),
                    },
                    // Neither holds file content nor can be descended into.
                    EntryKind::Symlink | EntryKind::Submodule => {}
                }
            }
        })
    }
}
