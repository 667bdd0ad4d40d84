// Source file input
//   The view reads the full byte content of its input exactly once per
//   change; the trait keeps that read async and backend-agnostic, so an
//   in-memory upload and a file on disk look the same to the lifecycle.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::io::Result;
use std::path::PathBuf;

pub trait SourceFile: Send + Sync {
    /// Read the entire byte content of the source.
    ///
    /// Required methods
    ///   fn read_all(&self) -> BoxFuture<'_, Result<Vec<u8>>>;
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<u8>>>;
}

impl SourceFile for Vec<u8> {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<u8>>> {
        async move { Ok(self.clone()) }.boxed()
    }
}

/// A source backed by a path on the local filesystem.
#[derive(Debug, Clone)]
pub struct PathSource {
    path: PathBuf,
}

impl PathSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SourceFile for PathSource {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<u8>>> {
        async move { tokio::fs::read(&self.path).await }.boxed()
    }
}
