use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read access to the files of an installed application package
pub trait InstallLocation {
    /// Read the named file, relative to the install root, in full
    fn read(&self, name: &str) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// An install location backed by a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryLocation {
    root: PathBuf,
}

impl DirectoryLocation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl InstallLocation for DirectoryLocation {
    async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.root.join(name);
        debug!("Opening {}", path.display());

        // The handle is dropped, and the file closed, on every return path
        let mut file = File::open(&path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        debug!("Read {} bytes from {}", contents.len(), path.display());
        Ok(contents)
    }
}
