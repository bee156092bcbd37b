use std::{fs, path::PathBuf};

use crate::error::Error;

use super::AssetSource;

/// Serves assets from a local directory laid out like a web root.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
        let path = self.root.join(path.trim_start_matches('/'));
        log::debug!("reading asset: {:?}", path);
        Ok(fs::read(path)?)
    }
}
