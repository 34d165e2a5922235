use std::{path::PathBuf, sync::Arc};

use super::MediaType;
use crate::utils::content_digest;

/// A loaded icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub path: PathBuf,
    pub media_type: MediaType,
    pub bytes: Arc<[u8]>,
    /// SHA-256 of `bytes`, uppercase hex.
    pub digest: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let digest = content_digest(&bytes);
        Asset {
            name: name.into(),
            media_type: MediaType::from_path(&path),
            path,
            bytes: bytes.into(),
            digest,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
