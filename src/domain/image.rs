//! Client photo handling: the uploaded attachment and where it ends up on disk.

use std::path::{Path, PathBuf};

use crate::domain::types::{ClientId, ClientType};

/// Raw image uploaded alongside the registration form.
///
/// Only `content_type` takes part in validation; `file_name` is kept for logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl ImageAttachment {
    pub fn new(
        bytes: Vec<u8>,
        content_type: Option<String>,
        file_name: Option<String>,
    ) -> Self {
        Self {
            bytes,
            content_type,
            file_name,
        }
    }
}

/// Builds the file name bound to a client row: `UPPER(id ++ type).jpg`.
pub fn image_file_name(id: ClientId, client_type: ClientType) -> String {
    format!("{}.jpg", format!("{id}{client_type}").to_uppercase())
}

/// Year-partitioned directory tree holding client photos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLayout {
    root: PathBuf,
    year: i32,
}

impl ImageLayout {
    pub fn new(root: impl Into<PathBuf>, year: i32) -> Self {
        Self {
            root: root.into(),
            year,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `<root>/<year>/<UPPER(id ++ type)>.jpg`
    pub fn path_for(&self, id: ClientId, client_type: ClientType) -> PathBuf {
        self.root
            .join(self.year.to_string())
            .join(image_file_name(id, client_type))
    }
}
