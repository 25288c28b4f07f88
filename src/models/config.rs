//! Configuration model loaded from external sources.

use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::domain::image::ImageLayout;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Root directory for client photos.
    pub images_dir: String,
    /// Partition directory under `images_dir`; the current year when unset.
    #[serde(default)]
    pub image_year: Option<i32>,
}

impl ServerConfig {
    pub fn image_layout(&self) -> ImageLayout {
        let year = self.image_year.unwrap_or_else(|| Utc::now().year());
        ImageLayout::new(&self.images_dir, year)
    }
}
