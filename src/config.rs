use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::gate::DEFAULT_GALLERY_THRESHOLD;

pub const CONFIG_FILE: &str = "slidedex.toml";
pub const DEFAULT_DATASET: &str = "slides.csv";
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/angkj1995/consulting-slides/refs/heads/main/New%20folder/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dataset: PathBuf,
    pub image_base_url: String,
    pub gallery_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            gallery_threshold: DEFAULT_GALLERY_THRESHOLD,
        }
    }
}

impl Config {
    pub fn dataset_path(&self, root: &Path) -> PathBuf {
        if self.dataset.is_absolute() {
            self.dataset.clone()
        } else {
            root.join(&self.dataset)
        }
    }
}

pub async fn load_config(root: &Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Resolves the catalog root: an explicit path wins, otherwise walk up from
/// the current directory looking for a config file or the default dataset.
/// Falls back to the starting directory; a missing dataset surfaces as a
/// load error with the full path.
pub async fn find_catalog_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let start = match path {
        Some(p) => {
            if p.is_absolute() {
                p
            } else {
                std::env::current_dir()?.join(p)
            }
        }
        None => std::env::current_dir()?,
    };

    let start = fs::canonicalize(&start)
        .await
        .with_context(|| format!("Failed to canonicalize path: {}", start.display()))?;

    let mut current = start.clone();
    loop {
        if has_catalog_marker(&current).await {
            return Ok(current);
        }
        if !current.pop() {
            break;
        }
    }

    Ok(start)
}

async fn has_catalog_marker(dir: &Path) -> bool {
    fs::try_exists(dir.join(CONFIG_FILE)).await.unwrap_or(false)
        || fs::try_exists(dir.join(DEFAULT_DATASET))
            .await
            .unwrap_or(false)
}
