use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::gate::DisplayState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub started_at: DateTime<Utc>,
    pub last_evaluated_at: Option<DateTime<Utc>>,
    pub display: DisplayState,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            started_at: Utc::now(),
            last_evaluated_at: None,
            display: DisplayState::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn state_dir(root: &Path) -> PathBuf {
        root.join(".slidedex")
    }

    fn state_path(root: &Path) -> PathBuf {
        Self::state_dir(root).join("session.json")
    }

    /// Loads the session for this catalog root; absent or unreadable state
    /// starts a fresh session rather than failing the pass.
    pub async fn load(root: &Path) -> Self {
        let path = Self::state_path(root);
        if !path.exists() {
            return Self::new();
        }

        match fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::new(),
        }
    }

    pub async fn save(&self, root: &Path) -> Result<()> {
        let dir = Self::state_dir(root);
        fs::create_dir_all(&dir).await?;

        let gitignore_path = dir.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(&gitignore_path, "*\n").await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::state_path(root), content).await?;
        Ok(())
    }

    pub async fn reset(root: &Path) -> Result<()> {
        let path = Self::state_path(root);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_evaluated_at = Some(Utc::now());
    }
}
