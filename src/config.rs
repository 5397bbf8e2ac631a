use crate::error::{RepairCostError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 見積書タイトルの既定値
const DEFAULT_QUOTE_TITLE: &str = "修繕費概算見積";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 既定で使うカタログJSONファイル（未設定なら組み込みカタログ）
    pub catalog_path: Option<PathBuf>,
    /// 見積書タイトルの既定値
    pub quote_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            quote_title: DEFAULT_QUOTE_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RepairCostError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("repair-cost").join("config.json"))
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn set_quote_title(&mut self, title: String) -> Result<()> {
        self.quote_title = title;
        self.save()
    }
}
