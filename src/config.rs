use crate::error::{Result, RouteReconError};
use route_recon_common::export::excel_core::REPORT_SHEET_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_REPORT_NAME: &str = "Updated_Route_Report";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// レポート出力先（未設定ならカレントディレクトリ）
    pub output_dir: Option<PathBuf>,
    /// 出力ファイル名（拡張子なし）
    pub report_name: String,
    pub sheet_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            report_name: DEFAULT_REPORT_NAME.into(),
            sheet_name: REPORT_SHEET_NAME.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            config.report_name = validate_report_name(&config.report_name)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RouteReconError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("route-recon").join("config.json"))
    }

    /// 出力ファイルのパス（`override_dir` が優先）
    pub fn report_path(&self, override_dir: Option<&Path>) -> PathBuf {
        let dir = override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(format!("{}.xlsx", self.report_name))
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }

    pub fn set_report_name(&mut self, name: String) -> Result<()> {
        self.report_name = validate_report_name(&name)?;
        self.save()
    }
}

/// レポート名を検証して拡張子なしの名前を返す
///
/// 出力先ディレクトリの外に書き出さないよう、単一のファイル名だけを受け付ける。
pub fn validate_report_name(name: &str) -> Result<String> {
    let name = name.trim().trim_end_matches(".xlsx");
    if name.is_empty() {
        return Err(RouteReconError::Config("レポート名が空です".into()));
    }
    let single_component = matches!(
        Path::new(name).components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    );
    if name.contains(['/', '\\']) || name.contains("..") || !single_component {
        return Err(RouteReconError::Config(format!(
            "レポート名にパス区切りは使えません: {}",
            name
        )));
    }
    Ok(name.to_string())
}
