pub mod excel;

use crate::config::Config;
use crate::error::Result;
use route_recon_common::ReportRow;
use std::path::{Path, PathBuf};

/// レポートを設定に従って書き出し、出力パスを返す
pub fn export_report(
    rows: &[ReportRow],
    config: &Config,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let output_path = config.report_path(output_dir);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    println!("- Excelを生成中...");
    excel::generate_report(rows, &output_path, &config.sheet_name)?;
    println!("✔ Excel出力: {}", output_path.display());

    Ok(output_path)
}
