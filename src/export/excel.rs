//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す。

use crate::error::{Result, RouteReconError};
use route_recon_common::export::excel_core::generate_report_buffer;
use route_recon_common::ReportRow;
use std::path::Path;

pub fn generate_report(rows: &[ReportRow], output_path: &Path, sheet_name: &str) -> Result<()> {
    let buffer = generate_report_buffer(rows, sheet_name).map_err(RouteReconError::ExcelGeneration)?;

    std::fs::write(output_path, buffer)
        .map_err(|e| RouteReconError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    tracing::info!(rows = rows.len(), path = %output_path.display(), "report written");
    Ok(())
}
