//! 表ファイルの読み込み
//!
//! CSV系（csv/tsv/txt）とスプレッドシート系（xlsx/xlsm/xls/xlsb/ods）を `RawTable` に変換する。
//! スプレッドシートは先頭シートのみ読む。

pub mod csv;
pub mod xlsx;

use crate::error::{Result, RouteReconError};
use route_recon_common::RawTable;
use std::path::Path;

/// ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Spreadsheet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "tsv" | "txt" => Ok(TableFormat::Delimited),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(TableFormat::Spreadsheet),
            _ => Err(RouteReconError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// ファイルを読み込んで表にする
pub fn read_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(RouteReconError::FileNotFound(path.display().to_string()));
    }

    let table = match TableFormat::from_path(path)? {
        TableFormat::Delimited => csv::read(path)?,
        TableFormat::Spreadsheet => xlsx::read(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        headers = table.headers.len(),
        rows = table.len(),
        "imported table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a.CSV")).unwrap(), TableFormat::Delimited);
        assert_eq!(TableFormat::from_path(Path::new("a.tsv")).unwrap(), TableFormat::Delimited);
        assert_eq!(TableFormat::from_path(Path::new("a.xlsx")).unwrap(), TableFormat::Spreadsheet);
        assert_eq!(TableFormat::from_path(Path::new("a.ods")).unwrap(), TableFormat::Spreadsheet);
    }

    #[test]
    fn test_format_unsupported() {
        assert!(matches!(
            TableFormat::from_path(Path::new("a.pdf")),
            Err(RouteReconError::UnsupportedFormat(_))
        ));
        assert!(TableFormat::from_path(Path::new("noext")).is_err());
    }
}
