// Spreadsheet import (xlsx, xlsm, xls, xlsb, ods) via calamine

use crate::error::{Result, RouteReconError};
use calamine::{open_workbook_auto, Data, Reader};
use route_recon_common::table::float_to_text;
use route_recon_common::RawTable;
use std::path::Path;

pub fn read(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| RouteReconError::Parse(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RouteReconError::Parse(format!("{}: シートがありません", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| RouteReconError::Parse(format!("{} [{}]: {}", path.display(), sheet_name, e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_text).collect(),
        None => Vec::new(),
    };
    let body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();

    Ok(RawTable::new(headers, body))
}

/// セル値を比較用の文字列にする
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => float_to_text(*n),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        other => other.to_string(),
    }
}
