//! Excel生成（共通ライブラリ）
//!
//! レポート行を1シートの表としてxlsxバッファに書き出す。値はすべて文字列セル。

use crate::types::{ReportRow, REPORT_HEADERS};
use rust_xlsxwriter::*;

/// 既定のシート名
pub const REPORT_SHEET_NAME: &str = "Report";

/// 列幅（文字数単位、REPORT_HEADERS と同じ順）
const COLUMN_WIDTHS: [f64; 7] = [32.0, 12.0, 12.0, 48.0, 16.0, 14.0, 24.0];

/// レポートをバッファに生成
///
/// # Arguments
/// * `rows` - レポート行（出力順）
/// * `sheet_name` - シート名
pub fn generate_report_buffer(rows: &[ReportRow], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        for (col, value) in row.values().iter().enumerate() {
            // 空セルは書かない（空文字列の共有文字列を作らない）
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(excel_row, col as u16, *value)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
