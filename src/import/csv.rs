// CSV/TSV import

use crate::error::{Result, RouteReconError};
use route_recon_common::RawTable;
use std::path::Path;

pub fn read(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path)?;
    let content = decode_bytes(bytes);
    parse_str(&content)
}

/// UTF-8として読めなければ Windows-1252 として読む
///
/// Excel出力のCSVは非UTF-8のことがある。
pub fn decode_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            tracing::debug!("input is not UTF-8, decoded as Windows-1252");
            decoded.into_owned()
        }
    }
}

/// 先頭10行から区切り文字を推定する（タブ・セミコロン・カンマ・パイプ）
///
/// 候補ごとに各行をCSVとして解析し、列数が1行目と揃う行数×列数で採点する。
/// 引用符内の区切り文字は数えない。どれも2列以上にならなければカンマ。
pub fn sniff_delimiter(content: &str) -> u8 {
    let lines: Vec<&str> = content.lines().take(10).collect();
    if lines.is_empty() {
        return b',';
    }
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];

    let mut best = b',';
    let mut best_score = 0;
    for &delim in candidates {
        let counts: Vec<usize> = lines.iter().map(|line| field_count(line, delim)).collect();
        let first = counts[0];
        if first <= 1 {
            continue;
        }
        let consistent = counts.iter().filter(|&&c| c == first).count();
        let score = consistent * first;
        if score > best_score {
            best = delim;
            best_score = score;
        }
    }
    best
}

fn field_count(line: &str, delimiter: u8) -> usize {
    ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|r| r.ok())
        .map(|r| r.len())
        .unwrap_or(1)
}

pub fn parse_str(content: &str) -> Result<RawTable> {
    let delimiter = sniff_delimiter(content);

    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| RouteReconError::Parse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| RouteReconError::Parse(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}
