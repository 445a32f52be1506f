//! 住所文字列からの座標抽出
//!
//! ジオコーダではなく、`31.65 74.89` / `31.65, 74.89` のような記述を拾うだけのヒューリスティック。
//! 値の妥当性（緯度±90など）は検証しない。`123.45 678.9` もそのまま抽出する。

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 抽出結果（見つからなければ両方空）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: String,
    pub lng: String,
}

impl Coordinates {
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty() && self.lng.is_empty()
    }
}

/// 住所から最初の「小数 区切り 小数」を抽出する
///
/// 各数値は小数点の前後に1桁以上必要（整数のみは不一致）。
/// 区切りはカンマ・空白の1文字以上。抽出した文字列は加工しない。
pub fn extract_coordinates(address: &str) -> Coordinates {
    lazy_static::lazy_static! {
        static ref GPS_RE: Regex = Regex::new(r"(-?\d+\.\d+)[,\s]+(-?\d+\.\d+)").unwrap();
    }

    match GPS_RE.captures(address) {
        Some(caps) => Coordinates {
            lat: caps[1].to_string(),
            lng: caps[2].to_string(),
        },
        None => Coordinates::default(),
    }
}
