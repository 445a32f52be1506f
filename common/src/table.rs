//! 取り込み境界
//!
//! ファイルから読んだ「見出し → 文字列」の行を、ここで一度だけ型付きレコードに変換する。
//! パイプライン内では列名の文字列で値を引かない。

use crate::coordinates::extract_coordinates;
use crate::types::{PartyRecord, SalesRecord, TemplateColumnSet};

pub const COL_PARTY_NAME: &str = "Party Name";
pub const COL_PHONE_NO: &str = "Phone No.";
pub const COL_NUMBER: &str = "Number";
pub const COL_ADDRESS: &str = "Address";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

/// 先頭行を見出しとする表データ
///
/// セルはすべて文字列化済み。欠けたセルは空文字列として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// 見出し行とデータ行から作る
    ///
    /// 見出しは前後の空白を除去する。全セルが空の行は捨てる。
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// 行 `row` の列 `header` の値（列がない・セルがない場合は空）
    pub fn value(&self, row: usize, header: &str) -> &str {
        self.column_index(header)
            .and_then(|col| self.rows.get(row).and_then(|r| r.get(col)))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn row_reader(&self, header: &str) -> impl Fn(&[String]) -> String {
        let col = self.column_index(header);
        move |row: &[String]| {
            col.and_then(|c| row.get(c))
                .cloned()
                .unwrap_or_default()
        }
    }

    /// マスタとして読む
    ///
    /// 電話番号は `Number` 列（空なら `Phone No.`）。緯度・経度が空のときは住所から抽出した値で補う
    /// （それぞれ独立に判定）。
    pub fn to_party_records(&self) -> Vec<PartyRecord> {
        let name = self.row_reader(COL_PARTY_NAME);
        let number = self.row_reader(COL_NUMBER);
        let phone_no = self.row_reader(COL_PHONE_NO);
        let address = self.row_reader(COL_ADDRESS);
        let latitude = self.row_reader(COL_LATITUDE);
        let longitude = self.row_reader(COL_LONGITUDE);

        self.rows
            .iter()
            .map(|row| {
                let row = row.as_slice();
                let address = address(row);
                let coords = extract_coordinates(&address);

                let mut phone = number(row);
                if phone.is_empty() {
                    phone = phone_no(row);
                }
                let mut lat = latitude(row);
                if lat.is_empty() {
                    lat = coords.lat;
                }
                let mut lng = longitude(row);
                if lng.is_empty() {
                    lng = coords.lng;
                }

                PartyRecord {
                    name: name(row),
                    phone,
                    address,
                    latitude: lat,
                    longitude: lng,
                }
            })
            .collect()
    }

    /// 売上として読む
    pub fn to_sales_records(&self) -> Vec<SalesRecord> {
        let name = self.row_reader(COL_PARTY_NAME);
        let phone = self.row_reader(COL_PHONE_NO);
        self.rows
            .iter()
            .map(|row| SalesRecord::new(name(row.as_slice()), phone(row.as_slice())))
            .collect()
    }

    /// テンプレートの列名（空の見出しは除く）
    ///
    /// データ行がなくても見出しがあれば認識する。
    pub fn template_columns(&self) -> TemplateColumnSet {
        TemplateColumnSet::new(
            self.headers
                .iter()
                .filter(|h| !h.is_empty())
                .cloned()
                .collect(),
        )
    }
}

/// 数値セルを比較用の文字列にする
///
/// 整数値の浮動小数は小数部を付けない（`9876543210.0` → `9876543210`）。
pub fn float_to_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
