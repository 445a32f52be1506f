//! レコード型定義
//!
//! 取り込み境界（table.rs）で列名から変換された後の型付きレコード:
//! - PartyRecord: マスタ（取引先台帳）の1件
//! - SalesRecord: 売上リストの1件
//! - MissingParty: マスタに存在しない売上取引先（手入力で補完する作業用コピー）
//! - ReportRow: 出力レポートの1行

use serde::{Deserialize, Serialize};

/// マスタの取引先レコード
///
/// 識別キーは `normalize_name(&name)`。任意項目は空文字列で表す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyRecord {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// 緯度（文字列のまま保持、精度を変えない）
    pub latitude: String,
    /// 経度
    pub longitude: String,
}

impl PartyRecord {
    /// 正規化済みの識別キー
    pub fn key(&self) -> String {
        crate::normalize::normalize_name(&self.name)
    }
}

/// 売上レコード（取り込み後は不変）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesRecord {
    pub name: String,
    pub phone: String,
}

impl SalesRecord {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn key(&self) -> String {
        crate::normalize::normalize_name(&self.name)
    }
}

/// マスタ未登録の取引先
///
/// `name` は生成後に変更できない（`EditableField` に含まれない）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissingParty {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl MissingParty {
    /// 住所が未入力か（空白のみも未入力扱い）
    pub fn is_incomplete(&self) -> bool {
        self.address.trim().is_empty()
    }
}

/// 補完作業で編集できるフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Phone,
    Address,
}

impl std::fmt::Display for EditableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditableField::Phone => write!(f, "phone"),
            EditableField::Address => write!(f, "address"),
        }
    }
}

/// 出力レポートの1行
///
/// `group` / `notes` は後工程の手書き用。生成時は常に空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRow {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub phone: String,
    pub group: String,
    pub notes: String,
}

/// レポートの列見出し（出力順）
pub const REPORT_HEADERS: [&str; 7] = [
    "Name",
    "Latitude",
    "Longitude",
    "Address",
    "Phone",
    "Group",
    "Notes",
];

impl ReportRow {
    /// `REPORT_HEADERS` と同じ順序の値
    pub fn values(&self) -> [&str; 7] {
        [
            &self.name,
            &self.latitude,
            &self.longitude,
            &self.address,
            &self.phone,
            &self.group,
            &self.notes,
        ]
    }
}

/// テンプレートの列名一覧
///
/// 認識確認のみに使う。出力列の並びや対応付けには影響しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateColumnSet {
    pub columns: Vec<String>,
}

impl TemplateColumnSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// 1列以上あれば認識済み
    pub fn is_recognized(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
