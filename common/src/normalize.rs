//! 取引先名の正規化
//!
//! 照合キーはすべてこのモジュールを通して作る。生の名前同士を直接比較しないこと。

/// 取引先名を照合キーに変換する
///
/// - 小文字化
/// - 前後の空白を除去
/// - 連続する空白を1つのスペースに圧縮
///
/// 空文字列は空文字列のキーになる。失敗しない。
pub fn normalize_name(name: &str) -> String {
    name.split(is_separator)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// 区切りとみなす空白文字
///
/// Unicode White_Space に BOM (U+FEFF) を加え、NEL (U+0085) を除いた集合。
/// 表計算ソフトから貼り付けた名前に紛れ込むBOMを空白として扱う。
fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
