use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteReconError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（csv/tsv/txt/xlsx/xlsm/xls/xlsb/ods）")]
    UnsupportedFormat(String),

    #[error("ファイルを解析できません。形式を確認してください: {0}")]
    Parse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("住所が未入力の取引先が{0}件あります。`--yes` で続行できます")]
    IncompleteAddresses(usize),

    #[error(transparent)]
    Common(#[from] route_recon_common::Error),
}

pub type Result<T> = std::result::Result<T, RouteReconError>;
