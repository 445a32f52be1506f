//! エラー型定義

use crate::session::Step;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Prerequisite missing: {0}")]
    PrerequisiteMissing(String),

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Operation `{operation}` is not allowed in step {step}")]
    InvalidStep { operation: &'static str, step: Step },

    #[error("Template not recognized: no columns found")]
    TemplateNotRecognized,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
