//! Route Recon Common Library
//!
//! マスタ（取引先台帳）と売上リストの照合、未登録取引先の補完、レポート生成の中核処理。
//! ファイル入出力や対話UIは持たない（CLI側の責務）。

pub mod types;
pub mod error;
pub mod normalize;
pub mod coordinates;
pub mod reconcile;
pub mod gap_fill;
pub mod report;
pub mod session;
pub mod table;
pub mod export;

pub use types::{
    EditableField, MissingParty, PartyRecord, ReportRow, SalesRecord, TemplateColumnSet,
    REPORT_HEADERS,
};
pub use error::{Error, Result};
pub use normalize::normalize_name;
pub use coordinates::{extract_coordinates, Coordinates};
pub use reconcile::find_missing;
pub use gap_fill::GapFillSession;
pub use report::{build_lookup, project};
pub use session::{Session, Step};
pub use table::RawTable;
