//! マスタと売上の差分（マスタ未登録の取引先）を求める

use crate::normalize::normalize_name;
use crate::types::{MissingParty, PartyRecord, SalesRecord};
use std::collections::HashSet;

/// 売上にあってマスタにない取引先を列挙する
///
/// 売上の並び順を保つ。同じキーに正規化される売上が複数あれば、それぞれ1件ずつ出力する
/// （重複除去しない）。住所は空で初期化。
pub fn find_missing(master: &[PartyRecord], sales: &[SalesRecord]) -> Vec<MissingParty> {
    let master_keys: HashSet<String> = master.iter().map(|m| normalize_name(&m.name)).collect();

    let missing: Vec<MissingParty> = sales
        .iter()
        .filter(|s| !master_keys.contains(&normalize_name(&s.name)))
        .map(|s| MissingParty {
            name: s.name.clone(),
            phone: s.phone.clone(),
            address: String::new(),
        })
        .collect();

    tracing::debug!(
        master = master.len(),
        sales = sales.len(),
        missing = missing.len(),
        "reconciled master against sales"
    );

    missing
}
