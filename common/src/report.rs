//! レポート生成（売上 × マスタの結合）
//!
//! 売上1件につき必ず1行を出力する。マスタに一致しない売上も空欄の行になる。

use crate::normalize::normalize_name;
use crate::types::{PartyRecord, ReportRow, SalesRecord};
use std::collections::HashMap;

/// 正規化名 → マスタレコードの索引
///
/// 同じキーが複数ある場合は後から入れたものが勝つ。
pub fn build_lookup(master: &[PartyRecord]) -> HashMap<String, &PartyRecord> {
    let mut lookup = HashMap::with_capacity(master.len());
    for record in master {
        lookup.insert(normalize_name(&record.name), record);
    }
    lookup
}

/// 売上とマスタをレポート行に射影する
///
/// - name: 売上の表記のまま
/// - latitude / longitude / address: 一致したマスタから（なければ空）
/// - phone: 売上の電話番号、空ならマスタの電話番号
/// - group / notes: 常に空
pub fn project(sales: &[SalesRecord], master: &[PartyRecord]) -> Vec<ReportRow> {
    let lookup = build_lookup(master);
    let mut unmatched = 0usize;

    let rows: Vec<ReportRow> = sales
        .iter()
        .map(|sale| {
            let matched = lookup.get(&normalize_name(&sale.name)).copied();
            if matched.is_none() {
                unmatched += 1;
            }

            let phone = if !sale.phone.is_empty() {
                sale.phone.clone()
            } else {
                matched.map(|m| m.phone.clone()).unwrap_or_default()
            };

            ReportRow {
                name: sale.name.clone(),
                latitude: matched.map(|m| m.latitude.clone()).unwrap_or_default(),
                longitude: matched.map(|m| m.longitude.clone()).unwrap_or_default(),
                address: matched.map(|m| m.address.clone()).unwrap_or_default(),
                phone,
                group: String::new(),
                notes: String::new(),
            }
        })
        .collect();

    tracing::debug!(rows = rows.len(), unmatched, "projected report rows");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(name: &str, phone: &str, address: &str, lat: &str, lng: &str) -> PartyRecord {
        PartyRecord {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            latitude: lat.into(),
            longitude: lng.into(),
        }
    }

    #[test]
    fn test_project_matched_and_unmatched() {
        let master = vec![party("Acme Corp", "111", "Main St", "31.65", "74.89")];
        let sales = vec![
            SalesRecord::new("  ACME corp", ""),
            SalesRecord::new("Beta LLC", "222"),
        ];

        let rows = project(&sales, &master);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "  ACME corp");
        assert_eq!(rows[0].address, "Main St");
        assert_eq!(rows[0].latitude, "31.65");
        assert_eq!(rows[0].longitude, "74.89");
        assert_eq!(rows[0].phone, "111");

        assert_eq!(rows[1].name, "Beta LLC");
        assert_eq!(rows[1].address, "");
        assert_eq!(rows[1].latitude, "");
        assert_eq!(rows[1].phone, "222");
    }

    #[test]
    fn test_project_sales_phone_wins() {
        let master = vec![party("Acme", "111", "", "", "")];
        let rows = project(&[SalesRecord::new("acme", "999")], &master);
        assert_eq!(rows[0].phone, "999");
    }

    #[test]
    fn test_project_phone_empty_everywhere() {
        let master = vec![party("Acme", "", "", "", "")];
        let rows = project(&[SalesRecord::new("acme", "")], &master);
        assert_eq!(rows[0].phone, "");
    }

    #[test]
    fn test_project_group_and_notes_empty() {
        let master = vec![party("Acme", "1", "a", "1.0", "2.0")];
        for row in project(&[SalesRecord::new("Acme", ""), SalesRecord::new("X", "")], &master) {
            assert!(row.group.is_empty());
            assert!(row.notes.is_empty());
        }
    }

    #[test]
    fn test_project_length_matches_sales() {
        let master = vec![party("a", "", "", "", "")];
        for n in [0usize, 1, 5, 20] {
            let sales: Vec<SalesRecord> = (0..n)
                .map(|i| SalesRecord::new(if i % 2 == 0 { "a" } else { "zz" }, ""))
                .collect();
            assert_eq!(project(&sales, &master).len(), n);
        }
        assert_eq!(project(&[SalesRecord::new("x", "")], &[]).len(), 1);
    }

    #[test]
    fn test_project_last_write_wins() {
        let master = vec![
            party("Acme Corp", "", "Old Address", "", ""),
            party("ACME  CORP", "", "New Address", "", ""),
        ];
        let rows = project(&[SalesRecord::new("acme corp", "")], &master);
        assert_eq!(rows[0].address, "New Address");

        let lookup = build_lookup(&master);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup["acme corp"].address, "New Address");
    }

    #[test]
    fn test_project_full_coverage_has_no_empty_location() {
        let names = ["Acme", "Beta", "Gamma"];
        let master: Vec<PartyRecord> = names
            .iter()
            .enumerate()
            .map(|(i, n)| party(n, "", &format!("Street {}", i), &format!("{}.5", i), "1.0"))
            .collect();
        let sales: Vec<SalesRecord> = names
            .iter()
            .map(|n| SalesRecord::new(n.to_uppercase(), ""))
            .collect();

        let rows = project(&sales, &master);
        assert!(rows.iter().all(|r| !r.address.is_empty() && !r.latitude.is_empty()));
    }
}
