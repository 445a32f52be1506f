//! マスタ未登録取引先の補完セッション
//!
//! 照合で見つかった未登録取引先を保持し、電話番号・住所の手入力を受け付ける。
//! `finalize` でマスタに追加するレコードを生成するが、マスタ自体は変更しない。

use crate::coordinates::extract_coordinates;
use crate::error::{Error, Result};
use crate::normalize::normalize_name;
use crate::types::{EditableField, MissingParty, PartyRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapFillSession {
    entries: Vec<MissingParty>,
}

impl GapFillSession {
    pub fn new(entries: Vec<MissingParty>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MissingParty] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&MissingParty> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 指定エントリのフィールドを置き換える
    ///
    /// 範囲外のインデックスは呼び出し側の契約違反として `IndexOutOfRange` を返す。
    pub fn update_field(&mut self, index: usize, field: EditableField, value: &str) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        match field {
            EditableField::Phone => entry.phone = value.to_string(),
            EditableField::Address => entry.address = value.to_string(),
        }
        tracing::debug!(index, %field, "updated missing party");
        Ok(())
    }

    /// 正規化名が一致するエントリのインデックス
    pub fn indices_for_name(&self, name: &str) -> Vec<usize> {
        let key = normalize_name(name);
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| normalize_name(&e.name) == key)
            .map(|(i, _)| i)
            .collect()
    }

    /// 住所が未入力のエントリ
    ///
    /// 警告用。ここが空でなくても `finalize` は実行できる。
    pub fn incomplete(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_incomplete())
            .map(|(i, _)| i)
            .collect()
    }

    /// 全エントリをマスタ用レコードに変換する（住所から座標を抽出）
    pub fn finalize(&self) -> Vec<PartyRecord> {
        self.entries
            .iter()
            .map(|entry| {
                let coords = extract_coordinates(&entry.address);
                PartyRecord {
                    name: entry.name.clone(),
                    phone: entry.phone.clone(),
                    address: entry.address.clone(),
                    latitude: coords.lat,
                    longitude: coords.lng,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GapFillSession {
        GapFillSession::new(vec![
            MissingParty {
                name: "Beta LLC".into(),
                phone: "555".into(),
                address: String::new(),
            },
            MissingParty {
                name: "Gamma Ltd".into(),
                phone: String::new(),
                address: String::new(),
            },
        ])
    }

    #[test]
    fn test_update_field() {
        let mut s = session();
        s.update_field(0, EditableField::Address, "31.65 74.89").unwrap();
        s.update_field(1, EditableField::Phone, "999").unwrap();

        assert_eq!(s.get(0).unwrap().address, "31.65 74.89");
        assert_eq!(s.get(0).unwrap().phone, "555");
        assert_eq!(s.get(1).unwrap().phone, "999");
        assert_eq!(s.get(1).unwrap().name, "Gamma Ltd");
    }

    #[test]
    fn test_update_field_out_of_range() {
        let mut s = session();
        let err = s.update_field(2, EditableField::Phone, "x").unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 2, len: 2 });
        // 変更されていない
        assert_eq!(s, session());
    }

    #[test]
    fn test_incomplete() {
        let mut s = session();
        assert_eq!(s.incomplete(), vec![0, 1]);
        s.update_field(1, EditableField::Address, "Main Street").unwrap();
        s.update_field(0, EditableField::Address, "  ").unwrap();
        assert_eq!(s.incomplete(), vec![0]);
    }

    #[test]
    fn test_finalize_extracts_coordinates() {
        let mut s = session();
        s.update_field(0, EditableField::Address, "31.65, 74.89").unwrap();
        s.update_field(1, EditableField::Address, "Main Street").unwrap();

        let records = s.finalize();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "Beta LLC");
        assert_eq!(records[0].phone, "555");
        assert_eq!(records[0].address, "31.65, 74.89");
        assert_eq!(records[0].latitude, "31.65");
        assert_eq!(records[0].longitude, "74.89");

        assert_eq!(records[1].address, "Main Street");
        assert_eq!(records[1].latitude, "");
        assert_eq!(records[1].longitude, "");
    }

    #[test]
    fn test_finalize_does_not_block_on_incomplete() {
        let s = session();
        assert_eq!(s.finalize().len(), 2);
    }

    #[test]
    fn test_indices_for_name() {
        let mut s = session();
        s.entries.push(MissingParty {
            name: " beta  llc".into(),
            ..Default::default()
        });
        assert_eq!(s.indices_for_name("BETA LLC"), vec![0, 2]);
        assert!(s.indices_for_name("nobody").is_empty());
    }
}
