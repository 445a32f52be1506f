//! セッション（作業フローの状態管理）
//!
//! マスタ・売上・テンプレート・補完状態を1つのコンテキストで保持し、
//! `Upload → FixMissing → Mapping → Done` の遷移だけを許可する。
//! 照合で未登録取引先が0件なら FixMissing は飛ばす。Done からは遷移しない
//! （やり直しは `Session::new()`）。
//!
//! ## 変更履歴
//! - 2026-10-17: 初期作成

use crate::error::{Error, Result};
use crate::gap_fill::GapFillSession;
use crate::reconcile::find_missing;
use crate::report::project;
use crate::types::{PartyRecord, ReportRow, SalesRecord, TemplateColumnSet};
use serde::{Deserialize, Serialize};

/// 作業ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Step {
    /// ファイル読み込み
    #[default]
    Upload,
    /// 未登録取引先の補完
    FixMissing,
    /// テンプレート確認・レポート生成待ち
    Mapping,
    /// 完了
    Done,
}

impl Step {
    /// 進捗表示用の番号（1始まり）と総数
    pub fn position(&self) -> (usize, usize) {
        let n = match self {
            Step::Upload => 1,
            Step::FixMissing => 2,
            Step::Mapping => 3,
            Step::Done => 4,
        };
        (n, 4)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Upload => write!(f, "Upload"),
            Step::FixMissing => write!(f, "FixMissing"),
            Step::Mapping => write!(f, "Mapping"),
            Step::Done => write!(f, "Done"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    step: Step,
    master: Vec<PartyRecord>,
    sales: Vec<SalesRecord>,
    template: Option<TemplateColumnSet>,
    gap_fill: Option<GapFillSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn master(&self) -> &[PartyRecord] {
        &self.master
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    pub fn template(&self) -> Option<&TemplateColumnSet> {
        self.template.as_ref()
    }

    fn require(&self, expected: Step, operation: &'static str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(Error::InvalidStep {
                operation,
                step: self.step,
            })
        }
    }

    /// マスタを丸ごと置き換える（Upload のみ）
    pub fn set_master(&mut self, master: Vec<PartyRecord>) -> Result<()> {
        self.require(Step::Upload, "set_master")?;
        self.master = master;
        Ok(())
    }

    /// 売上を丸ごと置き換える（Upload のみ）
    pub fn set_sales(&mut self, sales: Vec<SalesRecord>) -> Result<()> {
        self.require(Step::Upload, "set_sales")?;
        self.sales = sales;
        Ok(())
    }

    /// テンプレートを登録する（Done 以外）
    pub fn set_template(&mut self, template: TemplateColumnSet) -> Result<()> {
        if self.step == Step::Done {
            return Err(Error::InvalidStep {
                operation: "set_template",
                step: self.step,
            });
        }
        self.template = Some(template);
        Ok(())
    }

    /// 照合して次のステップに進む
    ///
    /// マスタ・売上のどちらかが空なら `PrerequisiteMissing`（状態は変わらない）。
    pub fn reconcile(&mut self) -> Result<Step> {
        self.require(Step::Upload, "reconcile")?;
        if self.master.is_empty() {
            return Err(Error::PrerequisiteMissing("master records".into()));
        }
        if self.sales.is_empty() {
            return Err(Error::PrerequisiteMissing("sales records".into()));
        }

        let missing = find_missing(&self.master, &self.sales);
        if missing.is_empty() {
            self.gap_fill = None;
            self.step = Step::Mapping;
        } else {
            self.gap_fill = Some(GapFillSession::new(missing));
            self.step = Step::FixMissing;
        }
        tracing::debug!(step = %self.step, "reconcile finished");
        Ok(self.step)
    }

    pub fn gap_fill(&self) -> Result<&GapFillSession> {
        self.require(Step::FixMissing, "gap_fill")?;
        self.gap_fill.as_ref().ok_or(Error::InvalidStep {
            operation: "gap_fill",
            step: self.step,
        })
    }

    pub fn gap_fill_mut(&mut self) -> Result<&mut GapFillSession> {
        self.require(Step::FixMissing, "gap_fill")?;
        let step = self.step;
        self.gap_fill.as_mut().ok_or(Error::InvalidStep {
            operation: "gap_fill",
            step,
        })
    }

    /// 補完を破棄して Upload に戻る
    pub fn back_to_upload(&mut self) -> Result<()> {
        self.require(Step::FixMissing, "back_to_upload")?;
        self.gap_fill = None;
        self.step = Step::Upload;
        Ok(())
    }

    /// 補完結果をマスタ末尾に追加して Mapping に進む
    ///
    /// 追加したレコードは既存の同名レコードより後ろになるため、レポートではこちらが使われる。
    pub fn finalize_missing(&mut self) -> Result<usize> {
        self.require(Step::FixMissing, "finalize_missing")?;
        let records = self
            .gap_fill
            .take()
            .map(|g| g.finalize())
            .unwrap_or_default();
        let appended = records.len();
        self.master.extend(records);
        self.step = Step::Mapping;
        tracing::debug!(appended, master = self.master.len(), "finalized missing parties");
        Ok(appended)
    }

    /// レポート行を生成して Done に進む
    pub fn generate_report(&mut self) -> Result<Vec<ReportRow>> {
        self.require(Step::Mapping, "generate_report")?;
        let recognized = self
            .template
            .as_ref()
            .map(|t| t.is_recognized())
            .unwrap_or(false);
        if !recognized {
            return Err(Error::TemplateNotRecognized);
        }

        let rows = project(&self.sales, &self.master);
        self.step = Step::Done;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EditableField;

    fn party(name: &str, address: &str) -> PartyRecord {
        PartyRecord {
            name: name.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    fn template() -> TemplateColumnSet {
        TemplateColumnSet::new(vec!["Name".into(), "Latitude".into()])
    }

    fn loaded(master: Vec<PartyRecord>, sales: Vec<SalesRecord>) -> Session {
        let mut session = Session::new();
        session.set_master(master).unwrap();
        session.set_sales(sales).unwrap();
        session
    }

    #[test]
    fn test_reconcile_requires_both_collections() {
        let mut session = Session::new();
        session.set_sales(vec![SalesRecord::new("A", "")]).unwrap();
        assert!(matches!(
            session.reconcile(),
            Err(Error::PrerequisiteMissing(_))
        ));
        assert_eq!(session.step(), Step::Upload);

        let mut session = Session::new();
        session.set_master(vec![party("A", "")]).unwrap();
        assert!(matches!(
            session.reconcile(),
            Err(Error::PrerequisiteMissing(_))
        ));
        assert_eq!(session.step(), Step::Upload);
    }

    #[test]
    fn test_no_missing_skips_fix_step() {
        let mut session = loaded(vec![party("Acme", "x")], vec![SalesRecord::new("ACME", "")]);
        assert_eq!(session.reconcile().unwrap(), Step::Mapping);
        assert!(session.gap_fill().is_err());
    }

    #[test]
    fn test_full_workflow_with_gap_fill() {
        let mut session = loaded(
            vec![party("Acme Corp", "Main St")],
            vec![SalesRecord::new("acme corp", ""), SalesRecord::new("Beta LLC", "555")],
        );
        assert_eq!(session.reconcile().unwrap(), Step::FixMissing);
        assert_eq!(session.gap_fill().unwrap().len(), 1);

        session
            .gap_fill_mut()
            .unwrap()
            .update_field(0, EditableField::Address, "31.65 74.89")
            .unwrap();
        assert_eq!(session.finalize_missing().unwrap(), 1);
        assert_eq!(session.step(), Step::Mapping);
        assert_eq!(session.master().len(), 2);

        session.set_template(template()).unwrap();
        let rows = session.generate_report().unwrap();
        assert_eq!(session.step(), Step::Done);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, "Main St");
        assert_eq!(rows[1].latitude, "31.65");
        assert_eq!(rows[1].longitude, "74.89");
        assert_eq!(rows[1].phone, "555");
    }

    #[test]
    fn test_back_to_upload_discards_edits() {
        let mut session = loaded(vec![party("A", "")], vec![SalesRecord::new("B", "")]);
        session.reconcile().unwrap();
        session
            .gap_fill_mut()
            .unwrap()
            .update_field(0, EditableField::Address, "somewhere")
            .unwrap();
        session.back_to_upload().unwrap();

        assert_eq!(session.step(), Step::Upload);
        assert_eq!(session.master().len(), 1);
        assert_eq!(session.reconcile().unwrap(), Step::FixMissing);
        assert_eq!(session.gap_fill().unwrap().get(0).unwrap().address, "");
    }

    #[test]
    fn test_generate_report_requires_template() {
        let mut session = loaded(vec![party("A", "")], vec![SalesRecord::new("a", "")]);
        session.reconcile().unwrap();
        assert_eq!(session.generate_report(), Err(Error::TemplateNotRecognized));

        session.set_template(TemplateColumnSet::default()).unwrap();
        assert_eq!(session.generate_report(), Err(Error::TemplateNotRecognized));
        assert_eq!(session.step(), Step::Mapping);
    }

    #[test]
    fn test_done_is_terminal() {
        let mut session = loaded(vec![party("A", "")], vec![SalesRecord::new("a", "")]);
        session.set_template(template()).unwrap();
        session.reconcile().unwrap();
        session.generate_report().unwrap();

        assert!(matches!(session.reconcile(), Err(Error::InvalidStep { .. })));
        assert!(matches!(session.generate_report(), Err(Error::InvalidStep { .. })));
        assert!(matches!(session.set_template(template()), Err(Error::InvalidStep { .. })));
        assert!(matches!(session.set_master(vec![]), Err(Error::InvalidStep { .. })));
        assert!(matches!(session.finalize_missing(), Err(Error::InvalidStep { .. })));
    }

    #[test]
    fn test_uploads_locked_after_reconcile() {
        let mut session = loaded(vec![party("A", "")], vec![SalesRecord::new("B", "")]);
        session.reconcile().unwrap();
        assert_eq!(
            session.set_sales(vec![]),
            Err(Error::InvalidStep {
                operation: "set_sales",
                step: Step::FixMissing
            })
        );
    }

    #[test]
    fn test_gap_filled_record_overrides_master_duplicate() {
        // 売上側で重複した未登録名は両方マスタに追加され、後のものが使われる
        let mut session = loaded(
            vec![party("Acme", "")],
            vec![SalesRecord::new("Beta", ""), SalesRecord::new("beta", "")],
        );
        session.reconcile().unwrap();
        {
            let gap_fill = session.gap_fill_mut().unwrap();
            gap_fill.update_field(0, EditableField::Address, "First").unwrap();
            gap_fill.update_field(1, EditableField::Address, "Second").unwrap();
        }
        session.finalize_missing().unwrap();
        session.set_template(template()).unwrap();

        let rows = session.generate_report().unwrap();
        assert_eq!(rows[0].address, "Second");
        assert_eq!(rows[1].address, "Second");
    }

    #[test]
    fn test_step_position() {
        assert_eq!(Step::Upload.position(), (1, 4));
        assert_eq!(Step::Done.position(), (4, 4));
    }
}
