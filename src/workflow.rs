//! 照合ワークフロー
//!
//! Upload → (FixMissing) → Mapping → Done の順にセッションを進め、最後にレポートを書き出す。
//!
//! ## 変更履歴
//! - 2026-10-17: 初期作成

use crate::config::Config;
use crate::error::{Result, RouteReconError};
use crate::export;
use crate::import;
use crate::prompt::{EntryAction, Prompter, ReviewAction};
use route_recon_common::table::{COL_ADDRESS, COL_PARTY_NAME, COL_PHONE_NO};
use route_recon_common::{
    EditableField, GapFillSession, MissingParty, RawTable, Session, Step,
};
use std::path::{Path, PathBuf};

/// `run` コマンドのオプション
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub master: PathBuf,
    pub sales: PathBuf,
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    /// 補完データ（Party Name / Phone No. / Address）
    pub fill: Option<PathBuf>,
    pub interactive: bool,
    /// 住所未入力の確認を省略
    pub assume_yes: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// レポートを書き出した
    Written {
        path: PathBuf,
        rows: usize,
        appended: usize,
    },
    /// 補完中にアップロードへ戻った（レポートは作らない）
    BackToUpload,
}

/// 補完作業の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Proceed,
    BackToUpload,
}

fn print_step(step: Step, label: &str) {
    let (n, total) = step.position();
    println!("[{}/{}] {}", n, total, label);
}

/// 全工程を実行
pub fn run(options: &RunOptions, config: &Config, prompter: &mut dyn Prompter) -> Result<RunOutcome> {
    let mut session = Session::new();

    // 1. ファイル読み込み
    print_step(Step::Upload, "ファイルを読み込み中...");
    let master = import::read_table(&options.master)?.to_party_records();
    println!("✔ マスタ: {}件", master.len());
    let sales = import::read_table(&options.sales)?.to_sales_records();
    println!("✔ 売上: {}件", sales.len());
    let template = import::read_table(&options.template)?.template_columns();
    if !template.is_recognized() {
        return Err(route_recon_common::Error::TemplateNotRecognized.into());
    }
    println!("✔ テンプレート: {}列を認識", template.len());
    if options.verbose {
        println!("  列: {}", template.columns.join(", "));
    }
    println!();

    session.set_master(master)?;
    session.set_sales(sales)?;
    session.set_template(template)?;

    let mut appended = 0;
    if session.reconcile()? == Step::FixMissing {
        // 2. 未登録取引先の補完
        let total = session.gap_fill()?.len();
        print_step(Step::FixMissing, &format!("マスタ未登録の取引先: {}件", total));

        if let Some(fill_path) = &options.fill {
            let fill_table = import::read_table(fill_path)?;
            let updated = apply_fill_table(session.gap_fill_mut()?, &fill_table)?;
            println!("✔ 補完データから{}件を入力", updated);
        }

        let outcome = if options.interactive {
            fill_interactively(session.gap_fill_mut()?, prompter, options.assume_yes)?
        } else {
            check_incomplete(session.gap_fill()?, options.assume_yes)?;
            FillOutcome::Proceed
        };

        if outcome == FillOutcome::BackToUpload {
            session.back_to_upload()?;
            println!("アップロードに戻ります。レポートは作成しません");
            return Ok(RunOutcome::BackToUpload);
        }

        appended = session.finalize_missing()?;
        println!("✔ マスタに{}件を追加\n", appended);
    } else {
        println!("✔ すべての取引先がマスタに登録されています\n");
    }

    // 3. レポート生成
    print_step(Step::Mapping, "レポートを生成中...");
    let rows = session.generate_report()?;
    let path = export::export_report(&rows, config, options.output.as_deref())?;
    tracing::info!(rows = rows.len(), appended, "run finished");

    Ok(RunOutcome::Written {
        path,
        rows: rows.len(),
        appended,
    })
}

/// 照合のみ実行して未登録取引先を返す
pub fn check(master_path: &Path, sales_path: &Path) -> Result<Vec<MissingParty>> {
    let mut session = Session::new();
    session.set_master(import::read_table(master_path)?.to_party_records())?;
    session.set_sales(import::read_table(sales_path)?.to_sales_records())?;
    match session.reconcile()? {
        Step::FixMissing => Ok(session.gap_fill()?.entries().to_vec()),
        _ => Ok(Vec::new()),
    }
}

/// 補完データの表を正規化名で突き合わせて入力する
///
/// 空セルは上書きしない。入力したエントリ数を返す。
pub fn apply_fill_table(gap_fill: &mut GapFillSession, table: &RawTable) -> Result<usize> {
    let mut updated = std::collections::BTreeSet::new();

    for row in 0..table.len() {
        let name = table.value(row, COL_PARTY_NAME);
        let address = table.value(row, COL_ADDRESS).trim();
        let phone = table.value(row, COL_PHONE_NO).trim();

        for index in gap_fill.indices_for_name(name) {
            if !address.is_empty() {
                gap_fill.update_field(index, EditableField::Address, address)?;
                updated.insert(index);
            }
            if !phone.is_empty() {
                gap_fill.update_field(index, EditableField::Phone, phone)?;
                updated.insert(index);
            }
        }
    }

    Ok(updated.len())
}

fn edit_entry(
    gap_fill: &mut GapFillSession,
    prompter: &mut dyn Prompter,
    index: usize,
    position: usize,
    total: usize,
) -> Result<EntryAction> {
    let party = match gap_fill.get(index) {
        Some(p) => p.clone(),
        None => return Ok(EntryAction::Skip),
    };

    let action = prompter.entry_address(&party, position, total)?;
    if let EntryAction::Address(address) = &action {
        gap_fill.update_field(index, EditableField::Address, address)?;
        let phone = prompter.entry_phone(&party)?;
        if phone != party.phone {
            gap_fill.update_field(index, EditableField::Phone, &phone)?;
        }
    }
    Ok(action)
}

/// 対話式で補完する
///
/// 住所が空のエントリを順に入力し、確認画面で続行・編集・戻るを選ぶ。
pub fn fill_interactively(
    gap_fill: &mut GapFillSession,
    prompter: &mut dyn Prompter,
    assume_yes: bool,
) -> Result<FillOutcome> {
    let pending = gap_fill.incomplete();
    println!("---");
    println!("住所を入力してください。[Enter/s]スキップ [q]確認画面へ");
    println!("---\n");

    for (count, &index) in pending.iter().enumerate() {
        if edit_entry(gap_fill, prompter, index, count + 1, pending.len())? == EntryAction::Stop {
            break;
        }
    }

    loop {
        match prompter.review(gap_fill)? {
            ReviewAction::Edit(index) => {
                if index >= gap_fill.len() {
                    println!("⚠ 番号が範囲外です");
                    continue;
                }
                let total = gap_fill.len();
                edit_entry(gap_fill, prompter, index, index + 1, total)?;
            }
            ReviewAction::BackToUpload => return Ok(FillOutcome::BackToUpload),
            ReviewAction::Proceed => {
                let incomplete = gap_fill.incomplete().len();
                if incomplete == 0 || assume_yes {
                    if incomplete > 0 {
                        tracing::warn!(incomplete, "proceeding with empty addresses");
                    }
                    return Ok(FillOutcome::Proceed);
                }
                if prompter.confirm_incomplete(incomplete)? {
                    tracing::warn!(incomplete, "proceeding with empty addresses");
                    return Ok(FillOutcome::Proceed);
                }
            }
        }
    }
}

/// 非対話モードでの住所未入力チェック
fn check_incomplete(gap_fill: &GapFillSession, assume_yes: bool) -> Result<()> {
    let incomplete = gap_fill.incomplete().len();
    if incomplete == 0 {
        return Ok(());
    }
    if assume_yes {
        println!("⚠ 住所が空の取引先が{}件あります（続行）", incomplete);
        tracing::warn!(incomplete, "proceeding with empty addresses");
        Ok(())
    } else {
        Err(RouteReconError::IncompleteAddresses(incomplete))
    }
}
