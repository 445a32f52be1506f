//! 対話式の補完入力
//!
//! 入力手段は `Prompter` トレイトで差し替えられる（端末では dialoguer、テストでは台本）。

use crate::error::{Result, RouteReconError};
use dialoguer::{Confirm, Input, Select};
use route_recon_common::{GapFillSession, MissingParty};

/// 住所入力の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// 住所を入力
    Address(String),
    /// このエントリをスキップ
    Skip,
    /// 入力を打ち切って確認画面へ
    Stop,
}

/// 確認画面での操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// マスタを更新して次へ
    Proceed,
    /// 指定エントリ（0始まり）を編集
    Edit(usize),
    /// 補完を破棄してアップロードに戻る
    BackToUpload,
}

pub trait Prompter {
    fn entry_address(&mut self, party: &MissingParty, position: usize, total: usize) -> Result<EntryAction>;
    /// 電話番号（空入力なら現在値のまま、`-` で消去）
    fn entry_phone(&mut self, party: &MissingParty) -> Result<String>;
    fn review(&mut self, gap_fill: &GapFillSession) -> Result<ReviewAction>;
    /// 住所未入力のまま続行してよいか
    fn confirm_incomplete(&mut self, count: usize) -> Result<bool>;
}

/// 住所プロンプトへの入力を解釈
pub fn parse_entry_input(input: &str) -> EntryAction {
    let trimmed = input.trim();
    match trimmed {
        "" | "s" => EntryAction::Skip,
        "q" | "Q" => EntryAction::Stop,
        _ => EntryAction::Address(trimmed.to_string()),
    }
}

/// 電話番号プロンプトへの入力を解釈
///
/// 空入力は現在値を残し、`-` は電話番号を消す。
pub fn parse_phone_input(input: &str, current: &str) -> String {
    match input.trim() {
        "" => current.to_string(),
        "-" => String::new(),
        trimmed => trimmed.to_string(),
    }
}

fn prompt_err(e: dialoguer::Error) -> RouteReconError {
    RouteReconError::Prompt(e.to_string())
}

/// 端末用（dialoguer）
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn entry_address(&mut self, party: &MissingParty, position: usize, total: usize) -> Result<EntryAction> {
        println!(
            "[{}/{}] {}{}",
            position,
            total,
            party.name,
            if party.phone.is_empty() {
                String::new()
            } else {
                format!(" ({})", party.phone)
            }
        );

        let input: String = Input::new()
            .with_prompt("住所 (GPSも可: 31.65 74.89 / s:スキップ q:終了)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        Ok(parse_entry_input(&input))
    }

    fn entry_phone(&mut self, party: &MissingParty) -> Result<String> {
        let input: String = Input::new()
            .with_prompt("電話番号 (-:消去)")
            .with_initial_text(party.phone.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        Ok(parse_phone_input(&input, &party.phone))
    }

    fn review(&mut self, gap_fill: &GapFillSession) -> Result<ReviewAction> {
        println!("\n未登録の取引先 ({}件):", gap_fill.len());
        for (i, party) in gap_fill.entries().iter().enumerate() {
            let address = if party.is_incomplete() { "(未入力)" } else { party.address.as_str() };
            println!("  {:>3}) {} | {} | {}", i + 1, party.name, party.phone, address);
        }
        println!();

        let items = ["マスタを更新して次へ", "エントリを編集", "アップロードに戻る"];
        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        match choice {
            1 => {
                let len = gap_fill.len();
                let number: usize = Input::new()
                    .with_prompt(format!("番号 [1-{}]", len))
                    .validate_with(move |n: &usize| -> std::result::Result<(), String> {
                        if *n >= 1 && *n <= len {
                            Ok(())
                        } else {
                            Err(format!("1から{}の番号を入力してください", len))
                        }
                    })
                    .interact_text()
                    .map_err(prompt_err)?;
                Ok(ReviewAction::Edit(number - 1))
            }
            2 => Ok(ReviewAction::BackToUpload),
            _ => Ok(ReviewAction::Proceed),
        }
    }

    fn confirm_incomplete(&mut self, count: usize) -> Result<bool> {
        Confirm::new()
            .with_prompt(format!("住所が空の取引先が{}件あります。このまま続行しますか?", count))
            .default(false)
            .interact()
            .map_err(prompt_err)
    }
}
