use anyhow::Context;
use clap::Parser;
use route_recon::{cli, config, logging, prompt, workflow};
use cli::{Cli, Commands};
use config::Config;
use workflow::{RunOptions, RunOutcome};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Run { master, sales, template, output, fill, no_interactive, yes } => {
            println!("📦 route-recon - ルートレポート生成\n");

            let options = RunOptions {
                master,
                sales,
                template,
                output,
                fill,
                interactive: !no_interactive,
                assume_yes: yes,
                verbose: cli.verbose,
            };

            let mut prompter = prompt::TerminalPrompter;
            match workflow::run(&options, &config, &mut prompter)? {
                RunOutcome::Written { path, rows, appended } => {
                    println!("\n✅ 完了: {}行 (マスタ追加 {}件) → {}", rows, appended, path.display());
                }
                RunOutcome::BackToUpload => {
                    println!("\n中断しました。ファイルを修正して再実行してください");
                }
            }
        }

        Commands::Check { master, sales } => {
            println!("🔍 route-recon - 照合\n");

            let missing = workflow::check(&master, &sales)?;
            if missing.is_empty() {
                println!("✓ すべての取引先がマスタに登録されています");
            } else {
                println!("マスタ未登録の取引先: {}件", missing.len());
                for (i, party) in missing.iter().enumerate() {
                    println!("  {:>3}) {} {}", i + 1, party.name, party.phone);
                }
            }
        }

        Commands::Config { set_output_dir, set_report_name, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力ディレクトリを設定しました");
            }

            if let Some(name) = set_report_name {
                config.set_report_name(name)?;
                println!("✔ レポート名を設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  出力ディレクトリ: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "(カレント)".into())
                );
                println!("  レポート名: {}.xlsx", config.report_name);
                println!("  シート名: {}", config.sheet_name);
            }
        }
    }

    Ok(())
}
