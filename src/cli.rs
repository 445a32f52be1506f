use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "route-recon")]
#[command(about = "マスタ・売上データ照合／ルートレポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 照合・補完・レポート生成を一括実行
    Run {
        /// マスタファイル（Party Name, Number, Address）
        #[arg(short, long)]
        master: PathBuf,

        /// 売上ファイル（Party Name, Phone No.）
        #[arg(short, long)]
        sales: PathBuf,

        /// レポートテンプレート
        #[arg(short, long)]
        template: PathBuf,

        /// 出力ディレクトリ（省略時は設定値またはカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 補完データ（Party Name, Phone No., Address）
        #[arg(short, long)]
        fill: Option<PathBuf>,

        /// 対話入力を行わない
        #[arg(long)]
        no_interactive: bool,

        /// 住所未入力の確認を省略して続行
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// 照合のみ実行し、マスタ未登録の取引先を表示
    Check {
        /// マスタファイル
        #[arg(short, long)]
        master: PathBuf,

        /// 売上ファイル
        #[arg(short, long)]
        sales: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// レポートファイル名を設定（拡張子なし）
        #[arg(long)]
        set_report_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
