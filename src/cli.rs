use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repair-cost")]
#[command(about = "賃貸修繕費の概算見積もりツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 項目を選んで概算見積もりを作成
    Estimate {
        /// カタログJSONファイル（省略時は設定または組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 非対話で項目を指定（`id` または `id=数量`、複数指定可）
        #[arg(short, long)]
        select: Vec<String>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 見積書タイトル（省略時は設定の既定値）
        #[arg(short, long)]
        title: Option<String>,
    },

    /// カタログ項目の一覧を表示
    Catalog {
        /// カタログJSONファイル（省略時は設定または組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// カテゴリで絞り込み
        #[arg(long)]
        category: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定カタログJSONファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 見積書タイトルの既定値を設定
        #[arg(long)]
        set_title: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

/// `--select` の1指定をパースする
///
/// `id` は数量1、`id=数量` は指定数量。数量は1以上の整数のみ受け付ける。
pub fn parse_select_spec(spec: &str) -> Result<(String, u64), String> {
    let (id, quantity) = match spec.split_once('=') {
        Some((id, qty)) => {
            let quantity: u64 = qty
                .trim()
                .parse()
                .map_err(|_| format!("数量が整数ではありません: {}", spec))?;
            (id.trim(), quantity)
        }
        None => (spec.trim(), 1),
    };

    if id.is_empty() {
        return Err(format!("項目IDが空です: {}", spec));
    }
    if quantity < 1 {
        return Err(format!("数量は1以上で指定してください: {}", spec));
    }

    Ok((id.to_string(), quantity))
}
