use clap::Parser;
use repair_cost_common::{Catalog, Estimate, Selection};
use repair_cost_rust::{cli, config, error, export, session};

use cli::{Cli, Commands};
use config::Config;
use error::{RepairCostError, Result};
use session::format_yen;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Estimate { catalog, select, format, output, title } => {
            println!("📋 repair-cost - 修繕費概算見積もり\n");

            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = load_catalog(catalog_path.as_deref(), cli.verbose)?;

            let selection = if select.is_empty() {
                session::run_interactive_session(&catalog)?
            } else {
                build_selection(&select, &catalog)?
            };

            if selection.is_empty() {
                println!("項目が選択されていません");
                return Ok(());
            }

            let estimate = repair_cost_common::breakdown(&selection, &catalog)?;
            print_estimate(&estimate);

            if let Some(format) = format {
                let title = title.unwrap_or_else(|| config.quote_title.clone());
                let date = chrono::Local::now().format("%Y-%m-%d").to_string();
                let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

                export::export_estimate(&estimate, &format, &output_dir, &title, &date)?;
                println!("\n✅ 出力完了");
            }
        }

        Commands::Catalog { catalog, category } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = load_catalog(catalog_path.as_deref(), cli.verbose)?;

            if let Some(ref category) = category {
                if !catalog.categories().contains(&category.as_str()) {
                    println!("⚠ カテゴリがありません: {}", category);
                    println!("  利用可能: {}", catalog.categories().join(", "));
                    return Ok(());
                }
            }

            println!("📋 修繕項目カタログ（{}件）\n", catalog.len());
            print_catalog_listing(&catalog, category.as_deref());
        }

        Commands::Config { set_catalog, set_title, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                if !path.exists() {
                    return Err(RepairCostError::FileNotFound(path.display().to_string()));
                }
                // 保存前に読み込めることを確認する
                Catalog::from_json(&path)?;
                config.set_catalog_path(path)?;
                println!("✔ 既定カタログを設定しました");
            }

            if let Some(title) = set_title {
                config.set_quote_title(title)?;
                println!("✔ 見積書タイトルを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込みカタログ".to_string())
                );
                println!("  見積書タイトル: {}", config.quote_title);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// カタログを読み込む（パス未指定なら組み込みカタログ）
fn load_catalog(path: Option<&Path>, verbose: bool) -> Result<Catalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(RepairCostError::FileNotFound(path.display().to_string()));
            }
            if verbose {
                println!("- カタログ: {}", path.display());
            }
            Ok(Catalog::from_json(path)?)
        }
        None => {
            if verbose {
                println!("- カタログ: 組み込み");
            }
            Ok(Catalog::builtin())
        }
    }
}

/// `--select` 指定から選択状態を組み立てる
fn build_selection(specs: &[String], catalog: &Catalog) -> Result<Selection> {
    let mut selection = Selection::new();

    for spec in specs {
        let (id, quantity) =
            cli::parse_select_spec(spec).map_err(RepairCostError::InvalidSelection)?;

        if catalog.get(&id).is_none() {
            return Err(RepairCostError::InvalidSelection(format!(
                "カタログにない項目IDです: {}",
                id
            )));
        }
        if selection.is_selected(&id) {
            return Err(RepairCostError::InvalidSelection(format!(
                "項目IDが重複しています: {}",
                id
            )));
        }

        selection.toggle(&id);
        selection.set_quantity(&id, quantity);
    }

    Ok(selection)
}

/// 見積もり明細を表示
fn print_estimate(estimate: &Estimate) {
    println!("\n📄 見積もり明細\n");

    for line in &estimate.lines {
        println!(
            "  {}  ¥{} × {}{} = ¥{}",
            line.label,
            format_yen(line.unit_price),
            line.quantity,
            line.unit,
            format_yen(line.subtotal)
        );
    }

    println!("  {}", "-".repeat(40));
    println!("  合計: ¥{}", format_yen(estimate.total));
}

/// カタログ一覧を表示
fn print_catalog_listing(catalog: &Catalog, category_filter: Option<&str>) {
    for category in catalog.categories() {
        if let Some(filter) = category_filter {
            if category != filter {
                continue;
            }
        }

        println!("■ {}", category);
        for item in catalog.items_in_category(category) {
            let price = repair_cost_common::estimated_unit_price(item, catalog.rates());
            print!(
                "  {:<18} {}  定価 ¥{} → 概算 ¥{}/{}",
                item.id,
                item.label,
                format_yen(item.base_price),
                format_yen(price),
                item.unit
            );
            if let Some(ref note) = item.note {
                print!(" ({})", note);
            }
            println!();
        }
        println!();
    }
}
