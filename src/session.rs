//! 対話式見積もりセッションモジュール
//!
//! カタログを番号付きで表示し、選択・数量設定を受け付けて
//! 1セッション分の `Selection` を組み立てる。

use crate::error::{RepairCostError, Result};
use dialoguer::Input;
use repair_cost_common::{estimated_unit_price, total, Catalog, Selection};

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
enum EstimateAction {
    /// 項目をトグル（0始まりのカタログインデックス）
    Toggle(usize),
    /// 数量を設定
    SetQuantity(usize, u64),
    /// 一覧を再表示
    List,
    /// 確定して終了
    Finish,
}

/// 対話式で見積もり項目を選択
pub fn run_interactive_session(catalog: &Catalog) -> Result<Selection> {
    let mut selection = Selection::new();

    println!("📋 修繕項目を選択してください");
    println!("---");
    println!("操作: [番号]選択/解除 [番号=数量]数量設定 [l]一覧 [Enter/q]確定");
    println!("---\n");

    print_catalog(catalog, &selection);

    loop {
        let action = prompt_estimate_action(catalog.len())?;

        match action {
            EstimateAction::Toggle(index) => {
                let item = &catalog.items()[index];
                if selection.toggle(&item.id) {
                    println!("  → {} を選択（数量1）", item.label);
                } else {
                    println!("  → {} を解除", item.label);
                }
            }
            EstimateAction::SetQuantity(index, quantity) => {
                let item = &catalog.items()[index];
                if selection.is_selected(&item.id) {
                    selection.set_quantity(&item.id, quantity);
                    println!("  → {} の数量を {}{} に変更", item.label, quantity, item.unit);
                } else {
                    println!("  ⚠ 未選択の項目です。先に番号で選択してください");
                }
            }
            EstimateAction::List => {
                print_catalog(catalog, &selection);
                continue;
            }
            EstimateAction::Finish => break,
        }

        let current = total(&selection, catalog)?;
        println!("  現在の合計: ¥{}\n", format_yen(current));
    }

    Ok(selection)
}

/// カタログをカテゴリごとに番号付きで表示
fn print_catalog(catalog: &Catalog, selection: &Selection) {
    for category in catalog.categories() {
        println!("■ {}", category);

        for (index, item) in catalog.items().iter().enumerate() {
            if item.category != category {
                continue;
            }

            let mark = if selection.is_selected(&item.id) { "x" } else { " " };
            let quantity = selection
                .quantity(&item.id)
                .map(|q| format!(" ×{}{}", q, item.unit))
                .unwrap_or_default();
            let price = estimated_unit_price(item, catalog.rates());

            print!(
                "  [{}] {:>2}) {}  ¥{}/{}{}",
                mark,
                index + 1,
                item.label,
                format_yen(price),
                item.unit,
                quantity
            );
            if let Some(ref note) = item.note {
                print!(" ({})", note);
            }
            println!();
        }
    }
    println!();
}

/// 入力1行をアクションに解釈する
///
/// 解釈できない入力は `None`（呼び出し側で警告して再入力）。
fn parse_action(input: &str, item_count: usize) -> Option<EstimateAction> {
    let trimmed = input.trim();

    match trimmed {
        "" | "q" | "Q" => return Some(EstimateAction::Finish),
        "l" | "L" => return Some(EstimateAction::List),
        _ => {}
    }

    if let Some((number, quantity)) = trimmed.split_once('=') {
        let number: usize = number.trim().parse().ok()?;
        let quantity: u64 = quantity.trim().parse().ok()?;
        if number < 1 || number > item_count || quantity < 1 {
            return None;
        }
        return Some(EstimateAction::SetQuantity(number - 1, quantity));
    }

    let number: usize = trimmed.parse().ok()?;
    if number < 1 || number > item_count {
        return None;
    }
    Some(EstimateAction::Toggle(number - 1))
}

/// アクション入力プロンプト
fn prompt_estimate_action(item_count: usize) -> Result<EstimateAction> {
    loop {
        let input: String = Input::new()
            .with_prompt("番号 (番号=数量 l:一覧 q:確定)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RepairCostError::CliExecution(e.to_string()))?;

        match parse_action(&input, item_count) {
            Some(action) => return Ok(action),
            None => println!("  ⚠ 無効な入力です（1〜{}の番号、数量は1以上）", item_count),
        }
    }
}

/// 金額を3桁区切りで表示用に整形
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
