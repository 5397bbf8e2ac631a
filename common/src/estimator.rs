//! 見積もり計算モジュール
//!
//! 定価に掛率を適用し、100円単位に切り捨てた概算単価を求める。
//! 端数を切り捨てるのは「実勢に近い丸い見積額」を出すための業務ルールで、
//! すでに100円単位の金額はそのまま変わらない。

use crate::catalog::{Catalog, RepairItem};
use crate::error::{Error, Result};
use crate::rates::RateTable;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// 概算単価（円）
///
/// `floor(定価 × 掛率% / 100 / 100) × 100` を整数演算のみで計算する。
pub fn estimated_unit_price(item: &RepairItem, rates: &RateTable) -> u64 {
    let discounted = item.base_price * rates.discount_percent(item.rate_type) / 100;
    discounted / 100 * 100
}

/// 1項目の小計（概算単価 × 数量）
///
/// 数量の妥当性チェックは `Selection` 側の責務。本関数は純粋な掛け算。
pub fn line_subtotal(item: &RepairItem, quantity: u64, rates: &RateTable) -> u64 {
    estimated_unit_price(item, rates) * quantity
}

/// 選択項目の合計金額（円）
///
/// カタログに存在しないIDが選択に含まれる場合は黙ってスキップせず
/// `UnknownItem` エラーを返す。空の選択は0円。
pub fn total(selection: &Selection, catalog: &Catalog) -> Result<u64> {
    let mut sum = 0u64;
    for (id, quantity) in selection.iter() {
        let item = catalog
            .get(id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))?;
        sum += line_subtotal(item, quantity, catalog.rates());
    }
    Ok(sum)
}

/// 見積もりの明細1行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLine {
    pub id: String,
    pub category: String,
    pub label: String,
    /// 数量の単位（表示用）
    pub unit: String,
    pub quantity: u64,
    /// 概算単価（円）
    pub unit_price: u64,
    /// 小計（円）
    pub subtotal: u64,
    #[serde(default)]
    pub note: Option<String>,
}

/// 明細付き見積もり
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub lines: Vec<EstimateLine>,
    /// 合計金額（円）
    pub total: u64,
}

/// 選択内容から明細付き見積もりを組み立てる
///
/// 明細はカタログ定義順に並べる（出力を決定的にするため）。
pub fn breakdown(selection: &Selection, catalog: &Catalog) -> Result<Estimate> {
    let mut lines = Vec::new();

    for item in catalog.items() {
        if let Some(quantity) = selection.quantity(&item.id) {
            let unit_price = estimated_unit_price(item, catalog.rates());
            lines.push(EstimateLine {
                id: item.id.clone(),
                category: item.category.clone(),
                label: item.label.clone(),
                unit: item.unit.clone(),
                quantity,
                unit_price,
                subtotal: unit_price * quantity,
                note: item.note.clone(),
            });
        }
    }

    // カタログ順の走査では拾えない未知IDを検出する
    if lines.len() != selection.len() {
        for (id, _) in selection.iter() {
            if catalog.get(id).is_none() {
                return Err(Error::UnknownItem(id.to_string()));
            }
        }
    }

    let total = lines.iter().map(|line| line.subtotal).sum();

    Ok(Estimate { lines, total })
}
