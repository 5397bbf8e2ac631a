//! 見積もり計算の仕様テスト
//!
//! 概算単価の丸め規則と合計計算の性質を検証

use repair_cost_common::{breakdown, estimated_unit_price, total, Catalog, RateType, Selection};

/// 概算単価は定価×掛率を100円単位に切り捨てた値
#[test]
fn test_unit_price_formula_for_all_items() {
    let catalog = Catalog::builtin();

    for item in catalog.items() {
        let percent = match item.rate_type {
            RateType::Equipment => 55,
            RateType::Construction => 85,
        };
        let expected = item.base_price * percent / 100 / 100 * 100;

        let price = estimated_unit_price(item, catalog.rates());
        assert_eq!(price, expected, "単価が不一致: {}", item.id);
        assert_eq!(price % 100, 0, "100円単位でない: {}", item.id);
    }
}

/// 設備系の例: 1,072,000 × 0.55 = 589,600（すでに100円単位）
#[test]
fn test_equipment_price_already_round() {
    let catalog = Catalog::builtin();
    let item = catalog.get("unit_bath").unwrap();
    assert_eq!(estimated_unit_price(item, catalog.rates()), 589_600);
}

/// 建築系の例: 1,400 × 0.85 = 1,190 → 1,100に切り捨て
#[test]
fn test_construction_price_floors_down() {
    let catalog = Catalog::builtin();
    let item = catalog.get("wallpaper").unwrap();
    assert_eq!(estimated_unit_price(item, catalog.rates()), 1_100);
}

/// トグル2回で元の未選択状態に戻る
#[test]
fn test_toggle_is_own_inverse() {
    let mut selection = Selection::new();

    selection.toggle("water_heater");
    assert!(selection.is_selected("water_heater"));

    selection.toggle("water_heater");
    assert!(!selection.is_selected("water_heater"));
    assert!(selection.is_empty());
}

/// 空の選択の合計は0円
#[test]
fn test_empty_selection_totals_zero() {
    let catalog = Catalog::builtin();
    assert!(!catalog.is_empty());
    assert_eq!(total(&Selection::new(), &catalog).unwrap(), 0);
}

/// 合計は走査順に依存しない
#[test]
fn test_total_is_order_independent() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new();
    selection.toggle("water_heater");
    selection.toggle("wallpaper");
    selection.toggle("tatami");
    selection.set_quantity("wallpaper", 30);
    selection.set_quantity("tatami", 6);

    let expected = total(&selection, &catalog).unwrap();

    // 同じ(ID, 数量)の組を逆順・ソート順で足しても同じ合計になる
    let pairs: Vec<(&str, u64)> = selection.iter().collect();
    let mut reversed = pairs.clone();
    reversed.reverse();
    let mut sorted_by_quantity = pairs.clone();
    sorted_by_quantity.sort_by_key(|&(_, q)| q);

    for order in [pairs, reversed, sorted_by_quantity] {
        let sum: u64 = order
            .iter()
            .map(|(id, q)| {
                let item = catalog.get(id).unwrap();
                estimated_unit_price(item, catalog.rates()) * q
            })
            .sum();
        assert_eq!(sum, expected);
    }
}

/// 数量0の設定は拒否され、直前の値が残る
#[test]
fn test_set_quantity_zero_is_rejected() {
    let mut selection = Selection::new();
    selection.toggle("wallpaper");
    selection.set_quantity("wallpaper", 30);

    selection.set_quantity("wallpaper", 0);
    assert_eq!(selection.quantity("wallpaper"), Some(30));
}

/// エンドツーエンド: 給湯器2台＋クロス30m²で合計514,800円
#[test]
fn test_end_to_end_scenario() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new();

    selection.toggle("water_heater");
    selection.set_quantity("water_heater", 2);
    selection.toggle("wallpaper");
    selection.set_quantity("wallpaper", 30);

    let estimate = breakdown(&selection, &catalog).unwrap();

    let water_heater = estimate.lines.iter().find(|l| l.id == "water_heater").unwrap();
    assert_eq!(water_heater.unit_price, 240_900);
    assert_eq!(water_heater.subtotal, 481_800);

    let wallpaper = estimate.lines.iter().find(|l| l.id == "wallpaper").unwrap();
    assert_eq!(wallpaper.unit_price, 1_100);
    assert_eq!(wallpaper.subtotal, 33_000);

    assert_eq!(estimate.total, 514_800);
}

/// 選択解除で合計と明細から項目が消える
#[test]
fn test_deselect_removes_from_breakdown() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new();

    selection.toggle("water_heater");
    selection.set_quantity("water_heater", 2);
    selection.toggle("wallpaper");
    selection.set_quantity("wallpaper", 30);

    selection.toggle("water_heater");

    let estimate = breakdown(&selection, &catalog).unwrap();
    assert_eq!(estimate.total, 33_000);
    assert!(estimate.lines.iter().all(|l| l.id != "water_heater"));
    assert_eq!(estimate.lines.len(), 1);
}

/// セッションごとに独立した選択状態を持つ
#[test]
fn test_sessions_do_not_share_state() {
    let catalog = Catalog::builtin();

    let mut session_a = Selection::new();
    let mut session_b = Selection::new();

    session_a.toggle("unit_bath");
    session_b.toggle("cleaning");

    assert_eq!(total(&session_a, &catalog).unwrap(), 589_600);
    // 掃除: 45,000 × 85% = 38,250 → 38,200
    assert_eq!(total(&session_b, &catalog).unwrap(), 38_200);
}
