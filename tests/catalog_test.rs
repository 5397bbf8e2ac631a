//! カタログ読み込みテスト
//!
//! JSONファイルからの読み込みと不変条件の検証

use repair_cost_common::{Catalog, Error};
use tempfile::tempdir;

const VALID_CATALOG: &str = r#"{
    "rates": { "EQUIPMENT": 60 },
    "items": [
        { "id": "water_heater", "category": "bath", "label": "給湯器交換（16号・追焚付）",
          "basePrice": 438000, "rateType": "EQUIPMENT", "unit": "台" },
        { "id": "wallpaper", "category": "interior", "label": "クロス張替え（量産品）",
          "basePrice": 1400, "rateType": "CONSTRUCTION", "unit": "m²" }
    ]
}"#;

/// 正常なカタログファイルを読み込める
#[test]
fn test_load_catalog_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, VALID_CATALOG).unwrap();

    let catalog = Catalog::from_json(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    // 上書きした掛率が反映される
    assert_eq!(catalog.rates().equipment, 60);
    // 上書きしなかった掛率は既定値のまま
    assert_eq!(catalog.rates().construction, 85);
}

/// 存在しないファイルはIOエラー
#[test]
fn test_load_nonexistent_file() {
    let result = Catalog::from_json(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(matches!(result.unwrap_err(), Error::Io(_)));
}

/// 壊れたJSONはJSONエラー
#[test]
fn test_load_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ items: ").unwrap();

    let result = Catalog::from_json(&path);
    assert!(matches!(result.unwrap_err(), Error::Json(_)));
}

/// IDの重複は設定エラー
#[test]
fn test_duplicate_id_is_config_error() {
    let json = r#"{
        "items": [
            { "id": "tatami", "category": "interior", "label": "畳 表替え",
              "basePrice": 6000, "rateType": "CONSTRUCTION", "unit": "枚" },
            { "id": "tatami", "category": "interior", "label": "畳 新調",
              "basePrice": 12000, "rateType": "CONSTRUCTION", "unit": "枚" }
        ]
    }"#;

    let err = Catalog::from_json_str(json).unwrap_err();
    match err {
        Error::Config(message) => assert!(message.contains("tatami")),
        other => panic!("Configエラーではない: {:?}", other),
    }
}

/// 定価0円は設定エラー
#[test]
fn test_zero_base_price_is_config_error() {
    let json = r#"{
        "items": [
            { "id": "free_item", "category": "interior", "label": "無料項目",
              "basePrice": 0, "rateType": "CONSTRUCTION", "unit": "式" }
        ]
    }"#;

    let err = Catalog::from_json_str(json).unwrap_err();
    match err {
        Error::Config(message) => assert!(message.contains("free_item")),
        other => panic!("Configエラーではない: {:?}", other),
    }
}

/// 掛率の範囲外上書きは設定エラー
#[test]
fn test_out_of_range_rate_is_config_error() {
    let json = r#"{
        "rates": { "CONSTRUCTION": 120 },
        "items": [
            { "id": "tatami", "category": "interior", "label": "畳 表替え",
              "basePrice": 6000, "rateType": "CONSTRUCTION", "unit": "枚" }
        ]
    }"#;

    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

/// 未知の掛率区分は読み込み時点で失敗する（項目単位で黙殺しない）
#[test]
fn test_unknown_rate_type_fails_at_load() {
    let json = r#"{
        "items": [
            { "id": "mystery", "category": "interior", "label": "謎作業",
              "basePrice": 10000, "rateType": "LABOR", "unit": "式" }
        ]
    }"#;

    assert!(Catalog::from_json_str(json).is_err());
}

/// 組み込みカタログは常に不変条件を満たす
#[test]
fn test_builtin_catalog_invariants() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.len(), 11);
    for item in catalog.items() {
        assert!(item.base_price > 0, "定価が0以下: {}", item.id);
        assert!(!item.unit.is_empty(), "単位が空: {}", item.id);
    }
    assert!(catalog.rates().validate().is_ok());
}
