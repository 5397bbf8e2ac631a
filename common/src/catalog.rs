//! 修繕項目カタログモジュール
//!
//! 見積もり対象となる修繕項目のマスタデータを管理する。
//! 組み込みカタログのほか、JSONファイルからの読み込みに対応する。

use crate::error::{Error, Result};
use crate::rates::{RateOverrides, RateTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 掛率区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// 設備系（ユニットバス・給湯器など）
    Equipment,
    /// 建築・労務系（クロス・塗装など）
    Construction,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Equipment => "EQUIPMENT",
            RateType::Construction => "CONSTRUCTION",
        }
    }
}

/// 修繕項目1件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairItem {
    /// 項目ID（カタログ内で一意）
    pub id: String,
    /// 表示グルーピング用のカテゴリ（bath, interior など）
    pub category: String,
    /// 項目名
    pub label: String,
    /// 定価（円、正の整数）
    pub base_price: u64,
    /// 掛率区分
    pub rate_type: RateType,
    /// 数量の単位（m²、台、式、枚）。表示専用で計算には使わない
    pub unit: String,
    /// 補足
    #[serde(default)]
    pub note: Option<String>,
}

/// カタログJSONのファイル形式
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    /// 掛率の上書き（省略時は既定値）
    #[serde(default)]
    rates: RateOverrides,
    items: Vec<RepairItem>,
}

/// 修繕項目カタログ全体
///
/// 読み込み時に不変条件（定価 > 0、ID一意、掛率1〜100%）を検証する。
/// 検証を通ったカタログに対する単価計算は失敗しない。
#[derive(Debug, Clone)]
pub struct Catalog {
    rates: RateTable,
    items: Vec<RepairItem>,
    /// ID → itemsインデックス
    index: HashMap<String, usize>,
}

impl Catalog {
    /// 項目リストと掛率テーブルからカタログを構築
    pub fn from_items(items: Vec<RepairItem>, rates: RateTable) -> Result<Self> {
        rates.validate()?;

        let mut index = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            if item.base_price == 0 {
                return Err(Error::Config(format!(
                    "定価が0円の項目があります: {}",
                    item.id
                )));
            }
            if index.insert(item.id.clone(), i).is_some() {
                return Err(Error::Config(format!("項目IDが重複しています: {}", item.id)));
            }
        }

        Ok(Self { rates, items, index })
    }

    /// JSON文字列から読み込み
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        let rates = RateTable::default().with_overrides(&file.rates);
        Self::from_items(file.items, rates)
    }

    /// JSONファイルから読み込み
    pub fn from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 組み込みカタログ（賃貸原状回復でよくある11項目）
    pub fn builtin() -> Self {
        fn item(
            id: &str,
            category: &str,
            label: &str,
            base_price: u64,
            rate_type: RateType,
            unit: &str,
            note: Option<&str>,
        ) -> RepairItem {
            RepairItem {
                id: id.to_string(),
                category: category.to_string(),
                label: label.to_string(),
                base_price,
                rate_type,
                unit: unit.to_string(),
                note: note.map(|s| s.to_string()),
            }
        }

        use RateType::{Construction, Equipment};

        let items = vec![
            item("unit_bath", "bath", "ユニットバス交換（1216サイズ）", 1_072_000, Equipment, "式", Some("解体・撤去・処分費含む")),
            item("water_heater", "bath", "給湯器交換（16号・追焚付）", 438_000, Equipment, "台", None),
            item("wash_basin", "sanitary", "洗面化粧台交換（W600）", 244_000, Equipment, "台", None),
            item("wallpaper", "interior", "クロス張替え（量産品）", 1_400, Construction, "m²", None),
            item("floor_cf", "interior", "CFシート張替え", 4_500, Construction, "m²", None),
            item("kitchen_block", "kitchen", "キッチン交換（公団型・W1800）", 180_000, Equipment, "台", Some("プロパンガス会社貸与なら無料になる可能性あり")),
            item("toilet_washlet", "toilet", "温水洗浄便座本体＋設置", 60_000, Equipment, "台", Some("便器ごとの交換ではなく便座のみ")),
            item("tatami", "interior", "畳 表替え", 6_000, Construction, "枚", Some("6畳間＝6枚")),
            item("ac_new", "aircon", "エアコン新品設置（6畳用）", 90_000, Equipment, "台", None),
            item("cleaning", "cleaning", "ルームクリーニング（一式）", 45_000, Construction, "式", Some("2DK〜3DK想定")),
            item("exterior_painting", "exterior", "外壁・屋根塗装（一式）", 1_100_000, Construction, "式", None),
        ];

        // 組み込みデータは不変条件を満たしている（テストで検証）
        let mut index = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            index.insert(item.id.clone(), i);
        }

        Self {
            rates: RateTable::default(),
            items,
            index,
        }
    }

    /// IDで項目を取得
    pub fn get(&self, id: &str) -> Option<&RepairItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// 全項目（カタログ定義順）
    pub fn items(&self) -> &[RepairItem] {
        &self.items
    }

    /// 掛率テーブル
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// カテゴリ一覧（カタログ内の出現順、重複除去）
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }

    /// 指定カテゴリの項目のみを返す
    pub fn items_in_category(&self, category: &str) -> Vec<&RepairItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// 項目数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
