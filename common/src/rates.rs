//! 掛率テーブルモジュール
//!
//! 定価から概算単価を出すための掛率を管理する。
//! 金額計算を整数で完結させるため、掛率はパーセント整数（1〜100）で持つ。

use crate::catalog::RateType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 設備系の既定掛率（定価の55%が相場）
pub const DEFAULT_EQUIPMENT_PERCENT: u64 = 55;

/// 建築・労務系の既定掛率（人件費メインのため定価の85%が相場）
pub const DEFAULT_CONSTRUCTION_PERCENT: u64 = 85;

/// 掛率テーブル
///
/// 区分ごとの掛率（パーセント）。新しい区分を追加する場合は
/// `RateType` と本テーブルの両方を同時に拡張すること。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// 設備系の掛率（%）
    #[serde(rename = "EQUIPMENT")]
    pub equipment: u64,
    /// 建築・労務系の掛率（%）
    #[serde(rename = "CONSTRUCTION")]
    pub construction: u64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            equipment: DEFAULT_EQUIPMENT_PERCENT,
            construction: DEFAULT_CONSTRUCTION_PERCENT,
        }
    }
}

/// カタログJSONでの掛率上書き（省略したフィールドは既定値のまま）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateOverrides {
    #[serde(rename = "EQUIPMENT")]
    pub equipment: Option<u64>,
    #[serde(rename = "CONSTRUCTION")]
    pub construction: Option<u64>,
}

impl RateTable {
    /// 区分に対応する掛率（%）を返す
    pub fn discount_percent(&self, rate_type: RateType) -> u64 {
        match rate_type {
            RateType::Equipment => self.equipment,
            RateType::Construction => self.construction,
        }
    }

    /// 上書き設定を適用したテーブルを返す
    pub fn with_overrides(&self, overrides: &RateOverrides) -> Self {
        Self {
            equipment: overrides.equipment.unwrap_or(self.equipment),
            construction: overrides.construction.unwrap_or(self.construction),
        }
    }

    /// 掛率が1〜100%に収まっているか検証する
    ///
    /// 範囲外はカタログ読み込み時点で設定エラーとして弾く。
    pub fn validate(&self) -> Result<()> {
        for (name, percent) in [("EQUIPMENT", self.equipment), ("CONSTRUCTION", self.construction)] {
            if percent == 0 || percent > 100 {
                return Err(Error::Config(format!(
                    "掛率が不正です: {} = {}%（1〜100で指定してください）",
                    name, percent
                )));
            }
        }
        Ok(())
    }
}
