//! Repair Cost Common Library
//!
//! CLIと共有される見積もりコア:
//! - catalog: 修繕項目マスタと掛率区分
//! - rates: 掛率テーブル
//! - selection: セッション単位の選択状態
//! - estimator: 概算単価・合計・明細の計算

pub mod catalog;
pub mod rates;
pub mod selection;
pub mod estimator;
pub mod error;
pub mod export;

pub use catalog::{Catalog, RateType, RepairItem};
pub use rates::RateTable;
pub use selection::Selection;
pub use estimator::{breakdown, estimated_unit_price, line_subtotal, total, Estimate, EstimateLine};
pub use error::{Error, Result};
