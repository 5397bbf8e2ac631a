//! Excel生成（CLI版）
//!
//! 共通ライブラリのバッファ生成を使ってファイルに書き出す

use crate::error::{RepairCostError, Result};
use repair_cost_common::export::excel_core;
use repair_cost_common::Estimate;
use std::path::Path;

pub fn generate_excel(
    estimate: &Estimate,
    output_path: &Path,
    title: &str,
    date: &str,
) -> Result<()> {
    let buffer = excel_core::generate_quote_buffer(estimate, title, date)
        .map_err(RepairCostError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
