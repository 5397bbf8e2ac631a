//! Excel生成（共通ライブラリ）
//!
//! 明細付き見積もりから見積書形式のExcelを生成する

use crate::estimator::Estimate;
use rust_xlsxwriter::*;

/// 明細のヘッダー行
const HEADERS: [&str; 6] = ["項目", "数量", "単位", "概算単価", "小計", "備考"];

/// Excelをバッファに生成
///
/// # Arguments
/// * `estimate` - 明細付き見積もり
/// * `title` - 見積書タイトル
/// * `date` - 見積日（表示用の文字列）
pub fn generate_quote_buffer(
    estimate: &Estimate,
    title: &str,
    date: &str,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(9.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let yen_format = Format::new()
        .set_font_size(11.0)
        .set_num_format("¥#,##0")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let quantity_format = Format::new()
        .set_font_size(11.0)
        .set_num_format("#,##0")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let total_format = Format::new()
        .set_bold()
        .set_font_size(12.0)
        .set_num_format("¥#,##0")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("見積書")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // 列幅設定
    let widths = [36.0, 8.0, 8.0, 14.0, 14.0, 40.0];
    for (col, width) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // タイトルと見積日
    worksheet
        .write_with_format(0, 0, title, &title_format)
        .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;
    worksheet
        .write(1, 0, format!("見積日: {}", date))
        .map_err(|e| format!("見積日書き込みエラー: {}", e))?;

    // ヘッダー行
    let header_row = 3;
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    // 明細行
    let mut row = header_row + 1;
    for line in &estimate.lines {
        worksheet
            .write_with_format(row, 0, line.label.as_str(), &text_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        worksheet
            .write_with_format(row, 1, line.quantity as f64, &quantity_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        worksheet
            .write_with_format(row, 2, line.unit.as_str(), &text_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        worksheet
            .write_with_format(row, 3, line.unit_price as f64, &yen_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        worksheet
            .write_with_format(row, 4, line.subtotal as f64, &yen_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        worksheet
            .write_with_format(row, 5, line.note.as_deref().unwrap_or(""), &text_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        row += 1;
    }

    // 合計行
    worksheet
        .write_with_format(row, 3, "合計", &header_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;
    worksheet
        .write_with_format(row, 4, estimate.total as f64, &total_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel生成エラー: {}", e))
}
