pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use repair_cost_common::Estimate;
use std::path::Path;

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> std::path::PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 見積もりをJSONファイルに書き出す
pub fn write_json(estimate: &Estimate, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(estimate)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

pub fn export_estimate(
    estimate: &Estimate,
    format: &ExportFormat,
    output_dir: &Path,
    title: &str,
    date: &str,
) -> Result<()> {
    match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output_dir, title, "json");
            println!("- JSONを生成中...");
            write_json(estimate, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output_dir, title, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(estimate, &output_path, title, date)?;
            println!("✔ Excel出力: {}", output_path.display());
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output_dir, title);

            println!("- JSONを生成中...");
            write_json(estimate, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());

            println!("- Excelを生成中...");
            excel::generate_excel(estimate, &excel_path, title, date)?;
            println!("✔ Excel出力: {}", excel_path.display());
        }
    }

    Ok(())
}
