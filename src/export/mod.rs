// ==========================================
// 产线 OEE 效率报表 - 导出层
// ==========================================
// 职责: 结构化 (JSON) 与表格 (CSV) 两种固定格式导出
// 边界: 只生成文本内容;落盘由 write_export 完成,浏览器下载等交互不在此处
// ==========================================

pub mod error;
mod structured;
mod tabular;

pub use error::{ExportError, ExportResult};
pub use structured::StructuredExport;

use crate::domain::production::Metadata;
use crate::engine::OeeCalculator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

// ==========================================
// ExportSerializer - 导出序列化器
// ==========================================
// 表格导出的班次行需要逐班次重算指标,因此持有计算引擎
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSerializer {
    calculator: OeeCalculator,
}

impl ExportSerializer {
    pub fn new() -> Self {
        Self {
            calculator: OeeCalculator::new(),
        }
    }
}

/// 导出文件名: `oee-dashboard-<reportDate>.<ext>`
pub fn export_filename(metadata: &Metadata, format: ExportFormat) -> String {
    format!(
        "oee-dashboard-{}.{}",
        metadata.report_date,
        format.extension()
    )
}

/// 写出导出内容到目录
///
/// # 返回
/// 写出的文件完整路径
pub fn write_export(
    output_dir: &Path,
    metadata: &Metadata,
    format: ExportFormat,
    content: &str,
) -> ExportResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        ExportError::OutputDirUnavailable(format!("{}: {}", output_dir.display(), e))
    })?;

    let path = output_dir.join(export_filename(metadata, format));
    fs::write(&path, content).map_err(|e| ExportError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        mime = format.mime_type(),
        bytes = content.len(),
        "导出文件已写出"
    );
    Ok(path)
}
