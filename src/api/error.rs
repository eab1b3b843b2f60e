// ==========================================
// 产线 OEE 效率报表 - API层错误类型
// ==========================================
// 职责: 汇总下层错误,转换为面向调用方的错误消息
// 红线: 快照缺失必须显式报错,不得以全零数据代替
// ==========================================

use crate::config::error::ConfigError;
use crate::export::error::ExportError;
use crate::importer::error::SnapshotError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 快照未提供（上游数据尚未就绪）
    #[error("快照不可用: {0}")]
    SnapshotUnavailable(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("快照加载失败: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
