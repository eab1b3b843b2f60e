// ==========================================
// 产线 OEE 效率报表 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 序列化错误 =====
    #[error("CSV 写入失败: {0}")]
    CsvWriteError(String),

    #[error("CSV 内容不是合法 UTF-8: {0}")]
    Utf8Error(String),

    #[error("JSON 序列化失败: {0}")]
    JsonError(String),

    // ===== 文件错误 =====
    #[error("导出目录不可用: {0}")]
    OutputDirUnavailable(String),

    #[error("导出文件写入失败 (path: {path}): {message}")]
    WriteFailed { path: String, message: String },
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::JsonError(err.to_string())
    }
}

// 实现 From<std::string::FromUtf8Error>
impl From<std::string::FromUtf8Error> for ExportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExportError::Utf8Error(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
