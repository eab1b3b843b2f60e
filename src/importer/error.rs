// ==========================================
// 产线 OEE 效率报表 - 快照导入错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 快照导入错误类型
#[derive(Error, Debug)]
pub enum SnapshotError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 解析错误 =====
    #[error("快照 JSON 解析失败 (行 {line}, 列 {column}): {message}")]
    JsonParseError {
        line: usize,
        column: usize,
        message: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::FileReadError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::JsonParseError {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type SnapshotResult<T> = Result<T, SnapshotError>;
