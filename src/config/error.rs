// ==========================================
// 产线 OEE 效率报表 - 配置错误类型
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 (path: {path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置解析失败 (path: {path}): {message}")]
    ConfigParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
