// ==========================================
// 产线 OEE 效率报表 - 配置层
// ==========================================
// 职责: 报表配置加载与阈值解析
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod report_config;

// 重导出核心配置管理器
pub use config_manager::{ConfigManager, CONFIG_PATH_ENV, DEFAULT_OUTPUT_DIR};
pub use error::{ConfigError, ConfigResult};
pub use report_config::ReportConfig;
