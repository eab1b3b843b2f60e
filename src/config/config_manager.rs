// ==========================================
// 产线 OEE 效率报表 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、阈值解析
// 路径优先级: 环境变量 OEE_REPORT_CONFIG → 用户配置目录/oee-report/config.json
// 阈值优先级: 配置覆写 → 快照元数据 → 默认值 (0.85 / 0.65)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::report_config::ReportConfig;
use crate::domain::production::Metadata;
use crate::engine::status::StatusThresholds;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "OEE_REPORT_CONFIG";

/// 默认导出目录
pub const DEFAULT_OUTPUT_DIR: &str = "./oee-reports";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    /// 实际加载的配置文件（None 表示使用默认配置）
    source: Option<PathBuf>,
    config: ReportConfig,
}

impl ConfigManager {
    /// 直接使用给定配置
    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            source: None,
            config,
        }
    }

    /// 获取默认配置文件路径
    ///
    /// # 返回
    /// - 环境变量 OEE_REPORT_CONFIG 非空时使用其值
    /// - 否则: 用户配置目录/oee-report/config.json
    /// - 拿不到用户配置目录时返回 None
    pub fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }

        dirs::config_dir().map(|dir| dir.join("oee-report").join("config.json"))
    }

    /// 从默认路径加载（文件不存在时使用默认配置）
    pub fn load() -> ConfigResult<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("无法定位用户配置目录,使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 从指定路径加载（文件不存在时使用默认配置）
    pub fn load_from<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: ReportConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;

        info!(path = %path.display(), "已加载报表配置");
        Ok(Self {
            source: Some(path.to_path_buf()),
            config,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 解析状态分级阈值
    pub fn thresholds_for(&self, metadata: &Metadata) -> StatusThresholds {
        StatusThresholds::from_metadata(metadata).with_overrides(
            self.config.world_class_threshold,
            self.config.minimum_threshold,
        )
    }

    /// 导出目录（未配置时使用默认目录）
    pub fn output_dir(&self) -> PathBuf {
        self.config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
