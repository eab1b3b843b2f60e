// ==========================================
// 产线 OEE 效率报表 - 报表配置
// ==========================================
// 存储: JSON 文件（全部字段可缺省）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::ShiftFilter;
use crate::engine::downtime::DEFAULT_TOP_LIMIT;
use crate::engine::formatter::DEFAULT_DECIMALS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_top_n() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_percentage_decimals() -> usize {
    DEFAULT_DECIMALS
}

/// 报表配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 停机排名条数
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// 百分比展示小数位
    #[serde(default = "default_percentage_decimals")]
    pub percentage_decimals: usize,

    /// 默认班次筛选（"all" 或班次ID）
    #[serde(default)]
    pub shift_filter: ShiftFilter,

    /// 世界级阈值覆写（优先于快照元数据）
    #[serde(default)]
    pub world_class_threshold: Option<f64>,

    /// 最低可接受阈值覆写（优先于快照元数据）
    #[serde(default)]
    pub minimum_threshold: Option<f64>,

    /// 导出目录
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            percentage_decimals: default_percentage_decimals(),
            shift_filter: ShiftFilter::All,
            world_class_threshold: None,
            minimum_threshold: None,
            output_dir: None,
        }
    }
}

impl ReportConfig {
    /// 校验阈值范围与相对大小
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, value) in [
            ("world_class_threshold", self.world_class_threshold),
            ("minimum_threshold", self.minimum_threshold),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ConfigValueError {
                        key: key.to_string(),
                        value: v.to_string(),
                        message: "阈值必须位于 [0, 1]".to_string(),
                    });
                }
            }
        }

        if let (Some(world_class), Some(minimum)) =
            (self.world_class_threshold, self.minimum_threshold)
        {
            if minimum > world_class {
                return Err(ConfigError::ConfigValueError {
                    key: "minimum_threshold".to_string(),
                    value: minimum.to_string(),
                    message: format!("不得高于世界级阈值 {}", world_class),
                });
            }
        }

        Ok(())
    }
}
