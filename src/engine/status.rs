// ==========================================
// 产线 OEE 效率报表 - OEE 状态分级引擎
// ==========================================
// 职责: 按阈值将 OEE 映射为三级状态
// 规则: 边界向上包含
//   oee >= 世界级阈值          → WorldClass
//   oee >= 最低可接受阈值      → Acceptable
//   其余                       → NeedsAttention
// ==========================================

use crate::domain::production::Metadata;
use crate::domain::types::OeeStatus;
use serde::{Deserialize, Serialize};

/// 默认世界级阈值
pub const DEFAULT_WORLD_CLASS_THRESHOLD: f64 = 0.85;

/// 默认最低可接受阈值
pub const DEFAULT_MINIMUM_THRESHOLD: f64 = 0.65;

/// 状态分级阈值（按产线配置）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub world_class: f64,
    pub minimum: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            world_class: DEFAULT_WORLD_CLASS_THRESHOLD,
            minimum: DEFAULT_MINIMUM_THRESHOLD,
        }
    }
}

impl StatusThresholds {
    pub fn new(world_class: f64, minimum: f64) -> Self {
        Self {
            world_class,
            minimum,
        }
    }

    /// 从报表元数据读取阈值,缺失项使用默认值
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            world_class: metadata
                .world_class_oee_target
                .unwrap_or(DEFAULT_WORLD_CLASS_THRESHOLD),
            minimum: metadata
                .minimum_acceptable_oee
                .unwrap_or(DEFAULT_MINIMUM_THRESHOLD),
        }
    }

    /// 用显式覆写值替换对应阈值
    pub fn with_overrides(self, world_class: Option<f64>, minimum: Option<f64>) -> Self {
        Self {
            world_class: world_class.unwrap_or(self.world_class),
            minimum: minimum.unwrap_or(self.minimum),
        }
    }
}

// ==========================================
// StatusClassifier - 状态分级引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier {
    thresholds: StatusThresholds,
}

impl StatusClassifier {
    pub fn new(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> StatusThresholds {
        self.thresholds
    }

    /// 按当前阈值分级
    pub fn classify(&self, oee: f64) -> OeeStatus {
        Self::classify_with(oee, self.thresholds.world_class, self.thresholds.minimum)
    }

    /// 按显式阈值分级
    pub fn classify_with(
        oee: f64,
        world_class_threshold: f64,
        minimum_threshold: f64,
    ) -> OeeStatus {
        if oee >= world_class_threshold {
            OeeStatus::WorldClass
        } else if oee >= minimum_threshold {
            OeeStatus::Acceptable
        } else {
            OeeStatus::NeedsAttention
        }
    }
}
