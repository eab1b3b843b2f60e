// ==========================================
// 产线 OEE 效率报表 - 计算结果对象
// ==========================================
// 职责: OEE 指标、周期差值、停机分类汇总、帕累托条目
// 红线: 结果对象均为新值,不回写快照
// ==========================================

use crate::domain::types::{DowntimeType, TrendDirection};
use serde::{Deserialize, Serialize};

/// OEE 指标
///
/// 各比率位于 [0,1]；`oee` 恒为三者乘积，不再单独截断。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OeeMetrics {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

impl OeeMetrics {
    /// 全零指标（未匹配班次时的返回值）
    pub const ZERO: OeeMetrics = OeeMetrics {
        availability: 0.0,
        performance: 0.0,
        quality: 0.0,
        oee: 0.0,
    };
}

/// 本期与上期的逐项差值（有符号,不截断）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeDelta {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

/// 单项对比行（展示顺序: OEE / Availability / Performance / Quality）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    pub trend: TrendDirection,
}

/// 周期对比结果
///
/// 没有上期基线时为 `Unavailable`，不得以零差值代替。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PeriodComparison {
    Available {
        description: String,
        deltas: OeeDelta,
        rows: Vec<ComparisonRow>,
    },
    Unavailable,
}

impl PeriodComparison {
    pub fn is_available(&self) -> bool {
        matches!(self, PeriodComparison::Available { .. })
    }

    pub fn deltas(&self) -> Option<&OeeDelta> {
        match self {
            PeriodComparison::Available { deltas, .. } => Some(deltas),
            PeriodComparison::Unavailable => None,
        }
    }
}

/// 停机分类汇总
///
/// `downtime_type` 取该分类首个事件的类型（非多数表决）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeCategorySummary {
    pub category: String,
    pub total_duration_minutes: f64,
    pub event_count: usize,

    #[serde(rename = "type")]
    pub downtime_type: DowntimeType,
}

/// 帕累托分析条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoEntry {
    pub summary: DowntimeCategorySummary,

    /// 占总停机时长的百分比 (0-100)
    pub share_pct: f64,

    /// 累计百分比 (0-100)
    pub cumulative_pct: f64,
}
