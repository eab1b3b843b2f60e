// ==========================================
// 产线 OEE 效率报表 - 生产快照实体
// ==========================================
// 职责: 产线、班次、停机事件、上期基线、报表元数据
// 红线: 快照只读,引擎不修改任何字段
// ==========================================

use crate::domain::types::DowntimeType;
use serde::{Deserialize, Serialize};

/// 产线（报表周期内的参考数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    pub id: String,
    pub name: String,

    /// 目标节拍（秒/件）
    pub target_cycle_time: f64,

    #[serde(default)]
    pub description: String,
}

/// 班次
///
/// 数量字段按约定为非负整数，但快照中可能写成浮点（如 `400.0`），
/// 因此统一按 f64 读取，不做校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,

    /// 计划生产时间（分钟）
    pub planned_production_time: f64,

    pub target_quantity: f64,
    pub actual_quantity: f64,
    pub good_quantity: f64,
    pub defect_quantity: f64,
}

/// 停机事件（归属唯一班次）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeEvent {
    pub id: String,
    pub shift_id: String,
    pub category: String,
    pub reason: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: f64,

    #[serde(rename = "type")]
    pub downtime_type: DowntimeType,
}

/// 上期基线快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousPeriod {
    pub description: String,

    #[serde(rename = "totalOEE")]
    pub total_oee: f64,

    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

/// 报表元数据（阈值与标签,不参与计算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub site: String,
    pub department: String,
    pub report_date: String,

    #[serde(
        rename = "worldClassOEETarget",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub world_class_oee_target: Option<f64>,

    #[serde(
        rename = "minimumAcceptableOEE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_acceptable_oee: Option<f64>,
}

/// 生产数据快照（每个报表周期一份）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionData {
    pub production_line: ProductionLine,

    #[serde(default)]
    pub shifts: Vec<Shift>,

    #[serde(default)]
    pub downtime_events: Vec<DowntimeEvent>,

    /// None 表示没有上期数据
    #[serde(default)]
    pub previous_period: Option<PreviousPeriod>,

    pub metadata: Metadata,
}

impl ProductionData {
    /// 按ID查找班次
    pub fn find_shift(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == shift_id)
    }

    /// 班次名称（找不到时回退为原始ID）
    pub fn shift_name_or_id<'a>(&'a self, shift_id: &'a str) -> &'a str {
        self.find_shift(shift_id)
            .map(|s| s.name.as_str())
            .unwrap_or(shift_id)
    }
}
