// ==========================================
// 产线 OEE 效率报表 - 结构化导出 (JSON)
// ==========================================
// 字段集合固定: metadata / productionLine / reportDate / oeeMetrics /
//               shifts / downtimeEvents / previousPeriod
// 嵌套结构与快照保持一致
// ==========================================

use super::error::ExportResult;
use super::ExportSerializer;
use crate::domain::metrics::OeeMetrics;
use crate::domain::production::{
    DowntimeEvent, Metadata, PreviousPeriod, ProductionData, ProductionLine, Shift,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

/// 结构化导出记录（借用快照,不复制）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredExport<'a> {
    pub metadata: &'a Metadata,
    pub production_line: &'a ProductionLine,

    /// 导出生成时间（RFC 3339,毫秒精度,UTC）
    pub report_date: String,

    pub oee_metrics: &'a OeeMetrics,
    pub shifts: &'a [Shift],
    pub downtime_events: &'a [DowntimeEvent],
    pub previous_period: Option<&'a PreviousPeriod>,
}

impl ExportSerializer {
    /// 组装结构化导出记录
    pub fn structured_record<'a>(
        &self,
        data: &'a ProductionData,
        metrics: &'a OeeMetrics,
        generated_at: DateTime<Utc>,
    ) -> StructuredExport<'a> {
        StructuredExport {
            metadata: &data.metadata,
            production_line: &data.production_line,
            report_date: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            oee_metrics: metrics,
            shifts: &data.shifts,
            downtime_events: &data.downtime_events,
            previous_period: data.previous_period.as_ref(),
        }
    }

    /// 结构化导出（生成时间取当前时刻）
    pub fn to_structured(
        &self,
        data: &ProductionData,
        metrics: &OeeMetrics,
    ) -> ExportResult<String> {
        self.to_structured_at(data, metrics, Utc::now())
    }

    /// 结构化导出（指定生成时间）
    #[instrument(skip(self, data, metrics), fields(line = %data.production_line.id))]
    pub fn to_structured_at(
        &self,
        data: &ProductionData,
        metrics: &OeeMetrics,
        generated_at: DateTime<Utc>,
    ) -> ExportResult<String> {
        let record = self.structured_record(data, metrics, generated_at);
        Ok(serde_json::to_string_pretty(&record)?)
    }
}
