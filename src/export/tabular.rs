// ==========================================
// 产线 OEE 效率报表 - 表格导出 (CSV)
// ==========================================
// 固定三段布局:
//   1) Metric,Value,Percentage + 4 行汇总指标
//   2) 空行 + Shift,OEE,Availability,Performance,Quality + 每班次一行（逐班次重算）
//   3) 空行 + Downtime Event,Category,Type,Duration (min),Shift + 每事件一行（原顺序）
// ==========================================
// 注: 字段以逗号直接拼接,不做转义（QuoteStyle::Never）
//     行间以 \n 分隔,末尾无换行
// ==========================================

use super::error::{ExportError, ExportResult};
use super::ExportSerializer;
use crate::domain::metrics::OeeMetrics;
use crate::domain::production::ProductionData;
use crate::engine::formatter;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::instrument;

const SUMMARY_HEADER: [&str; 3] = ["Metric", "Value", "Percentage"];
const SHIFT_HEADER: [&str; 5] = ["Shift", "OEE", "Availability", "Performance", "Quality"];
const EVENT_HEADER: [&str; 5] = ["Downtime Event", "Category", "Type", "Duration (min)", "Shift"];

/// 比率保留 4 位小数
fn ratio(value: f64) -> String {
    formatter::fixed(value, 4)
}

impl ExportSerializer {
    /// 组装表格导出的全部行
    pub fn tabular_rows(&self, data: &ProductionData, metrics: &OeeMetrics) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = Vec::new();

        // 1) 汇总指标
        rows.push(SUMMARY_HEADER.iter().map(|s| s.to_string()).collect());
        for (label, value) in [
            ("OEE", metrics.oee),
            ("Availability", metrics.availability),
            ("Performance", metrics.performance),
            ("Quality", metrics.quality),
        ] {
            rows.push(vec![
                label.to_string(),
                ratio(value),
                formatter::percentage(value, 1),
            ]);
        }

        // 2) 班次指标（逐班次重算,不取汇总值）
        rows.push(vec![String::new(); SUMMARY_HEADER.len()]);
        rows.push(SHIFT_HEADER.iter().map(|s| s.to_string()).collect());
        for shift in &data.shifts {
            let shift_metrics = self.calculator.shift_metrics(
                shift,
                &data.downtime_events,
                &data.production_line,
            );
            rows.push(vec![
                shift.name.clone(),
                ratio(shift_metrics.oee),
                ratio(shift_metrics.availability),
                ratio(shift_metrics.performance),
                ratio(shift_metrics.quality),
            ]);
        }

        // 3) 停机事件明细（班次名找不到时回退原始ID）
        rows.push(vec![String::new(); SHIFT_HEADER.len()]);
        rows.push(EVENT_HEADER.iter().map(|s| s.to_string()).collect());
        for event in &data.downtime_events {
            rows.push(vec![
                event.reason.clone(),
                event.category.clone(),
                event.downtime_type.to_string(),
                event.duration_minutes.to_string(),
                data.shift_name_or_id(&event.shift_id).to_string(),
            ]);
        }

        rows
    }

    /// 表格导出
    #[instrument(skip(self, data, metrics), fields(
        shifts = data.shifts.len(),
        events = data.downtime_events.len()
    ))]
    pub fn to_tabular(&self, data: &ProductionData, metrics: &OeeMetrics) -> ExportResult<String> {
        let rows = self.tabular_rows(data, metrics);

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true) // 三段列数不一致
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for row in &rows {
            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
        let mut content = String::from_utf8(bytes)?;

        // 末行不带换行
        if content.ends_with('\n') {
            content.pop();
        }

        Ok(content)
    }
}
