// ==========================================
// 产线 OEE 效率报表 - 驾驶舱 API
// ==========================================
// 职责: 一次调用组装完整驾驶舱视图,封装导出入口
// 架构: API 层 → 引擎层 (计算/聚合/分级/对比) → 导出层
// 红线: 快照由调用方显式传入,本层不缓存、不持有快照
// ==========================================

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::metrics::{DowntimeCategorySummary, OeeMetrics, ParetoEntry, PeriodComparison};
use crate::domain::production::{DowntimeEvent, ProductionData};
use crate::domain::types::{DowntimeType, OeeStatus, ShiftFilter};
use crate::engine::formatter;
use crate::engine::{
    DowntimeAggregator, OeeCalculator, PeriodComparator, StatusClassifier, StatusThresholds,
};
use crate::export::{write_export, ExportFormat, ExportSerializer};

/// "全部班次" 选项标签
pub const ALL_SHIFTS_LABEL: &str = "All Shifts";

// ==========================================
// 视图对象
// ==========================================

/// 班次筛选选项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftOption {
    pub value: String,
    pub label: String,
}

/// 已格式化的四项指标（按配置小数位）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedMetrics {
    pub oee: String,
    pub availability: String,
    pub performance: String,
    pub quality: String,
}

/// 单班次指标视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftMetricsView {
    pub shift_id: String,
    pub shift_name: String,
    pub metrics: OeeMetrics,
    pub status: OeeStatus,
}

/// 停机概览（基于已按班次筛选的事件）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeOverview {
    pub total_minutes: f64,
    pub total_display: String,
    pub planned_minutes: f64,
    pub unplanned_minutes: f64,
    pub top_reasons: Vec<DowntimeEvent>,
    pub top_categories: Vec<DowntimeCategorySummary>,
    pub pareto: Vec<ParetoEntry>,
}

/// 驾驶舱完整视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub line_name: String,
    pub site: String,
    pub department: String,
    pub report_date: String,

    pub filter: ShiftFilter,
    pub shift_options: Vec<ShiftOption>,

    pub metrics: OeeMetrics,
    pub formatted: FormattedMetrics,
    pub status: OeeStatus,
    pub thresholds: StatusThresholds,

    pub comparison: PeriodComparison,
    pub downtime: DowntimeOverview,
    pub shift_metrics: Vec<ShiftMetricsView>,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责：
/// 1. 按班次筛选计算指标、状态、周期对比
/// 2. 停机排名与帕累托分析（仅统计筛选后的事件）
/// 3. 结构化 / 表格导出
#[derive(Debug, Clone, Default)]
pub struct DashboardApi {
    config: ConfigManager,
    calculator: OeeCalculator,
    aggregator: DowntimeAggregator,
    comparator: PeriodComparator,
    serializer: ExportSerializer,
}

impl DashboardApi {
    pub fn new(config: ConfigManager) -> Self {
        Self {
            config,
            calculator: OeeCalculator::new(),
            aggregator: DowntimeAggregator::new(),
            comparator: PeriodComparator::new(),
            serializer: ExportSerializer::new(),
        }
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    /// 组装驾驶舱视图
    ///
    /// # 参数
    /// - snapshot: 生产快照（None 表示上游尚未就绪）
    /// - filter: 班次筛选
    ///
    /// # 返回
    /// - Ok(DashboardView): 完整视图
    /// - Err(ApiError::SnapshotUnavailable): 快照缺失
    #[instrument(skip(self, snapshot, filter), fields(filter = %filter))]
    pub fn build_view(
        &self,
        snapshot: Option<&ProductionData>,
        filter: &ShiftFilter,
    ) -> ApiResult<DashboardView> {
        let data = require_snapshot(snapshot)?;
        require_valid_filter(filter)?;
        let settings = self.config.config();
        let decimals = settings.percentage_decimals;

        let thresholds = self.config.thresholds_for(&data.metadata);
        let classifier = StatusClassifier::new(thresholds);

        // 1. 事件按筛选收窄后再进入汇总与排名
        let events = self.filtered_events(data, filter);
        let metrics = self.calculator.filtered_metrics(
            &data.shifts,
            &events,
            &data.production_line,
            filter,
        );
        let status = classifier.classify(metrics.oee);

        // 2. 周期对比（无基线时为 Unavailable）
        let comparison = self
            .comparator
            .compare(&metrics, data.previous_period.as_ref());

        // 3. 停机概览
        let total_minutes = self.aggregator.total_minutes(&events);
        let downtime = DowntimeOverview {
            total_minutes,
            total_display: formatter::duration(total_minutes),
            planned_minutes: self
                .aggregator
                .total_minutes(&self.aggregator.by_type(&events, DowntimeType::Planned)),
            unplanned_minutes: self
                .aggregator
                .total_minutes(&self.aggregator.by_type(&events, DowntimeType::Unplanned)),
            top_reasons: self.aggregator.top_reasons(&events, settings.top_n),
            top_categories: self.aggregator.top_categories(&events, settings.top_n),
            pareto: self.aggregator.pareto(&events),
        };

        // 4. 各班次指标（始终基于全部事件,按班次ID归属）
        let shift_metrics: Vec<ShiftMetricsView> = data
            .shifts
            .iter()
            .map(|shift| {
                let shift_metrics = self.calculator.shift_metrics(
                    shift,
                    &data.downtime_events,
                    &data.production_line,
                );
                ShiftMetricsView {
                    shift_id: shift.id.clone(),
                    shift_name: shift.name.clone(),
                    metrics: shift_metrics,
                    status: classifier.classify(shift_metrics.oee),
                }
            })
            .collect();

        info!(
            line = %data.production_line.id,
            oee = metrics.oee,
            status = %status,
            events = events.len(),
            "驾驶舱视图已生成"
        );

        Ok(DashboardView {
            line_name: data.production_line.name.clone(),
            site: data.metadata.site.clone(),
            department: data.metadata.department.clone(),
            report_date: data.metadata.report_date.clone(),
            filter: filter.clone(),
            shift_options: self.shift_options(data),
            metrics,
            formatted: FormattedMetrics {
                oee: formatter::percentage(metrics.oee, decimals),
                availability: formatter::percentage(metrics.availability, decimals),
                performance: formatter::percentage(metrics.performance, decimals),
                quality: formatter::percentage(metrics.quality, decimals),
            },
            status,
            thresholds,
            comparison,
            downtime,
            shift_metrics,
        })
    }

    /// 班次筛选选项: "All Shifts" + 每班次一项
    pub fn shift_options(&self, data: &ProductionData) -> Vec<ShiftOption> {
        std::iter::once(ShiftOption {
            value: ShiftFilter::ALL_KEY.to_string(),
            label: ALL_SHIFTS_LABEL.to_string(),
        })
        .chain(data.shifts.iter().map(|shift| ShiftOption {
            value: shift.id.clone(),
            label: shift.name.clone(),
        }))
        .collect()
    }

    /// 按筛选收窄停机事件（保持原顺序）
    pub fn filtered_events(
        &self,
        data: &ProductionData,
        filter: &ShiftFilter,
    ) -> Vec<DowntimeEvent> {
        match filter {
            ShiftFilter::All => data.downtime_events.clone(),
            ShiftFilter::Shift(shift_id) => {
                if data.find_shift(shift_id).is_none() {
                    debug!(shift_id = %shift_id, "筛选班次不在快照中");
                }
                self.aggregator.by_shift(shift_id, &data.downtime_events)
            }
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 生成导出内容（指标按当前筛选计算）
    #[instrument(skip(self, snapshot, filter, format), fields(filter = %filter, format = ?format))]
    pub fn export_content(
        &self,
        snapshot: Option<&ProductionData>,
        filter: &ShiftFilter,
        format: ExportFormat,
    ) -> ApiResult<String> {
        let data = require_snapshot(snapshot)?;
        require_valid_filter(filter)?;
        let events = self.filtered_events(data, filter);
        let metrics = self.calculator.filtered_metrics(
            &data.shifts,
            &events,
            &data.production_line,
            filter,
        );

        let content = match format {
            ExportFormat::Json => self.serializer.to_structured(data, &metrics)?,
            ExportFormat::Csv => self.serializer.to_tabular(data, &metrics)?,
        };
        Ok(content)
    }

    /// 生成导出内容并写入目录
    ///
    /// `output_dir` 为 None 时使用配置的导出目录。
    pub fn export_to_dir(
        &self,
        snapshot: Option<&ProductionData>,
        filter: &ShiftFilter,
        format: ExportFormat,
        output_dir: Option<&Path>,
    ) -> ApiResult<PathBuf> {
        let data = require_snapshot(snapshot)?;
        let content = self.export_content(Some(data), filter, format)?;

        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.config.output_dir(),
        };
        Ok(write_export(&dir, &data.metadata, format, &content)?)
    }
}

fn require_snapshot(snapshot: Option<&ProductionData>) -> ApiResult<&ProductionData> {
    snapshot.ok_or_else(|| ApiError::SnapshotUnavailable("生产数据尚未加载".to_string()))
}

/// 班次ID不得为空白（空白应使用 `ShiftFilter::All`）
fn require_valid_filter(filter: &ShiftFilter) -> ApiResult<()> {
    match filter {
        ShiftFilter::Shift(shift_id) if shift_id.trim().is_empty() => {
            Err(ApiError::InvalidInput("班次筛选ID不能为空".to_string()))
        }
        _ => Ok(()),
    }
}
