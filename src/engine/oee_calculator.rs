// ==========================================
// 产线 OEE 效率报表 - OEE 指标计算引擎
// ==========================================
// 职责: 可用率 / 性能率 / 良品率 / OEE 计算
// 输入: 班次计数器 + 停机事件 + 产线节拍
// 输出: OeeMetrics
// ==========================================
// 红线: 任何退化输入（零分母/负运行时间/未知班次）返回确定默认值,不报错
// ==========================================

use crate::domain::metrics::OeeMetrics;
use crate::domain::production::{DowntimeEvent, ProductionLine, Shift};
use crate::domain::types::ShiftFilter;
use tracing::debug;

/// 截断到 [0,1]
fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

// ==========================================
// OeeCalculator - OEE 指标计算引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
#[derive(Debug, Clone, Copy, Default)]
pub struct OeeCalculator;

impl OeeCalculator {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 基础比率
    // ==========================================

    /// 可用率 = (计划时间 - 停机时间) / 计划时间
    ///
    /// 计划时间为 0 时直接返回 0（与停机时长无关）。
    pub fn availability(&self, planned_minutes: f64, downtime_minutes: f64) -> f64 {
        if planned_minutes == 0.0 {
            return 0.0;
        }

        let operating_minutes = planned_minutes - downtime_minutes;
        clamp01(operating_minutes / planned_minutes)
    }

    /// 性能率 = 实际产量 / 理论产量
    ///
    /// 理论产量 = 运行时间(分钟) / (目标节拍秒 / 60)
    ///
    /// 运行时间 <= 0（含停机超过计划时间）或节拍为 0 时返回 0。
    pub fn performance(
        &self,
        actual_quantity: f64,
        operating_minutes: f64,
        target_cycle_time_seconds: f64,
    ) -> f64 {
        if operating_minutes <= 0.0 || target_cycle_time_seconds == 0.0 {
            return 0.0;
        }

        let cycle_time_minutes = target_cycle_time_seconds / 60.0;
        let ideal_quantity = operating_minutes / cycle_time_minutes;
        if ideal_quantity == 0.0 {
            return 0.0;
        }

        clamp01(actual_quantity / ideal_quantity)
    }

    /// 良品率 = 良品数 / 实际产量
    pub fn quality(&self, good_quantity: f64, actual_quantity: f64) -> f64 {
        if actual_quantity == 0.0 {
            return 0.0;
        }

        clamp01(good_quantity / actual_quantity)
    }

    /// OEE = 可用率 × 性能率 × 良品率（不再截断）
    pub fn oee(&self, availability: f64, performance: f64, quality: f64) -> f64 {
        availability * performance * quality
    }

    // ==========================================
    // 班次级 / 汇总级
    // ==========================================

    /// 指定班次的停机总时长（分钟）
    pub fn shift_downtime(&self, shift_id: &str, events: &[DowntimeEvent]) -> f64 {
        events
            .iter()
            .filter(|e| e.shift_id == shift_id)
            .map(|e| e.duration_minutes)
            .sum()
    }

    /// 单班次指标
    ///
    /// 停机时长只统计 `shift_id` 与班次匹配的事件。
    pub fn shift_metrics(
        &self,
        shift: &Shift,
        all_events: &[DowntimeEvent],
        line: &ProductionLine,
    ) -> OeeMetrics {
        let downtime_minutes = self.shift_downtime(&shift.id, all_events);

        self.metrics_from_totals(
            shift.planned_production_time,
            downtime_minutes,
            shift.actual_quantity,
            shift.good_quantity,
            line.target_cycle_time,
        )
    }

    /// 多班次汇总指标
    ///
    /// 注意: 停机时长累加传入的全部事件，不按班次过滤；
    /// 调用方负责预先把事件限定在当前班次集合内。
    pub fn aggregate_metrics(
        &self,
        shifts: &[Shift],
        all_events: &[DowntimeEvent],
        line: &ProductionLine,
    ) -> OeeMetrics {
        let total_planned: f64 = shifts.iter().map(|s| s.planned_production_time).sum();
        let total_downtime: f64 = all_events.iter().map(|e| e.duration_minutes).sum();
        let total_actual: f64 = shifts.iter().map(|s| s.actual_quantity).sum();
        let total_good: f64 = shifts.iter().map(|s| s.good_quantity).sum();

        self.metrics_from_totals(
            total_planned,
            total_downtime,
            total_actual,
            total_good,
            line.target_cycle_time,
        )
    }

    /// 按班次筛选计算指标
    ///
    /// - `All` → 汇总全部班次
    /// - `Shift(id)` → 对应班次指标；未匹配时返回全零指标
    pub fn filtered_metrics(
        &self,
        shifts: &[Shift],
        events: &[DowntimeEvent],
        line: &ProductionLine,
        filter: &ShiftFilter,
    ) -> OeeMetrics {
        match filter {
            ShiftFilter::All => self.aggregate_metrics(shifts, events, line),
            ShiftFilter::Shift(shift_id) => match shifts.iter().find(|s| &s.id == shift_id) {
                Some(shift) => self.shift_metrics(shift, events, line),
                None => {
                    debug!(shift_id = %shift_id, "班次筛选未匹配任何班次,返回全零指标");
                    OeeMetrics::ZERO
                }
            },
        }
    }

    /// 由合计值推导四项指标（班次级与汇总级共用）
    fn metrics_from_totals(
        &self,
        planned_minutes: f64,
        downtime_minutes: f64,
        actual_quantity: f64,
        good_quantity: f64,
        target_cycle_time_seconds: f64,
    ) -> OeeMetrics {
        let operating_minutes = planned_minutes - downtime_minutes;

        let availability = self.availability(planned_minutes, downtime_minutes);
        let performance =
            self.performance(actual_quantity, operating_minutes, target_cycle_time_seconds);
        let quality = self.quality(good_quantity, actual_quantity);
        let oee = self.oee(availability, performance, quality);

        OeeMetrics {
            availability,
            performance,
            quality,
            oee,
        }
    }
}
