// ==========================================
// 产线 OEE 效率报表 - 停机聚合引擎
// ==========================================
// 职责: 停机事件分类汇总、时长排名、按类型/班次筛选、帕累托分析
// 输入: 停机事件列表（只读）
// 输出: 分类汇总 / 排名结果 / 过滤结果
// ==========================================
// 红线: 排名与过滤不修改输入,相同时长保持原始相对顺序（稳定排序）
// 红线: 分类按首次出现顺序聚合,类型取首个事件（不做多数表决）
// ==========================================

use crate::domain::metrics::{DowntimeCategorySummary, ParetoEntry};
use crate::domain::production::DowntimeEvent;
use crate::domain::types::DowntimeType;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;


/// 默认排名条数
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// 按时长降序比较（NaN 视为相等,交由稳定排序保序）
fn by_duration_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// ==========================================
// DowntimeAggregator - 停机聚合引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DowntimeAggregator;

impl DowntimeAggregator {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 分类汇总
    // ==========================================

    /// 按分类聚合停机事件
    ///
    /// 结果顺序 = 分类首次出现顺序。同一分类后续事件只累加时长与次数，
    /// 记录的类型保持首个事件的类型。
    ///
    /// 混合类型分类（既有计划又有非计划）会静默保留首个类型，
    /// 仅输出 debug 日志，待业务确认是否为数据质量问题。
    pub fn by_category(&self, events: &[DowntimeEvent]) -> Vec<DowntimeCategorySummary> {
        let mut summaries: Vec<DowntimeCategorySummary> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for event in events {
            match index.get(event.category.as_str()).copied() {
                Some(pos) => {
                    let summary = &mut summaries[pos];
                    summary.total_duration_minutes += event.duration_minutes;
                    summary.event_count += 1;

                    if summary.downtime_type != event.downtime_type {
                        debug!(
                            category = %event.category,
                            kept = %summary.downtime_type,
                            ignored = %event.downtime_type,
                            "分类内停机类型不一致,保留首个事件类型"
                        );
                    }
                }
                None => {
                    index.insert(event.category.as_str(), summaries.len());
                    summaries.push(DowntimeCategorySummary {
                        category: event.category.clone(),
                        total_duration_minutes: event.duration_minutes,
                        event_count: 1,
                        downtime_type: event.downtime_type,
                    });
                }
            }
        }

        summaries
    }

    // ==========================================
    // 排名
    // ==========================================

    /// 时长最长的前 `limit` 个停机事件
    pub fn top_reasons(&self, events: &[DowntimeEvent], limit: usize) -> Vec<DowntimeEvent> {
        let mut ranked = events.to_vec();
        ranked.sort_by(|a, b| by_duration_desc(a.duration_minutes, b.duration_minutes));
        ranked.truncate(limit);
        ranked
    }

    /// 累计时长最长的前 `limit` 个停机分类
    pub fn top_categories(
        &self,
        events: &[DowntimeEvent],
        limit: usize,
    ) -> Vec<DowntimeCategorySummary> {
        let mut ranked = self.ranked_categories(events);
        ranked.truncate(limit);
        ranked
    }

    /// 帕累托分析: 分类按时长降序,附占比与累计占比
    ///
    /// 没有停机时长时返回空列表。
    pub fn pareto(&self, events: &[DowntimeEvent]) -> Vec<ParetoEntry> {
        let ranked = self.ranked_categories(events);
        let total: f64 = ranked.iter().map(|c| c.total_duration_minutes).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut cumulative_pct = 0.0;
        ranked
            .into_iter()
            .map(|summary| {
                let share_pct = summary.total_duration_minutes / total * 100.0;
                cumulative_pct += share_pct;
                ParetoEntry {
                    summary,
                    share_pct,
                    cumulative_pct,
                }
            })
            .collect()
    }

    fn ranked_categories(&self, events: &[DowntimeEvent]) -> Vec<DowntimeCategorySummary> {
        let mut ranked = self.by_category(events);
        ranked.sort_by(|a, b| by_duration_desc(a.total_duration_minutes, b.total_duration_minutes));
        ranked
    }

    // ==========================================
    // 过滤 / 合计
    // ==========================================

    /// 按停机类型过滤（保持原顺序）
    pub fn by_type(
        &self,
        events: &[DowntimeEvent],
        downtime_type: DowntimeType,
    ) -> Vec<DowntimeEvent> {
        events
            .iter()
            .filter(|e| e.downtime_type == downtime_type)
            .cloned()
            .collect()
    }

    /// 按班次过滤（保持原顺序）
    pub fn by_shift(&self, shift_id: &str, events: &[DowntimeEvent]) -> Vec<DowntimeEvent> {
        events
            .iter()
            .filter(|e| e.shift_id == shift_id)
            .cloned()
            .collect()
    }

    /// 按多个班次过滤（保持原顺序）
    pub fn by_shifts(&self, shift_ids: &[&str], events: &[DowntimeEvent]) -> Vec<DowntimeEvent> {
        events
            .iter()
            .filter(|e| shift_ids.contains(&e.shift_id.as_str()))
            .cloned()
            .collect()
    }

    /// 停机总时长（分钟）
    pub fn total_minutes(&self, events: &[DowntimeEvent]) -> f64 {
        events.iter().map(|e| e.duration_minutes).sum()
    }
}
