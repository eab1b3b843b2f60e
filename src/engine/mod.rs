// ==========================================
// 产线 OEE 效率报表 - 引擎层
// ==========================================
// 职责: 指标计算、停机聚合、状态分级、周期对比、展示格式化
// 红线: 引擎均为无状态纯函数,不做 I/O,不缓存
// ==========================================

pub mod downtime;
pub mod formatter;
pub mod oee_calculator;
pub mod period_comparison;
pub mod status;

// 重导出核心引擎
pub use downtime::{DowntimeAggregator, DEFAULT_TOP_LIMIT};
pub use oee_calculator::OeeCalculator;
pub use period_comparison::PeriodComparator;
pub use status::{StatusClassifier, StatusThresholds};
