// ==========================================
// 产线 OEE 效率报表 - 领域模型层
// ==========================================
// 职责: 定义快照实体、计算结果对象、封闭枚举类型
// 红线: 不含计算逻辑,不含导出逻辑
// ==========================================

pub mod metrics;
pub mod production;
pub mod types;

// 重导出核心类型
pub use metrics::{
    ComparisonRow, DowntimeCategorySummary, OeeDelta, OeeMetrics, ParetoEntry, PeriodComparison,
};
pub use production::{
    DowntimeEvent, Metadata, PreviousPeriod, ProductionData, ProductionLine, Shift,
};
pub use types::{DowntimeType, OeeStatus, ShiftFilter, TrendDirection};
