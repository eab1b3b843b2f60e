// ==========================================
// 产线 OEE 效率报表 - API 层
// ==========================================
// 职责: 提供驾驶舱视图与导出接口,供 CLI 或上层界面调用
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{
    DashboardApi, DashboardView, DowntimeOverview, FormattedMetrics, ShiftMetricsView,
    ShiftOption, ALL_SHIFTS_LABEL,
};
pub use error::{ApiError, ApiResult};
