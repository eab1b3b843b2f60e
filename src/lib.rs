// ==========================================
// 产线 OEE 效率报表 - 核心库
// ==========================================
// 职责: 生产快照 → OEE 指标 / 停机分析 / 状态分级 / 周期对比 / 导出
// 系统定位: 无状态计算核心,快照由调用方显式传入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 快照实体与结果对象
pub mod domain;

// 引擎层 - 指标计算与聚合
pub mod engine;

// 导入层 - 快照加载
pub mod importer;

// 导出层 - JSON / CSV
pub mod export;

// 配置层 - 报表配置
pub mod config;

// API 层 - 驾驶舱视图
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DowntimeType, OeeStatus, ShiftFilter, TrendDirection};

// 领域实体与结果对象
pub use domain::{
    DowntimeCategorySummary, DowntimeEvent, Metadata, OeeDelta, OeeMetrics, ParetoEntry,
    PeriodComparison, PreviousPeriod, ProductionData, ProductionLine, Shift,
};

// 引擎
pub use engine::{
    DowntimeAggregator, OeeCalculator, PeriodComparator, StatusClassifier, StatusThresholds,
};

// 导入 / 导出 / 配置
pub use config::{ConfigManager, ReportConfig};
pub use export::{ExportFormat, ExportSerializer};
pub use importer::{JsonFileSource, JsonStrSource, SnapshotSource};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardView};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "OEE Report";
