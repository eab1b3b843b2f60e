// ==========================================
// 产线 OEE 效率报表 - 快照导入层
// ==========================================
// 职责: 读取生产数据快照 (JSON),交给引擎层计算
// 红线: 只做反序列化,不做数据校验/迁移/持久化
// ==========================================

pub mod error;
pub mod snapshot_loader;

// 重导出核心类型
pub use error::{SnapshotError, SnapshotResult};
pub use snapshot_loader::{JsonFileSource, JsonStrSource, SnapshotSource};
