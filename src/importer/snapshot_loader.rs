// ==========================================
// 产线 OEE 效率报表 - 快照加载器
// ==========================================
// 支持: JSON 文件 / JSON 字符串
// ==========================================

use crate::domain::production::ProductionData;
use crate::importer::error::{SnapshotError, SnapshotResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

// ==========================================
// SnapshotSource Trait
// ==========================================
// 用途: 快照来源接口
// 实现者: JsonFileSource, JsonStrSource
pub trait SnapshotSource: Send + Sync {
    /// 读取一份完整快照
    fn load(&self) -> SnapshotResult<ProductionData>;
}

// ==========================================
// JSON 文件来源
// ==========================================
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> SnapshotResult<ProductionData> {
        let path = self.path.as_path();

        // 检查文件存在
        if !path.exists() {
            return Err(SnapshotError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "json" {
            return Err(SnapshotError::UnsupportedFormat(ext));
        }

        let raw = fs::read_to_string(path)?;
        let data: ProductionData = serde_json::from_str(&raw)?;

        info!(
            line = %data.production_line.id,
            shifts = data.shifts.len(),
            events = data.downtime_events.len(),
            "快照加载完成"
        );
        Ok(data)
    }
}

// ==========================================
// JSON 字符串来源（内嵌数据 / 测试）
// ==========================================
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    raw: String,
}

impl JsonStrSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl SnapshotSource for JsonStrSource {
    fn load(&self) -> SnapshotResult<ProductionData> {
        Ok(serde_json::from_str(&self.raw)?)
    }
}
