// ==========================================
// 产线 OEE 效率报表 - 领域类型定义
// ==========================================
// 职责: 停机类型、OEE 状态、班次筛选、趋势方向
// 红线: 封闭枚举,不使用开放字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 停机类型 (Downtime Type)
// ==========================================
// 序列化格式: lowercase (与快照 JSON 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DowntimeType {
    Planned,   // 计划停机
    Unplanned, // 非计划停机
}

impl fmt::Display for DowntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DowntimeType::Planned => write!(f, "planned"),
            DowntimeType::Unplanned => write!(f, "unplanned"),
        }
    }
}

impl FromStr for DowntimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(DowntimeType::Planned),
            "unplanned" => Ok(DowntimeType::Unplanned),
            other => Err(format!("未知停机类型: {}", other)),
        }
    }
}

// ==========================================
// OEE 状态 (OEE Status)
// ==========================================
// 三级: 世界级 / 可接受 / 需关注
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OeeStatus {
    WorldClass,     // >= 世界级阈值
    Acceptable,     // >= 最低可接受阈值
    NeedsAttention, // 低于最低阈值
}

impl OeeStatus {
    /// 展示用标签
    pub fn label(&self) -> &'static str {
        match self {
            OeeStatus::WorldClass => "World-Class",
            OeeStatus::Acceptable => "Acceptable",
            OeeStatus::NeedsAttention => "Needs Attention",
        }
    }
}

impl fmt::Display for OeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeStatus::WorldClass => write!(f, "world-class"),
            OeeStatus::Acceptable => write!(f, "acceptable"),
            OeeStatus::NeedsAttention => write!(f, "needs-attention"),
        }
    }
}

// ==========================================
// 班次筛选 (Shift Filter)
// ==========================================
// "all" 表示全部班次,其余值按班次ID匹配
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShiftFilter {
    #[default]
    All,
    Shift(String),
}

impl ShiftFilter {
    pub const ALL_KEY: &'static str = "all";

    /// 解析筛选值（空白字符串视为 all）
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == Self::ALL_KEY {
            ShiftFilter::All
        } else {
            ShiftFilter::Shift(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ShiftFilter::All)
    }
}

impl FromStr for ShiftFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShiftFilter::parse(s))
    }
}

impl fmt::Display for ShiftFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftFilter::All => write!(f, "{}", Self::ALL_KEY),
            ShiftFilter::Shift(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for ShiftFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShiftFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ShiftFilter::parse(&raw))
    }
}

// ==========================================
// 趋势方向 (Trend Direction)
// ==========================================
// 零差值视为持平
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

impl TrendDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            TrendDirection::Up
        } else if delta < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        }
    }

    /// 展示用箭头
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Neutral => "→",
        }
    }
}
