// ==========================================
// 集成测试共享辅助模块
// ==========================================

#![allow(dead_code)]

pub mod snapshot_builder;

pub use snapshot_builder::*;
