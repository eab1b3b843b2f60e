// ==========================================
// 测试数据构建器 - 生产快照
// ==========================================

use oee_report::domain::{
    DowntimeEvent, DowntimeType, Metadata, PreviousPeriod, ProductionData, ProductionLine, Shift,
};

// ==========================================
// 单项实体
// ==========================================

/// 创建测试用的班次（缺陷数 = 实际 - 良品）
pub fn create_test_shift(
    id: &str,
    name: &str,
    planned: f64,
    actual: i64,
    good: i64,
) -> Shift {
    Shift {
        id: id.to_string(),
        name: name.to_string(),
        start_time: "2024-01-15T06:00:00".to_string(),
        end_time: "2024-01-15T14:00:00".to_string(),
        planned_production_time: planned,
        target_quantity: planned,
        actual_quantity: actual as f64,
        good_quantity: good as f64,
        defect_quantity: (actual - good) as f64,
    }
}

/// 创建测试用的停机事件
pub fn create_test_event(
    id: &str,
    shift_id: &str,
    category: &str,
    reason: &str,
    minutes: f64,
    downtime_type: DowntimeType,
) -> DowntimeEvent {
    DowntimeEvent {
        id: id.to_string(),
        shift_id: shift_id.to_string(),
        category: category.to_string(),
        reason: reason.to_string(),
        start_time: "2024-01-15T08:00:00".to_string(),
        end_time: "2024-01-15T09:00:00".to_string(),
        duration_minutes: minutes,
        downtime_type,
    }
}

/// 创建测试用的上期基线
pub fn create_test_previous(
    oee: f64,
    availability: f64,
    performance: f64,
    quality: f64,
) -> PreviousPeriod {
    PreviousPeriod {
        description: "Previous Week".to_string(),
        total_oee: oee,
        availability,
        performance,
        quality,
    }
}

// ==========================================
// ProductionData 构建器
// ==========================================

pub struct SnapshotBuilder {
    target_cycle_time: f64,
    shifts: Vec<Shift>,
    events: Vec<DowntimeEvent>,
    previous: Option<PreviousPeriod>,
    world_class_target: Option<f64>,
    minimum_acceptable: Option<f64>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            target_cycle_time: 60.0,
            shifts: Vec::new(),
            events: Vec::new(),
            previous: None,
            world_class_target: Some(0.85),
            minimum_acceptable: Some(0.65),
        }
    }

    pub fn cycle_time(mut self, seconds: f64) -> Self {
        self.target_cycle_time = seconds;
        self
    }

    pub fn shift(mut self, shift: Shift) -> Self {
        self.shifts.push(shift);
        self
    }

    pub fn event(mut self, event: DowntimeEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn previous(mut self, previous: PreviousPeriod) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn thresholds(mut self, world_class: Option<f64>, minimum: Option<f64>) -> Self {
        self.world_class_target = world_class;
        self.minimum_acceptable = minimum;
        self
    }

    pub fn build(self) -> ProductionData {
        ProductionData {
            production_line: ProductionLine {
                id: "line_a".to_string(),
                name: "Assembly Line A".to_string(),
                target_cycle_time: self.target_cycle_time,
                description: "Final assembly".to_string(),
            },
            shifts: self.shifts,
            downtime_events: self.events,
            previous_period: self.previous,
            metadata: Metadata {
                site: "Plant 1".to_string(),
                department: "Assembly".to_string(),
                report_date: "2024-01-15".to_string(),
                world_class_oee_target: self.world_class_target,
                minimum_acceptable_oee: self.minimum_acceptable,
            },
        }
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 固定场景
// ==========================================

/// 两班次 + 三个停机事件（其中一个归属未知班次 s9）
///
/// 汇总: 计划 960 分钟,停机 62.5 分钟,实际 700,良品 680
pub fn two_shift_snapshot() -> ProductionData {
    SnapshotBuilder::new()
        .shift(create_test_shift("s1", "Morning", 480.0, 400, 380))
        .shift(create_test_shift("s2", "Evening", 480.0, 300, 300))
        .event(create_test_event(
            "d1",
            "s1",
            "Mechanical",
            "Conveyor jam",
            30.0,
            DowntimeType::Unplanned,
        ))
        .event(create_test_event(
            "d2",
            "s2",
            "Changeover",
            "Product switch",
            12.5,
            DowntimeType::Planned,
        ))
        .event(create_test_event(
            "d3",
            "s9",
            "Electrical",
            "Power dip",
            20.0,
            DowntimeType::Unplanned,
        ))
        .previous(create_test_previous(0.65, 0.9, 0.8, 0.95))
        .build()
}
