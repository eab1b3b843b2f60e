// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试目标: 快照文件 → 配置 → 驾驶舱视图 的完整链路
// ==========================================

mod helpers;

use helpers::*;
use oee_report::api::{ApiError, DashboardApi, ALL_SHIFTS_LABEL};
use oee_report::config::{ConfigError, ConfigManager};
use oee_report::domain::{OeeStatus, ShiftFilter};
use oee_report::importer::{JsonFileSource, SnapshotError, SnapshotSource};
use oee_report::logging;
use std::io::Write;
use tempfile::Builder;

const SNAPSHOT_JSON: &str = r#"{
  "productionLine": {
    "id": "line_a",
    "name": "Assembly Line A",
    "targetCycleTime": 60,
    "description": "Final assembly"
  },
  "shifts": [
    {"id": "s1", "name": "Morning", "startTime": "06:00", "endTime": "14:00",
     "plannedProductionTime": 480, "targetQuantity": 480, "actualQuantity": 400,
     "goodQuantity": 380, "defectQuantity": 20},
    {"id": "s2", "name": "Evening", "startTime": "14:00", "endTime": "22:00",
     "plannedProductionTime": 480, "targetQuantity": 480, "actualQuantity": 300,
     "goodQuantity": 300, "defectQuantity": 0}
  ],
  "downtimeEvents": [
    {"id": "d1", "shiftId": "s1", "category": "Mechanical", "reason": "Conveyor jam",
     "startTime": "08:00", "endTime": "08:30", "durationMinutes": 30, "type": "unplanned"},
    {"id": "d2", "shiftId": "s2", "category": "Changeover", "reason": "Product switch",
     "startTime": "15:00", "endTime": "15:12", "durationMinutes": 12.5, "type": "planned"},
    {"id": "d3", "shiftId": "s9", "category": "Electrical", "reason": "Power dip",
     "startTime": "23:00", "endTime": "23:20", "durationMinutes": 20, "type": "unplanned"}
  ],
  "previousPeriod": {"description": "Previous Week", "totalOEE": 0.65,
                     "availability": 0.9, "performance": 0.8, "quality": 0.95},
  "metadata": {"site": "Plant 1", "department": "Assembly", "reportDate": "2024-01-15",
               "worldClassOEETarget": 0.85, "minimumAcceptableOEE": 0.65}
}"#;

fn write_snapshot_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_file_snapshot_matches_builder_snapshot() {
    logging::init_test();
    let file = write_snapshot_file(SNAPSHOT_JSON);

    let loaded = JsonFileSource::new(file.path()).load().unwrap();
    let built = two_shift_snapshot();

    assert_eq!(loaded.shifts.len(), built.shifts.len());
    assert_eq!(loaded.downtime_events.len(), built.downtime_events.len());
    assert_eq!(loaded.previous_period, built.previous_period);

    let api = DashboardApi::default();
    let from_file = api.build_view(Some(&loaded), &ShiftFilter::All).unwrap();
    let from_builder = api.build_view(Some(&built), &ShiftFilter::All).unwrap();
    assert_eq!(from_file.metrics, from_builder.metrics);
}

#[test]
fn test_build_view_all_shifts() {
    logging::init_test();
    let data = two_shift_snapshot();
    let api = DashboardApi::default();

    let view = api.build_view(Some(&data), &ShiftFilter::All).unwrap();

    assert_eq!(view.line_name, "Assembly Line A");
    assert_eq!(view.formatted.oee, "70.8%");
    assert_eq!(view.status, OeeStatus::Acceptable);
    assert!(view.comparison.is_available());

    assert_eq!(view.downtime.total_minutes, 62.5);
    assert_eq!(view.downtime.total_display, "1h 2.5m");
    assert_eq!(view.downtime.planned_minutes, 12.5);
    assert_eq!(view.downtime.top_reasons.len(), 3);
    assert_eq!(view.downtime.pareto.len(), 3);

    let labels: Vec<&str> = view.shift_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec![ALL_SHIFTS_LABEL, "Morning", "Evening"]);
    assert_eq!(view.shift_options[0].value, "all");

    let statuses: Vec<OeeStatus> = view.shift_metrics.iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![OeeStatus::Acceptable, OeeStatus::NeedsAttention]);
}

#[test]
fn test_build_view_unknown_shift() {
    let data = two_shift_snapshot();
    let api = DashboardApi::default();

    let view = api
        .build_view(Some(&data), &ShiftFilter::parse("night"))
        .unwrap();

    assert_eq!(view.metrics.oee, 0.0);
    assert_eq!(view.status, OeeStatus::NeedsAttention);
    assert!(view.downtime.top_reasons.is_empty());
    assert!(view.downtime.pareto.is_empty());
    assert_eq!(view.downtime.total_display, "0m");
    // 班次列表不受筛选影响
    assert_eq!(view.shift_metrics.len(), 2);
}

#[test]
fn test_build_view_without_snapshot() {
    let api = DashboardApi::default();

    let result = api.build_view(None, &ShiftFilter::All);

    assert!(matches!(result, Err(ApiError::SnapshotUnavailable(_))));
}

#[test]
fn test_config_file_drives_view() {
    let mut config_file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        config_file,
        r#"{{"top_n": 1, "percentage_decimals": 2, "world_class_threshold": 0.7}}"#
    )
    .unwrap();
    let config = ConfigManager::load_from(config_file.path()).unwrap();
    assert_eq!(config.config().top_n, 1);

    let data = two_shift_snapshot();
    let view = DashboardApi::new(config)
        .build_view(Some(&data), &ShiftFilter::All)
        .unwrap();

    assert_eq!(view.formatted.oee, "70.83%");
    assert_eq!(view.status, OeeStatus::WorldClass);
    assert_eq!(view.downtime.top_reasons.len(), 1);
    assert_eq!(view.downtime.top_categories.len(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config_file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        config_file,
        r#"{{"world_class_threshold": 0.5, "minimum_threshold": 0.8}}"#
    )
    .unwrap();

    let result = ConfigManager::load_from(config_file.path());

    assert!(matches!(result, Err(ConfigError::ConfigValueError { .. })));
}

#[test]
fn test_malformed_snapshot_file() {
    let file = write_snapshot_file("{\"productionLine\": ");

    let result = JsonFileSource::new(file.path()).load();

    assert!(matches!(result, Err(SnapshotError::JsonParseError { .. })));
}

#[test]
fn test_snapshot_error_converts_to_api_error() {
    let result = JsonFileSource::new("/nonexistent/snapshot.json").load();
    let err: ApiError = result.unwrap_err().into();

    assert!(matches!(err, ApiError::Snapshot(SnapshotError::FileNotFound(_))));
}
