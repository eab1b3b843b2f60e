// ==========================================
// 导出层集成测试
// ==========================================
// 测试目标: 表格导出逐字节布局、结构化导出字段、落盘命名
// ==========================================

mod helpers;

use chrono::{TimeZone, Utc};
use helpers::*;
use oee_report::api::DashboardApi;
use oee_report::domain::{DowntimeType, ShiftFilter};
use oee_report::engine::OeeCalculator;
use oee_report::export::{write_export, ExportFormat, ExportSerializer};
use tempfile::TempDir;

const EXPECTED_TABULAR: &str = "\
Metric,Value,Percentage
OEE,0.7083,70.8%
Availability,0.9349,93.5%
Performance,0.7799,78.0%
Quality,0.9714,97.1%
,,
Shift,OEE,Availability,Performance,Quality
Morning,0.7917,0.9375,0.8889,0.9500
Evening,0.6250,0.9740,0.6417,1.0000
,,,,
Downtime Event,Category,Type,Duration (min),Shift
Conveyor jam,Mechanical,unplanned,30,Morning
Product switch,Changeover,planned,12.5,Evening
Power dip,Electrical,unplanned,20,s9";

#[test]
fn test_tabular_export_fixed_layout() {
    let data = two_shift_snapshot();
    let metrics = OeeCalculator::new().aggregate_metrics(
        &data.shifts,
        &data.downtime_events,
        &data.production_line,
    );

    let csv = ExportSerializer::new().to_tabular(&data, &metrics).unwrap();

    assert_eq!(csv, EXPECTED_TABULAR);
}

#[test]
fn test_tabular_midpoint_ratios_round_up() {
    // 可用率 435/480 = 0.90625,恰好落在 4 位小数中点
    let data = SnapshotBuilder::new()
        .shift(create_test_shift("s1", "Morning", 480.0, 435, 435))
        .event(create_test_event(
            "d1",
            "s1",
            "Mechanical",
            "Belt slip",
            45.0,
            DowntimeType::Unplanned,
        ))
        .build();
    let metrics = OeeCalculator::new().aggregate_metrics(
        &data.shifts,
        &data.downtime_events,
        &data.production_line,
    );

    let csv = ExportSerializer::new().to_tabular(&data, &metrics).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[1], "OEE,0.9063,90.6%");
    assert_eq!(lines[2], "Availability,0.9063,90.6%");
    assert_eq!(lines[7], "Morning,0.9063,0.9063,1.0000,1.0000");
}

#[test]
fn test_tabular_shift_rows_ignore_active_filter() {
    let data = two_shift_snapshot();
    let api = DashboardApi::default();

    let csv = api
        .export_content(Some(&data), &ShiftFilter::parse("s1"), ExportFormat::Csv)
        .unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // 汇总行按早班计算,班次行仍逐班次重算
    assert_eq!(lines[1], "OEE,0.7917,79.2%");
    assert_eq!(lines[7], "Morning,0.7917,0.9375,0.8889,0.9500");
    assert_eq!(lines[8], "Evening,0.6250,0.9740,0.6417,1.0000");
}

#[test]
fn test_structured_export_fields() {
    let data = two_shift_snapshot();
    let metrics = OeeCalculator::new().aggregate_metrics(
        &data.shifts,
        &data.downtime_events,
        &data.production_line,
    );
    let generated_at = Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap();

    let json = ExportSerializer::new()
        .to_structured_at(&data, &metrics, generated_at)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["reportDate"], "2024-01-15T18:30:00.000Z");
    assert_eq!(value["metadata"]["reportDate"], "2024-01-15");
    assert_eq!(value["productionLine"]["targetCycleTime"], 60.0);
    assert_eq!(value["shifts"].as_array().unwrap().len(), 2);
    assert_eq!(value["downtimeEvents"][1]["type"], "planned");
    assert_eq!(value["previousPeriod"]["totalOEE"], 0.65);
    assert!((value["oeeMetrics"]["oee"].as_f64().unwrap() - metrics.oee).abs() < 1e-12);
}

#[test]
fn test_structured_export_null_previous_period() {
    let data = SnapshotBuilder::new()
        .shift(create_test_shift("s1", "Morning", 480.0, 400, 400))
        .build();
    let metrics = OeeCalculator::new().aggregate_metrics(&data.shifts, &[], &data.production_line);

    let json = ExportSerializer::new().to_structured(&data, &metrics).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["previousPeriod"].is_null());
}

#[test]
fn test_export_to_dir_names_files_by_report_date() {
    let data = two_shift_snapshot();
    let api = DashboardApi::default();
    let temp_dir = TempDir::new().unwrap();

    let json_path = api
        .export_to_dir(
            Some(&data),
            &ShiftFilter::All,
            ExportFormat::Json,
            Some(temp_dir.path()),
        )
        .unwrap();
    let csv_path = api
        .export_to_dir(
            Some(&data),
            &ShiftFilter::All,
            ExportFormat::Csv,
            Some(temp_dir.path()),
        )
        .unwrap();

    assert_eq!(json_path, temp_dir.path().join("oee-dashboard-2024-01-15.json"));
    assert_eq!(csv_path, temp_dir.path().join("oee-dashboard-2024-01-15.csv"));
    assert_eq!(std::fs::read_to_string(csv_path).unwrap(), EXPECTED_TABULAR);
}

#[test]
fn test_write_export_overwrites_existing_file() {
    let data = two_shift_snapshot();
    let temp_dir = TempDir::new().unwrap();

    write_export(temp_dir.path(), &data.metadata, ExportFormat::Csv, "first").unwrap();
    let path = write_export(temp_dir.path(), &data.metadata, ExportFormat::Csv, "second").unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
}
