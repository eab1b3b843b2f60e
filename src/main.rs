// ==========================================
// 产线 OEE 效率报表 - 命令行入口
// ==========================================
// 用法:
//   oee-report <snapshot.json> [shift-filter]
//
// shift-filter 缺省时取配置中的默认筛选（通常为 all）
// 输出: 驾驶舱摘要打印到标准输出,JSON / CSV 两份导出写入配置的导出目录
// ==========================================

use anyhow::{bail, Context};
use oee_report::api::DashboardApi;
use oee_report::config::ConfigManager;
use oee_report::domain::ShiftFilter;
use oee_report::engine::formatter;
use oee_report::export::ExportFormat;
use oee_report::importer::{JsonFileSource, SnapshotSource};
use oee_report::{logging, PeriodComparison};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        bail!("用法: oee-report <snapshot.json> [shift-filter]");
    };

    tracing::info!("{} v{}", oee_report::APP_NAME, oee_report::VERSION);

    let config = ConfigManager::load().context("加载报表配置失败")?;
    let filter = match args.next() {
        Some(raw) => ShiftFilter::parse(&raw),
        None => config.config().shift_filter.clone(),
    };
    let decimals = config.config().percentage_decimals;

    let snapshot = JsonFileSource::new(&snapshot_path)
        .load()
        .with_context(|| format!("读取快照失败: {}", snapshot_path))?;

    let api = DashboardApi::new(config);
    let view = api.build_view(Some(&snapshot), &filter)?;

    println!(
        "{} | {} / {} | {}",
        view.line_name, view.site, view.department, view.report_date
    );
    println!("Filter: {}", view.filter);
    println!(
        "OEE {} ({})  Availability {}  Performance {}  Quality {}",
        view.formatted.oee,
        view.status.label(),
        view.formatted.availability,
        view.formatted.performance,
        view.formatted.quality
    );

    if let PeriodComparison::Available {
        description, rows, ..
    } = &view.comparison
    {
        println!("vs {}:", description);
        for row in rows {
            println!(
                "  {:<12} {} {}",
                row.label,
                row.trend.arrow(),
                formatter::delta(row.delta, decimals)
            );
        }
    }

    println!("Downtime: {}", view.downtime.total_display);
    for event in &view.downtime.top_reasons {
        println!(
            "  {:<28} {:<14} {}",
            event.reason,
            event.category,
            formatter::duration(event.duration_minutes)
        );
    }

    for shift in &view.shift_metrics {
        println!(
            "  {:<12} OEE {} ({})",
            shift.shift_name,
            formatter::percentage(shift.metrics.oee, decimals),
            shift.status.label()
        );
    }

    for format in [ExportFormat::Json, ExportFormat::Csv] {
        let path = api.export_to_dir(Some(&snapshot), &filter, format, None)?;
        println!("Exported {}", path.display());
    }

    Ok(())
}
