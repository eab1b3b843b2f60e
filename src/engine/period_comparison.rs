// ==========================================
// 产线 OEE 效率报表 - 周期对比引擎
// ==========================================
// 职责: 本期指标与上期基线逐项求差
// 输入: OeeMetrics + Option<PreviousPeriod>
// 输出: PeriodComparison
// ==========================================
// 红线: 无基线时输出 Unavailable,不以零差值代替
// ==========================================

use crate::domain::metrics::{ComparisonRow, OeeDelta, OeeMetrics, PeriodComparison};
use crate::domain::production::PreviousPeriod;
use crate::domain::types::TrendDirection;

#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodComparator;

impl PeriodComparator {
    pub fn new() -> Self {
        Self
    }

    /// 有符号差值（不截断）
    pub fn delta(&self, current: f64, previous: f64) -> f64 {
        current - previous
    }

    /// 与上期基线对比
    pub fn compare(
        &self,
        current: &OeeMetrics,
        previous: Option<&PreviousPeriod>,
    ) -> PeriodComparison {
        let Some(previous) = previous else {
            return PeriodComparison::Unavailable;
        };

        let deltas = OeeDelta {
            availability: self.delta(current.availability, previous.availability),
            performance: self.delta(current.performance, previous.performance),
            quality: self.delta(current.quality, previous.quality),
            oee: self.delta(current.oee, previous.total_oee),
        };

        let rows = vec![
            self.row("OEE", current.oee, previous.total_oee, deltas.oee),
            self.row(
                "Availability",
                current.availability,
                previous.availability,
                deltas.availability,
            ),
            self.row(
                "Performance",
                current.performance,
                previous.performance,
                deltas.performance,
            ),
            self.row("Quality", current.quality, previous.quality, deltas.quality),
        ];

        PeriodComparison::Available {
            description: previous.description.clone(),
            deltas,
            rows,
        }
    }

    fn row(&self, label: &str, current: f64, previous: f64, delta: f64) -> ComparisonRow {
        ComparisonRow {
            label: label.to_string(),
            current,
            previous,
            delta,
            trend: TrendDirection::from_delta(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> PreviousPeriod {
        PreviousPeriod {
            description: "Previous week average".to_string(),
            total_oee: 0.70,
            availability: 0.90,
            performance: 0.85,
            quality: 0.95,
        }
    }

    #[test]
    fn test_compare_without_baseline_is_unavailable() {
        let comparator = PeriodComparator::new();
        let result = comparator.compare(&OeeMetrics::ZERO, None);

        assert_eq!(result, PeriodComparison::Unavailable);
        assert!(result.deltas().is_none());
    }

    #[test]
    fn test_compare_signed_deltas() {
        let comparator = PeriodComparator::new();
        let current = OeeMetrics {
            availability: 0.95,
            performance: 0.80,
            quality: 0.95,
            oee: 0.95 * 0.80 * 0.95,
        };
        let previous = baseline();

        let result = comparator.compare(&current, Some(&previous));

        let deltas = result.deltas().unwrap();
        assert_eq!(deltas.availability, 0.95 - 0.90);
        assert_eq!(deltas.performance, 0.80 - 0.85);
        assert_eq!(deltas.quality, 0.0);
        assert_eq!(deltas.oee, current.oee - 0.70);
    }

    #[test]
    fn test_compare_rows_order_and_trend() {
        let comparator = PeriodComparator::new();
        let current = OeeMetrics {
            availability: 0.95,
            performance: 0.80,
            quality: 0.95,
            oee: 0.7220,
        };

        match comparator.compare(&current, Some(&baseline())) {
            PeriodComparison::Available {
                description, rows, ..
            } => {
                assert_eq!(description, "Previous week average");
                let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
                assert_eq!(labels, vec!["OEE", "Availability", "Performance", "Quality"]);
                assert_eq!(rows[0].trend, TrendDirection::Up);
                assert_eq!(rows[2].trend, TrendDirection::Down);
                assert_eq!(rows[3].trend, TrendDirection::Neutral);
            }
            PeriodComparison::Unavailable => panic!("应有对比结果"),
        }
    }

    #[test]
    fn test_delta_unclamped() {
        let comparator = PeriodComparator::new();
        assert_eq!(comparator.delta(1.5, -0.5), 2.0);
    }
}
