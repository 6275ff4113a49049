use crate::date::{date_key, days_between, format_pretty};
use crate::models::{AppData, DashboardResponse, HistoryPoint, Phase, Snapshot};
use crate::scoring::{
    baseline_average, build_snapshots, improvement_percentage, rolling_average,
    DEFAULT_BASELINE_DAYS,
};
use chrono::{Local, NaiveDate};

pub const ROLLING_WINDOW: usize = 7;
pub const TREND_DAYS: usize = 14;
pub const HISTORY_ROWS: usize = 14;

pub fn build_dashboard(data: &AppData) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), data)
}

pub fn build_dashboard_at(today: NaiveDate, data: &AppData) -> DashboardResponse {
    let today = date_key(today);
    let snapshots = build_snapshots(&data.checkins);

    let baseline = baseline_average(&snapshots, DEFAULT_BASELINE_DAYS);
    let rolling = rolling_average(&snapshots, ROLLING_WINDOW);
    let trend_start = snapshots.len().saturating_sub(TREND_DAYS);

    DashboardResponse {
        day_index: day_index(&snapshots, &today),
        has_today: data.has_date(&today),
        snapshot_count: snapshots.len(),
        rolling_average: rolling,
        baseline_average: baseline,
        baseline_ready: snapshots.len() >= DEFAULT_BASELINE_DAYS,
        improvement_percentage: improvement_percentage(rolling.into(), baseline.into()),
        trend: snapshots[trend_start..].iter().map(|s| s.daily_score).collect(),
        today,
    }
}

pub fn build_history(data: &AppData) -> Vec<HistoryPoint> {
    build_history_at(Local::now().date_naive(), data)
}

/// Most recent days first. Phase follows position in the whole history, so the
/// first [`DEFAULT_BASELINE_DAYS`] recorded days are always the baseline.
pub fn build_history_at(today: NaiveDate, data: &AppData) -> Vec<HistoryPoint> {
    let today = date_key(today);
    build_snapshots(&data.checkins)
        .into_iter()
        .enumerate()
        .rev()
        .take(HISTORY_ROWS)
        .map(|(idx, snapshot)| HistoryPoint {
            pretty_date: format_pretty(&snapshot.date).unwrap_or_else(|_| snapshot.date.clone()),
            is_today: snapshot.date == today,
            phase: if idx < DEFAULT_BASELINE_DAYS {
                Phase::Baseline
            } else {
                Phase::PostBaseline
            },
            daily_score: snapshot.daily_score,
            date: snapshot.date,
        })
        .collect()
}

fn day_index(snapshots: &[Snapshot], today: &str) -> i64 {
    snapshots
        .first()
        .and_then(|first| days_between(&first.date, today).ok())
        .map_or(1, |days| days + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdherenceFlags, CheckIn, SymptomRatings};
    use crate::seed::seed_checkins;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn checkin(date: &str, rating: i32) -> CheckIn {
        CheckIn {
            date: date.to_string(),
            symptoms: SymptomRatings::uniform(rating),
            adherence: AdherenceFlags::all(true),
        }
    }

    #[test]
    fn empty_history_has_sentinel_values() {
        let dashboard = build_dashboard_at(today(), &AppData::default());
        assert_eq!(dashboard.today, "2026-10-14");
        assert_eq!(dashboard.day_index, 1);
        assert!(!dashboard.has_today);
        assert_eq!(dashboard.rolling_average, 0);
        assert_eq!(dashboard.baseline_average, 0);
        assert!(!dashboard.baseline_ready);
        assert_eq!(dashboard.improvement_percentage, 0);
        assert!(dashboard.trend.is_empty());
        assert!(build_history_at(today(), &AppData::default()).is_empty());
    }

    #[test]
    fn short_history_has_rolling_but_no_baseline() {
        let mut data = AppData::default();
        data.upsert(checkin("2026-10-12", 5));
        data.upsert(checkin("2026-10-14", 1));

        let dashboard = build_dashboard_at(today(), &data);
        assert_eq!(dashboard.day_index, 3);
        assert!(dashboard.has_today);
        assert_eq!(dashboard.rolling_average, 65);
        assert_eq!(dashboard.baseline_average, 0);
        assert!(!dashboard.baseline_ready);
        assert_eq!(dashboard.improvement_percentage, 0);
        assert_eq!(dashboard.trend, vec![100, 30]);
    }

    #[test]
    fn seeded_history_dashboard() {
        let data = AppData {
            checkins: seed_checkins(today()),
        };
        let dashboard = build_dashboard_at(today(), &data);
        assert_eq!(dashboard.day_index, 15);
        assert!(!dashboard.has_today);
        assert!(dashboard.baseline_ready);
        assert_eq!(dashboard.trend.len(), TREND_DAYS);
        assert_eq!(dashboard.snapshot_count, 14);
        assert!(dashboard.improvement_percentage > 0);
    }

    #[test]
    fn trend_is_capped_to_recent_days() {
        let mut data = AppData {
            checkins: seed_checkins(today()),
        };
        data.upsert(checkin("2026-10-14", 5));
        let dashboard = build_dashboard_at(today(), &data);
        assert_eq!(dashboard.trend.len(), TREND_DAYS);
        assert_eq!(dashboard.trend.last(), Some(&100));
        assert_eq!(dashboard.snapshot_count, 15);
    }

    #[test]
    fn history_is_newest_first_with_phases() {
        let mut data = AppData {
            checkins: seed_checkins(today()),
        };
        data.upsert(checkin("2026-10-14", 5));

        let history = build_history_at(today(), &data);
        assert_eq!(history.len(), HISTORY_ROWS);
        assert_eq!(history[0].date, "2026-10-14");
        assert_eq!(history[0].pretty_date, "Oct 14");
        assert!(history[0].is_today);
        assert_eq!(history[0].daily_score, 100);
        assert_eq!(history[0].phase, Phase::PostBaseline);
        assert!(history.iter().skip(1).all(|row| !row.is_today));

        // 15 days recorded: the oldest shown row is the second baseline day.
        let oldest = history.last().unwrap();
        assert_eq!(oldest.date, "2026-10-01");
        assert_eq!(oldest.phase, Phase::Baseline);
        let baseline_rows = history.iter().filter(|row| row.phase == Phase::Baseline).count();
        assert_eq!(baseline_rows, 6);
    }
}
