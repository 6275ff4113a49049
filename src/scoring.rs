use crate::models::{CheckIn, Snapshot};

pub const DEFAULT_BASELINE_DAYS: usize = 7;

const SYMPTOM_WEIGHT: f64 = 0.7;
const ADHERENCE_WEIGHT: f64 = 0.3;

const SUPPLEMENTS_POINTS: f64 = 40.0;
const DIET_POINTS: f64 = 35.0;
const ROUTINES_POINTS: f64 = 25.0;

/// Score for a single day in `0..=100`.
///
/// Ratings outside `1..=5` are clamped rather than rejected.
pub fn daily_score(checkin: &CheckIn) -> u8 {
    let symptom = mean(checkin.symptoms.values().iter().map(|&r| symptom_points(r)));

    let flags = &checkin.adherence;
    let adherence = points_if(flags.took_supplements, SUPPLEMENTS_POINTS)
        + points_if(flags.followed_diet, DIET_POINTS)
        + points_if(flags.followed_routines, ROUTINES_POINTS);

    let blended = SYMPTOM_WEIGHT * symptom + ADHERENCE_WEIGHT * adherence;
    to_score(blended)
}

/// One snapshot per check-in, ascending by date. Duplicates are kept.
pub fn build_snapshots(checkins: &[CheckIn]) -> Vec<Snapshot> {
    let mut ordered: Vec<&CheckIn> = checkins.iter().collect();
    ordered.sort_unstable_by(|a, b| a.date.cmp(&b.date));
    ordered
        .into_iter()
        .map(|checkin| Snapshot {
            date: checkin.date.clone(),
            daily_score: daily_score(checkin),
        })
        .collect()
}

/// Mean of the most recent `window` scores, or of all of them when fewer exist.
pub fn rolling_average(snapshots: &[Snapshot], window: usize) -> u8 {
    let start = snapshots.len().saturating_sub(window);
    average_score(&snapshots[start..])
}

/// Mean of the first `days` scores; 0 until that many snapshots exist.
pub fn baseline_average(snapshots: &[Snapshot], days: usize) -> u8 {
    if snapshots.len() < days {
        return 0;
    }
    average_score(&snapshots[..days])
}

/// Signed percentage change from `baseline` to `current`; 0 when baseline is 0.
pub fn improvement_percentage(current: i64, baseline: i64) -> i64 {
    if baseline == 0 {
        return 0;
    }
    let (current, baseline) = (current as f64, baseline as f64);
    let change = (current - baseline) / baseline * 100.0;
    round_half_up(change) as i64
}

fn symptom_points(rating: i32) -> f64 {
    let rating = rating.clamp(1, 5);
    f64::from(rating - 1) / 4.0 * 100.0
}

fn points_if(flag: bool, points: f64) -> f64 {
    if flag { points } else { 0.0 }
}

fn average_score(snapshots: &[Snapshot]) -> u8 {
    to_score(mean(snapshots.iter().map(|s| f64::from(s.daily_score))))
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

// Clamped before rounding: scores stay in 0..=100 whatever the weights.
fn to_score(value: f64) -> u8 {
    round_half_up(value.clamp(0.0, 100.0)) as u8
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
