use crate::date::date_key;
use crate::models::{AdherenceFlags, CheckIn, SymptomRatings};
use chrono::{Duration, NaiveDate};

pub const SEED_DAYS: i64 = 14;

/// Demo history: the fourteen days before `today`, with a flatter first week
/// and a better second one.
pub fn seed_checkins(today: NaiveDate) -> Vec<CheckIn> {
    let start = today - Duration::days(SEED_DAYS);

    (0..SEED_DAYS)
        .map(|i| {
            let first_week = i < 7;
            let drift = if first_week { 0 } else { 1 };
            let rating = |dip: bool| (2 + drift + if dip { 0 } else { 1 }).clamp(1, 5) as i32;

            let symptoms = SymptomRatings {
                energy: rating(i % 3 == 0),
                mood: rating(i % 4 == 0),
                sleep: rating(i % 5 == 0),
                focus: rating(i % 3 == 1),
                digestion: rating(i % 6 == 0),
            };

            let adherence = if first_week {
                AdherenceFlags {
                    took_supplements: i % 3 != 0,
                    followed_diet: i % 4 != 0,
                    followed_routines: i % 2 == 0,
                }
            } else {
                AdherenceFlags {
                    took_supplements: true,
                    followed_diet: i % 6 != 0,
                    followed_routines: i % 5 != 0,
                }
            };

            CheckIn {
                date: date_key(start + Duration::days(i)),
                symptoms,
                adherence,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{baseline_average, build_snapshots, rolling_average, DEFAULT_BASELINE_DAYS};

    #[test]
    fn seed_covers_two_weeks_ending_yesterday() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let seeded = seed_checkins(today);
        assert_eq!(seeded.len(), 14);
        assert_eq!(seeded.first().unwrap().date, "2026-02-16");
        assert_eq!(seeded.last().unwrap().date, "2026-03-01");
        assert!(seeded.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn seed_is_deterministic_and_in_range() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let seeded = seed_checkins(today);
        assert_eq!(seeded, seed_checkins(today));
        assert!(
            seeded
                .iter()
                .flat_map(|c| c.symptoms.values())
                .all(|r| (1..=5).contains(&r))
        );
    }

    #[test]
    fn seeded_second_week_beats_baseline() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let snapshots = build_snapshots(&seed_checkins(today));
        let baseline = baseline_average(&snapshots, DEFAULT_BASELINE_DAYS);
        assert!(baseline > 0);
        assert!(rolling_average(&snapshots, 7) > baseline);
    }
}
