use serde::{Deserialize, Serialize};

/// Self-reported ratings for one day, each nominally 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRatings {
    pub energy: i32,
    pub mood: i32,
    pub sleep: i32,
    pub focus: i32,
    pub digestion: i32,
}

impl SymptomRatings {
    pub fn uniform(rating: i32) -> Self {
        Self {
            energy: rating,
            mood: rating,
            sleep: rating,
            focus: rating,
            digestion: rating,
        }
    }

    pub fn values(&self) -> [i32; 5] {
        [self.energy, self.mood, self.sleep, self.focus, self.digestion]
    }
}

impl Default for SymptomRatings {
    fn default() -> Self {
        Self::uniform(3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceFlags {
    pub took_supplements: bool,
    pub followed_diet: bool,
    pub followed_routines: bool,
}

impl AdherenceFlags {
    pub fn all(value: bool) -> Self {
        Self {
            took_supplements: value,
            followed_diet: value,
            followed_routines: value,
        }
    }
}

impl Default for AdherenceFlags {
    fn default() -> Self {
        Self::all(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub date: String,
    pub symptoms: SymptomRatings,
    pub adherence: AdherenceFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub date: String,
    pub daily_score: u8,
}

/// Persisted history, kept ascending by date with one entry per date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub checkins: Vec<CheckIn>,
}

impl AppData {
    pub fn has_date(&self, date: &str) -> bool {
        self.find(date).is_some()
    }

    pub fn find(&self, date: &str) -> Option<&CheckIn> {
        self.checkins.iter().find(|checkin| checkin.date == date)
    }

    /// Replaces any check-in on the same date, then restores ascending order.
    pub fn upsert(&mut self, checkin: CheckIn) {
        self.checkins.retain(|existing| existing.date != checkin.date);
        self.checkins.push(checkin);
        self.sort();
    }

    pub fn sort(&mut self) {
        self.checkins.sort_by(|a, b| a.date.cmp(&b.date));
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub date: Option<String>,
    pub symptoms: SymptomRatings,
    pub adherence: AdherenceFlags,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub symptoms: SymptomRatings,
    #[serde(default)]
    pub adherence: AdherenceFlags,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub date: String,
    pub daily_score: u8,
}

/// HTML form body; unchecked checkboxes are simply absent.
#[derive(Debug, Deserialize)]
pub struct CheckInForm {
    pub energy: i32,
    pub mood: i32,
    pub sleep: i32,
    pub focus: i32,
    pub digestion: i32,
    pub took_supplements: Option<String>,
    pub followed_diet: Option<String>,
    pub followed_routines: Option<String>,
}

impl CheckInForm {
    pub fn into_checkin(self, date: String) -> CheckIn {
        CheckIn {
            date,
            symptoms: SymptomRatings {
                energy: self.energy,
                mood: self.mood,
                sleep: self.sleep,
                focus: self.focus,
                digestion: self.digestion,
            },
            adherence: AdherenceFlags {
                took_supplements: self.took_supplements.is_some(),
                followed_diet: self.followed_diet.is_some(),
                followed_routines: self.followed_routines.is_some(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub today: String,
    pub day_index: i64,
    pub has_today: bool,
    pub snapshot_count: usize,
    pub rolling_average: u8,
    pub baseline_average: u8,
    pub baseline_ready: bool,
    pub improvement_percentage: i64,
    pub trend: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Baseline,
    PostBaseline,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub pretty_date: String,
    pub daily_score: u8,
    pub is_today: bool,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(date: &str, rating: i32) -> CheckIn {
        CheckIn {
            date: date.to_string(),
            symptoms: SymptomRatings::uniform(rating),
            adherence: AdherenceFlags::all(false),
        }
    }

    #[test]
    fn upsert_replaces_same_date_and_keeps_order() {
        let mut data = AppData::default();
        data.upsert(checkin("2026-10-12", 2));
        data.upsert(checkin("2026-10-10", 2));
        data.upsert(checkin("2026-10-12", 5));

        assert_eq!(data.checkins.len(), 2);
        assert_eq!(data.checkins[0].date, "2026-10-10");
        assert_eq!(data.checkins[1].date, "2026-10-12");
        assert_eq!(data.find("2026-10-12").unwrap().symptoms.energy, 5);
        assert!(data.has_date("2026-10-10"));
        assert!(!data.has_date("2026-10-11"));
    }

    #[test]
    fn form_checkboxes_map_to_flags() {
        let form = CheckInForm {
            energy: 4,
            mood: 3,
            sleep: 2,
            focus: 5,
            digestion: 1,
            took_supplements: Some("on".to_string()),
            followed_diet: None,
            followed_routines: Some("on".to_string()),
        };
        let checkin = form.into_checkin("2026-10-14".to_string());
        assert_eq!(checkin.symptoms.values(), [4, 3, 2, 5, 1]);
        assert!(checkin.adherence.took_supplements);
        assert!(!checkin.adherence.followed_diet);
        assert!(checkin.adherence.followed_routines);
    }

    #[test]
    fn history_document_round_trips_through_json() {
        let mut data = AppData::default();
        data.upsert(checkin("2026-10-01", 3));
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"took_supplements\":false"));
        let parsed: AppData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.checkins, data.checkins);
    }
}
