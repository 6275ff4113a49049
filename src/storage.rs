use crate::date::is_date_key;
use crate::errors::AppError;
use crate::models::AppData;
use crate::seed::seed_checkins;
use chrono::NaiveDate;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/progress.json"))
}

/// Loads the stored history, falling back to seeded demo data when the file is
/// missing, unreadable, or holds no check-ins.
pub async fn load_data(path: &Path, today: NaiveDate) -> AppData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    };

    let before = data.checkins.len();
    data.checkins.retain(|checkin| is_date_key(&checkin.date));
    if data.checkins.len() != before {
        warn!(
            "dropped {} check-ins with malformed dates",
            before - data.checkins.len()
        );
    }

    if data.checkins.is_empty() {
        info!("no stored history, seeding demo check-ins");
        return seeded(today);
    }

    data.sort();
    data
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Forgets the stored history and returns a fresh seed. The caller persists it.
pub async fn reset_data(path: &Path, today: NaiveDate) -> Result<AppData, AppError> {
    match fs::remove_file(path).await {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    Ok(seeded(today))
}

fn seeded(today: NaiveDate) -> AppData {
    AppData {
        checkins: seed_checkins(today),
    }
}
