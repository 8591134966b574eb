//! Follower count history and growth figures

use crate::error::TikTokResult;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";
const HOUR_FORMAT: &str = "%Y-%m-%d %H";

/// One recorded follower count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerSample {
    /// Minute the sample was taken, `%Y-%m-%d %H:%M`
    #[serde(default)]
    pub time: String,
    /// Day the sample was taken, `%Y-%m-%d`
    #[serde(default)]
    pub date: String,
    /// Follower count
    pub count: u64,
}

impl FollowerSample {
    /// Sample for `count` taken at `now`
    #[must_use]
    pub fn at(count: u64, now: NaiveDateTime) -> Self {
        Self {
            time: now.format(TIME_FORMAT).to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            count,
        }
    }

    fn hour(&self) -> Option<&str> {
        self.time.get(..13)
    }

    fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// History plus the change over the last day, week and month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowerGrowth {
    /// Every stored sample, oldest first
    pub history: Vec<FollowerSample>,
    /// Change against the newest sample at least one day old
    pub growth_today: i64,
    /// Change against the newest sample at least seven days old
    pub growth_week: i64,
    /// Change against the newest sample at least thirty days old
    pub growth_month: i64,
}

/// Add `count` to `history`, replacing the newest sample if it was taken in
/// the same hour, then drop the oldest samples beyond `limit`
pub fn record_sample(history: &mut Vec<FollowerSample>, count: u64, now: NaiveDateTime, limit: usize) {
    let sample = FollowerSample::at(count, now);
    let current_hour = now.format(HOUR_FORMAT).to_string();

    match history.last_mut() {
        Some(last) if last.hour() == Some(current_hour.as_str()) => {
            last.count = sample.count;
            last.time = sample.time;
        }
        _ => history.push(sample),
    }

    if history.len() > limit {
        history.drain(..history.len() - limit);
    }
}

/// Growth figures relative to the newest sample
///
/// Walking from newest to oldest, each sample at least 1, 7 or 30 whole days
/// before `today` sets that figure while it is still zero, so a flat stretch
/// keeps the search going into older samples. A window with no such sample
/// stays at zero, as does everything when there are fewer than two samples.
#[must_use]
pub fn compute_growth(history: Vec<FollowerSample>, today: NaiveDate) -> FollowerGrowth {
    let mut growth = [0_i64; 3];

    if let Some(latest) = history.last().filter(|_| history.len() >= 2) {
        let current = i64::try_from(latest.count).unwrap_or(i64::MAX);
        for sample in history.iter().rev() {
            let days_ago = sample.day().map_or(0, |day| (today - day).num_days());
            let delta = current - i64::try_from(sample.count).unwrap_or(i64::MAX);
            for (slot, window) in growth.iter_mut().zip([1, 7, 30]) {
                if days_ago >= window && *slot == 0 {
                    *slot = delta;
                }
            }
        }
    }

    let [today_growth, week, month] = growth;
    FollowerGrowth {
        history,
        growth_today: today_growth,
        growth_week: week,
        growth_month: month,
    }
}

/// Follower history persisted as a JSON array
#[derive(Debug, Clone)]
pub struct FollowerHistory {
    path: PathBuf,
    limit: usize,
}

impl FollowerHistory {
    /// History file at `path` keeping at most `limit` samples
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    /// File location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All samples, oldest first; empty if nothing has been recorded
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> TikTokResult<Vec<FollowerSample>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Record `count` at `now` and persist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub async fn track(&self, count: u64, now: NaiveDateTime) -> TikTokResult<Vec<FollowerSample>> {
        let mut history = self.load().await?;
        record_sample(&mut history, count, now, self.limit);

        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&history)?).await?;
        debug!(count, samples = history.len(), "Recorded follower count");
        Ok(history)
    }

    /// Growth figures as of `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn growth(&self, now: NaiveDateTime) -> TikTokResult<FollowerGrowth> {
        Ok(compute_growth(self.load().await?, now.date()))
    }
}
