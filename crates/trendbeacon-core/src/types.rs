//! Dashboard data records and the sample data set

use serde::{Deserialize, Serialize};

/// Day of the week used as a chart category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Weekday {
    /// All days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Short label shown on the chart axis
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

/// A single chart series point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Day label
    pub day: Weekday,
    /// View count for that day
    pub views: u64,
}

/// View counts for one week, Monday through Sunday
///
/// Holding exactly seven values makes a short or unordered week
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySeries {
    views: [u64; 7],
}

impl WeeklySeries {
    /// Build a series from Monday-first view counts
    #[must_use]
    pub const fn new(views: [u64; 7]) -> Self {
        Self { views }
    }

    /// Points in Monday-first order
    pub fn points(&self) -> impl Iterator<Item = ChartPoint> + '_ {
        Weekday::ALL
            .iter()
            .zip(self.views.iter())
            .map(|(&day, &views)| ChartPoint { day, views })
    }

    /// Axis labels in Monday-first order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        Weekday::ALL.iter().map(|day| day.label()).collect()
    }

    /// Raw view counts in Monday-first order
    #[must_use]
    pub const fn views(&self) -> &[u64; 7] {
        &self.views
    }
}

/// Direction of a hashtag's growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Growth string starts with `+`
    Up,
    /// Anything else
    Down,
}

impl TrendDirection {
    /// Classify a signed percentage string such as `+12%` or `-2%`
    #[must_use]
    pub fn from_growth(growth: &str) -> Self {
        if growth.starts_with('+') {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// A trending hashtag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagTrend {
    /// Hashtag including the leading `#`
    pub name: String,
    /// Formatted view count, e.g. `45.2B`
    pub views: String,
    /// Signed percentage, e.g. `+12%`
    pub growth: String,
}

impl HashtagTrend {
    /// Create a hashtag record
    pub fn new(
        name: impl Into<String>,
        views: impl Into<String>,
        growth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            views: views.into(),
            growth: growth.into(),
        }
    }

    /// Whether this hashtag is rising or falling
    #[must_use]
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_growth(&self.growth)
    }
}

/// A trending sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundTrend {
    /// Track title
    pub name: String,
    /// Artist or uploader
    pub artist: String,
    /// Formatted usage count, e.g. `1.2M posts`
    pub usage: String,
}

impl SoundTrend {
    /// Create a sound record
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            usage: usage.into(),
        }
    }
}

/// The fixed data set the dashboard renders
pub mod samples {
    use super::{HashtagTrend, SoundTrend, WeeklySeries};

    /// Weekly views, Monday through Sunday
    #[must_use]
    pub const fn weekly_views() -> WeeklySeries {
        WeeklySeries::new([12_000, 19_000, 15_000, 25_000, 22_000, 30_000, 45_000])
    }

    /// Trending hashtags in rank order
    #[must_use]
    pub fn hashtag_trends() -> Vec<HashtagTrend> {
        vec![
            HashtagTrend::new("#fyp", "45.2B", "+12%"),
            HashtagTrend::new("#tiktokmademebuyit", "12.8B", "+24%"),
            HashtagTrend::new("#techhacks", "2.4B", "+8%"),
            HashtagTrend::new("#wintervibes", "840M", "+45%"),
            HashtagTrend::new("#asmr", "18.1B", "-2%"),
        ]
    }

    /// Trending sounds in rank order
    #[must_use]
    pub fn sound_trends() -> Vec<SoundTrend> {
        vec![
            SoundTrend::new("Lo-fi Beats for Studying", "Studying Girl", "1.2M posts"),
            SoundTrend::new("Happy Upbeat Theme", "StockAudio", "840K posts"),
            SoundTrend::new("Dramatic Orchestral", "Epic Scores", "420K posts"),
            SoundTrend::new("Nature Sounds", "Zen Vibes", "210K posts"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_weekly_series_labels_are_monday_first() {
        let series = samples::weekly_views();

        assert_eq!(
            series.labels(),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_weekly_series_points_pair_days_with_views() {
        let points: Vec<ChartPoint> = samples::weekly_views().points().collect();

        assert_eq!(points.len(), 7);
        assert_eq!(
            points.first(),
            Some(&ChartPoint {
                day: Weekday::Mon,
                views: 12_000
            })
        );
        assert_eq!(
            points.last(),
            Some(&ChartPoint {
                day: Weekday::Sun,
                views: 45_000
            })
        );
    }

    #[rstest]
    #[case("+12%", TrendDirection::Up)]
    #[case("+0%", TrendDirection::Up)]
    #[case("-2%", TrendDirection::Down)]
    #[case("0%", TrendDirection::Down)]
    #[case("", TrendDirection::Down)]
    fn test_direction_from_growth(#[case] growth: &str, #[case] expected: TrendDirection) {
        assert_eq!(TrendDirection::from_growth(growth), expected);
    }

    #[test]
    fn test_sample_sizes() {
        assert_eq!(samples::hashtag_trends().len(), 5);
        assert_eq!(samples::sound_trends().len(), 4);
    }

    #[test]
    fn test_sample_hashtag_directions() {
        let directions: Vec<(String, TrendDirection)> = samples::hashtag_trends()
            .into_iter()
            .map(|h| {
                let direction = h.direction();
                (h.name, direction)
            })
            .collect();

        assert!(directions.contains(&("#asmr".to_string(), TrendDirection::Down)));
        assert!(directions.contains(&("#wintervibes".to_string(), TrendDirection::Up)));
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Up).unwrap();
        assert_eq!(json, "\"up\"");
    }
}
