//! Trending hashtag and sound lists

use maud::{Markup, html};
use serde::Serialize;
use trendbeacon_core::{HashtagTrend, SoundTrend, TrendDirection};

/// CSS class carried by a hashtag's growth indicator
#[must_use]
pub const fn indicator_class(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "trend-up",
        TrendDirection::Down => "trend-down",
    }
}

/// One block per hashtag: rank, name, views and growth indicator
#[must_use]
pub fn hashtag_items(hashtags: &[HashtagTrend]) -> Markup {
    html! {
        @for (index, hashtag) in hashtags.iter().enumerate() {
            div class="trend-item" {
                span class="trend-rank" { (index + 1) }
                div class="trend-info" {
                    div class="trend-name" { (hashtag.name) }
                    div class="trend-meta" { (hashtag.views) " views" }
                }
                span class={ "stat-trend " (indicator_class(hashtag.direction())) } {
                    (hashtag.growth)
                }
            }
        }
    }
}

/// One block per sound: name, artist, usage and a play icon
#[must_use]
pub fn sound_items(sounds: &[SoundTrend]) -> Markup {
    html! {
        @for sound in sounds {
            div class="trend-item" {
                div class="trend-info" {
                    div class="trend-name" { (sound.name) }
                    div class="trend-meta" { (sound.artist) " • " (sound.usage) }
                }
                i class="fas fa-play" style="font-size: 0.8rem; color: var(--text-secondary);" {}
            }
        }
    }
}

/// An element whose children are replaced wholesale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    inner_html: String,
}

impl Container {
    /// An empty container with the given element id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    /// Element id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current children as HTML
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Drop all children and insert `markup` in their place
    pub fn replace_children(&mut self, markup: Markup) {
        self.inner_html = markup.into_string();
    }
}

/// The two containers the trend populator writes into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendContainers {
    /// Hashtag list
    pub hashtags: Container,
    /// Sound list
    pub sounds: Container,
}

impl TrendContainers {
    /// Empty containers with the given ids
    pub fn new(hashtag_id: impl Into<String>, sound_id: impl Into<String>) -> Self {
        Self {
            hashtags: Container::new(hashtag_id),
            sounds: Container::new(sound_id),
        }
    }

    /// Replace both containers' children with freshly rendered lists
    pub fn populate(&mut self, hashtags: &[HashtagTrend], sounds: &[SoundTrend]) {
        self.hashtags.replace_children(hashtag_items(hashtags));
        self.sounds.replace_children(sound_items(sounds));
        tracing::debug!(
            hashtags = hashtags.len(),
            sounds = sounds.len(),
            "Populated trend lists"
        );
    }

    /// Serializable snapshot keyed by container id
    #[must_use]
    pub fn fragments(&self) -> TrendFragments {
        TrendFragments {
            hashtags: TrendFragment {
                container: self.hashtags.id().to_string(),
                html: self.hashtags.inner_html().to_string(),
            },
            sounds: TrendFragment {
                container: self.sounds.id().to_string(),
                html: self.sounds.inner_html().to_string(),
            },
        }
    }
}

/// Rendered contents of one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendFragment {
    /// Element id of the container
    pub container: String,
    /// Rendered children
    pub html: String,
}

/// Rendered contents of both trend containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendFragments {
    /// Hashtag list
    pub hashtags: TrendFragment,
    /// Sound list
    pub sounds: TrendFragment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trendbeacon_core::samples;

    fn hashtag_block(name: &str, views: &str, growth: &str) -> String {
        hashtag_items(&[HashtagTrend::new(name, views, growth)]).into_string()
    }

    #[test]
    fn test_indicator_follows_leading_plus_for_every_sample() {
        for hashtag in samples::hashtag_trends() {
            let html = hashtag_block(&hashtag.name, &hashtag.views, &hashtag.growth);
            let expected = if hashtag.growth.starts_with('+') {
                "trend-up"
            } else {
                "trend-down"
            };
            let other = if expected == "trend-up" {
                "trend-down"
            } else {
                "trend-up"
            };

            assert!(html.contains(expected), "{} should be {expected}", hashtag.name);
            assert!(!html.contains(other), "{} should not be {other}", hashtag.name);
        }
    }

    #[test]
    fn test_falling_and_rising_examples() {
        let asmr = hashtag_block("#asmr", "18.1B", "-2%");
        assert!(asmr.contains("class=\"stat-trend trend-down\""));

        let winter = hashtag_block("#wintervibes", "840M", "+45%");
        assert!(winter.contains("class=\"stat-trend trend-up\""));
    }

    #[test]
    fn test_hashtag_block_layout() {
        let html = hashtag_block("#fyp", "45.2B", "+12%");

        assert_eq!(
            html,
            "<div class=\"trend-item\"><span class=\"trend-rank\">1</span>\
             <div class=\"trend-info\"><div class=\"trend-name\">#fyp</div>\
             <div class=\"trend-meta\">45.2B views</div></div>\
             <span class=\"stat-trend trend-up\">+12%</span></div>"
        );
    }

    #[test]
    fn test_ranks_are_one_based_and_sequential() {
        let html = hashtag_items(&samples::hashtag_trends()).into_string();

        for rank in 1..=5 {
            assert!(html.contains(&format!("<span class=\"trend-rank\">{rank}</span>")));
        }
        assert!(!html.contains("<span class=\"trend-rank\">0</span>"));
        assert!(!html.contains("<span class=\"trend-rank\">6</span>"));
    }

    #[test]
    fn test_sound_block_layout() {
        let html = sound_items(&[SoundTrend::new("Nature Sounds", "Zen Vibes", "210K posts")])
            .into_string();

        assert!(html.contains("<div class=\"trend-name\">Nature Sounds</div>"));
        assert!(html.contains("<div class=\"trend-meta\">Zen Vibes • 210K posts</div>"));
        assert!(html.contains("<i class=\"fas fa-play\""));
        assert!(!html.contains("trend-rank"));
    }

    #[test]
    fn test_interpolated_text_is_escaped() {
        let html = hashtag_block("<script>", "1", "+1%");

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_populate_is_idempotent() {
        let hashtags = samples::hashtag_trends();
        let sounds = samples::sound_trends();
        let mut containers = TrendContainers::new("hashtag-trends", "sound-trends");

        containers.populate(&hashtags, &sounds);
        let first = containers.clone();
        containers.populate(&hashtags, &sounds);

        assert_eq!(containers, first);
        assert_eq!(
            containers.hashtags.inner_html().matches("trend-item").count(),
            5
        );
        assert_eq!(containers.sounds.inner_html().matches("trend-item").count(), 4);
    }

    #[test]
    fn test_fragments_carry_container_ids() {
        let mut containers = TrendContainers::new("hashtag-trends", "sound-trends");
        containers.populate(&samples::hashtag_trends(), &samples::sound_trends());

        let fragments = containers.fragments();
        assert_eq!(fragments.hashtags.container, "hashtag-trends");
        assert_eq!(fragments.sounds.container, "sound-trends");
        assert_eq!(fragments.hashtags.html, containers.hashtags.inner_html());
    }
}
