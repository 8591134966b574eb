//! Full dashboard document

use crate::chart::{ChartConfig, weekly_views_chart};
use crate::error::DashboardResult;
use crate::interactions::{ElementIds, Interactions, NavBar};
use crate::trends::TrendContainers;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use trendbeacon_core::config::DashboardConfig;
use trendbeacon_core::{HashtagTrend, SoundTrend, WeeklySeries, samples};

/// Id of the JSON island the page script boots from
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Path the page script is served under
pub const SCRIPT_PATH: &str = "/static/dashboard.js";

/// Path the stylesheet is served under
pub const STYLESHEET_PATH: &str = "/static/dashboard.css";

/// Where the connect dialog sends the user
pub const LOGIN_PATH: &str = "/login";

/// Data the page is rendered from
#[derive(Debug, Clone)]
pub struct PageData {
    /// Weekly view series for the chart
    pub series: WeeklySeries,
    /// Hashtag list
    pub hashtags: Vec<HashtagTrend>,
    /// Sound list
    pub sounds: Vec<SoundTrend>,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            series: samples::weekly_views(),
            hashtags: samples::hashtag_trends(),
            sounds: samples::sound_trends(),
        }
    }
}

/// What the page script reads on load
#[derive(Debug, Serialize)]
struct BootConfig<'a> {
    ids: &'a ElementIds,
    chart: &'a ChartConfig,
}

/// A fully populated dashboard ready to render
#[derive(Debug, Clone)]
pub struct DashboardPage {
    settings: DashboardConfig,
    interactions: Interactions,
    chart: ChartConfig,
    trends: TrendContainers,
}

impl DashboardPage {
    /// Build the chart, populate the trend lists and wire the handlers
    ///
    /// # Errors
    ///
    /// Returns an error if the element ids are invalid.
    pub fn build(settings: DashboardConfig, ids: ElementIds, data: &PageData) -> DashboardResult<Self> {
        let interactions = Interactions::new(ids, NavBar::standard())?;
        let chart = weekly_views_chart(&data.series);

        let mut trends = TrendContainers::new(
            interactions.ids().hashtag_container.as_str(),
            interactions.ids().sound_container.as_str(),
        );
        trends.populate(&data.hashtags, &data.sounds);

        Ok(Self {
            settings,
            interactions,
            chart,
            trends,
        })
    }

    /// The standard page over the sample data
    ///
    /// # Errors
    ///
    /// Returns an error if the default element ids are invalid.
    pub fn standard(settings: DashboardConfig) -> DashboardResult<Self> {
        Self::build(settings, ElementIds::default(), &PageData::default())
    }

    /// Chart configuration embedded in the page
    #[must_use]
    pub const fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    /// Populated trend containers
    #[must_use]
    pub const fn trends(&self) -> &TrendContainers {
        &self.trends
    }

    /// Element ids and handler state
    #[must_use]
    pub const fn interactions(&self) -> &Interactions {
        &self.interactions
    }

    /// JSON island contents, safe to place inside a `<script>` element
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn boot_json(&self) -> DashboardResult<String> {
        let boot = BootConfig {
            ids: self.interactions.ids(),
            chart: &self.chart,
        };
        Ok(serde_json::to_string(&boot)?.replace("</", "<\\/"))
    }

    /// Render the whole document
    ///
    /// # Errors
    ///
    /// Returns an error if the boot configuration cannot be serialised.
    pub fn render(&self) -> DashboardResult<Markup> {
        let ids = self.interactions.ids();
        let boot = self.boot_json()?;

        Ok(html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.settings.title) }
                    link rel="stylesheet" href=(self.settings.icon_stylesheet_url);
                    link rel="stylesheet" href=(STYLESHEET_PATH);
                    script src=(self.settings.chart_library_url) {}
                }
                body {
                    aside class="sidebar" {
                        div class="logo" {
                            i class="fas fa-signal" {}
                            span { (self.settings.title) }
                        }
                        nav {
                            ul class="nav-list" {
                                @for item in self.interactions.nav.items() {
                                    li class=(if item.active { "nav-item active" } else { "nav-item" })
                                        data-tab=(item.key)
                                    {
                                        i class={ "fas " (item.icon) } {}
                                        span { (item.label) }
                                    }
                                }
                            }
                        }
                    }
                    main class="content" {
                        header class="topbar" {
                            h1 { "Creator Overview" }
                            button id=(ids.connect_button) class="btn btn-primary" type="button" {
                                i class="fab fa-tiktok" {}
                                " Connect Account"
                            }
                        }
                        section class="card chart-card" {
                            div class="card-header" {
                                h2 { "Weekly Performance" }
                                span class="card-subtitle" { "Views over the last 7 days" }
                            }
                            div class="chart-container" {
                                canvas id=(ids.chart_canvas) {}
                            }
                        }
                        div class="trend-grid" {
                            section class="card" {
                                div class="card-header" { h2 { "Trending Hashtags" } }
                                div id=(self.trends.hashtags.id()) class="trend-list" {
                                    (PreEscaped(self.trends.hashtags.inner_html()))
                                }
                            }
                            section class="card" {
                                div class="card-header" { h2 { "Trending Sounds" } }
                                div id=(self.trends.sounds.id()) class="trend-list" {
                                    (PreEscaped(self.trends.sounds.inner_html()))
                                }
                            }
                        }
                    }
                    div id=(ids.modal_overlay) class="modal"
                        style={ "display: " (self.interactions.modal.display().as_css()) ";" }
                    {
                        div id=(ids.modal_content) class="modal-content" {
                            h2 { "Connect your TikTok account" }
                            p { "Link an account to replace the sample data with your own analytics." }
                            a class="btn btn-primary" href=(LOGIN_PATH) {
                                i class="fab fa-tiktok" {}
                                " Connect with TikTok"
                            }
                        }
                    }
                    script id=(CONFIG_ELEMENT_ID) type="application/json" { (PreEscaped(boot)) }
                    script src=(SCRIPT_PATH) {}
                }
            }
        })
    }
}
