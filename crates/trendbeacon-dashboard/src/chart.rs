//! Performance chart configuration
//!
//! The structures here mirror the subset of the Chart.js configuration schema
//! the dashboard uses and serialise to it directly (camelCase keys). Drawing is
//! left to the charting library in the browser.
//!
//! A canvas gradient cannot be written as JSON, so the fill is serialised as a
//! [`LinearGradient`] descriptor that the page script turns into a real
//! `CanvasGradient` before constructing the chart.

use serde::Serialize;
use trendbeacon_core::WeeklySeries;

/// Brand accent used for the line and points
pub const ACCENT: &str = "#FE2C55";

/// Tick label colour on both axes
pub const TICK_COLOR: &str = "#A9A9A9";

/// Horizontal gridline colour
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";

/// Height in pixels over which the fill fades out
pub const GRADIENT_HEIGHT: f64 = 400.0;

/// Top-level chart configuration handed to the charting library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Chart type
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Categories and series
    pub data: ChartData,
    /// Display options
    pub options: ChartOptions,
}

/// Supported chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart
    Line,
}

/// Categories and series of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// X-axis category labels
    pub labels: Vec<String>,
    /// Data series
    pub datasets: Vec<Dataset>,
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series name
    pub label: String,
    /// Values, one per category
    pub data: Vec<u64>,
    /// Line colour
    pub border_color: String,
    /// Line width in pixels
    pub border_width: u32,
    /// Area fill under the line
    pub background_color: Fill,
    /// Whether the area under the line is filled
    pub fill: bool,
    /// Bezier curve tension
    pub tension: f64,
    /// Point fill colour
    pub point_background_color: String,
    /// Point outline colour
    pub point_border_color: String,
    /// Point radius on hover
    pub point_hover_radius: u32,
}

/// A fill is either a plain colour or a gradient descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    /// CSS colour string
    Color(String),
    /// Gradient the page script materialises on the canvas
    Gradient(LinearGradient),
}

/// Marker for the gradient descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientKind {
    /// `createLinearGradient`
    LinearGradient,
}

/// Arguments for `CanvasRenderingContext2D.createLinearGradient` plus stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    /// Descriptor tag
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Start x
    pub x0: f64,
    /// Start y
    pub y0: f64,
    /// End x
    pub x1: f64,
    /// End y
    pub y1: f64,
    /// Colour stops, offsets in `0.0..=1.0`
    pub stops: Vec<ColorStop>,
}

/// A gradient colour stop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    /// Position along the gradient
    pub offset: f64,
    /// CSS colour string
    pub color: String,
}

/// Chart-wide display options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Resize with the container
    pub responsive: bool,
    /// Keep the canvas aspect ratio
    pub maintain_aspect_ratio: bool,
    /// Plugin options
    pub plugins: Plugins,
    /// Axis options
    pub scales: Scales,
}

/// Plugin options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugins {
    /// Legend plugin
    pub legend: Legend,
}

/// Legend options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Whether the legend is drawn
    pub display: bool,
}

/// Axis options keyed by axis id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    /// Value axis
    pub y: Axis,
    /// Category axis
    pub x: Axis,
}

/// Options for one axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Start the value range at zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    /// Gridline options
    pub grid: Grid,
    /// Tick label options
    pub ticks: Ticks,
}

/// Gridline options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    /// Whether gridlines are drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// Gridline colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Tick label options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticks {
    /// Label colour
    pub color: String,
}

/// Vertical fade from translucent accent to transparent
#[must_use]
pub fn accent_fade() -> LinearGradient {
    LinearGradient {
        kind: GradientKind::LinearGradient,
        x0: 0.0,
        y0: 0.0,
        x1: 0.0,
        y1: GRADIENT_HEIGHT,
        stops: vec![
            ColorStop {
                offset: 0.0,
                color: "rgba(254, 44, 85, 0.3)".to_string(),
            },
            ColorStop {
                offset: 1.0,
                color: "rgba(254, 44, 85, 0.0)".to_string(),
            },
        ],
    }
}

/// Line chart of daily views for one week
#[must_use]
pub fn weekly_views_chart(series: &WeeklySeries) -> ChartConfig {
    let labels = series.labels().into_iter().map(String::from).collect();
    let data = series.points().map(|point| point.views).collect();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Views".to_string(),
                data,
                border_color: ACCENT.to_string(),
                border_width: 3,
                background_color: Fill::Gradient(accent_fade()),
                fill: true,
                tension: 0.4,
                point_background_color: ACCENT.to_string(),
                point_border_color: "#fff".to_string(),
                point_hover_radius: 6,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend { display: false },
            },
            scales: Scales {
                y: Axis {
                    begin_at_zero: Some(true),
                    grid: Grid {
                        display: None,
                        color: Some(GRID_COLOR.to_string()),
                    },
                    ticks: Ticks {
                        color: TICK_COLOR.to_string(),
                    },
                },
                x: Axis {
                    begin_at_zero: None,
                    grid: Grid {
                        display: Some(false),
                        color: None,
                    },
                    ticks: Ticks {
                        color: TICK_COLOR.to_string(),
                    },
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use trendbeacon_core::samples;

    #[test]
    fn test_chart_has_seven_ordered_labels_and_points() {
        let chart = weekly_views_chart(&samples::weekly_views());

        assert_eq!(
            chart.data.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(chart.data.datasets.len(), 1);
        assert_eq!(
            chart.data.datasets[0].data,
            vec![12_000, 19_000, 15_000, 25_000, 22_000, 30_000, 45_000]
        );
    }

    #[test]
    fn test_chart_json_matches_library_schema() {
        let chart = weekly_views_chart(&samples::weekly_views());
        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["options"]["scales"]["y"]["grid"]["color"], GRID_COLOR);
        assert_eq!(value["options"]["scales"]["x"]["grid"], json!({ "display": false }));
        assert_eq!(value["options"]["scales"]["x"]["ticks"]["color"], TICK_COLOR);
        assert!(value["options"]["scales"]["x"].get("beginAtZero").is_none());

        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["borderColor"], ACCENT);
        assert_eq!(dataset["borderWidth"], 3);
        assert_eq!(dataset["pointHoverRadius"], 6);
        assert_eq!(dataset["fill"], true);
    }

    #[test]
    fn test_gradient_descriptor_shape() {
        let value = serde_json::to_value(Fill::Gradient(accent_fade())).unwrap();

        assert_eq!(value["type"], "linearGradient");
        assert_eq!(value["y1"], 400.0);
        assert_eq!(value["stops"][0]["color"], "rgba(254, 44, 85, 0.3)");
        assert_eq!(value["stops"][1]["offset"], 1.0);
    }

    #[test]
    fn test_solid_fill_is_plain_string() {
        let value = serde_json::to_value(Fill::Color("#000".to_string())).unwrap();
        assert_eq!(value, json!("#000"));
    }

    proptest! {
        #[test]
        fn prop_any_week_yields_seven_points(views in proptest::array::uniform7(any::<u64>())) {
            let chart = weekly_views_chart(&WeeklySeries::new(views));

            prop_assert_eq!(chart.data.labels.len(), 7);
            prop_assert_eq!(&chart.data.datasets[0].data, &views.to_vec());
        }
    }
}
