//! Dashboard page rendering for `TrendBeacon`
//!
//! Everything here is a pure function of the data it is given: the chart
//! configuration, the trend list markup, the click-handling model and the page
//! that ties them together. No async, no I/O.

#![forbid(unsafe_code)]

pub mod chart;
pub mod error;
pub mod interactions;
pub mod page;
pub mod trends;

pub use chart::{ChartConfig, weekly_views_chart};
pub use error::{DashboardError, DashboardResult};
pub use interactions::{Display, ElementIds, Interactions, ModalOverlay, NavBar, NavItem};
pub use page::{DashboardPage, PageData};
pub use trends::{TrendContainers, TrendFragments};

/// Browser script that boots the chart and binds the click handlers
pub const DASHBOARD_JS: &str = include_str!("../assets/dashboard.js");

/// Page stylesheet
pub const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");
