//! Modal and navigation behaviour
//!
//! These types define how the page reacts to clicks. The page script mirrors
//! them one to one, reading element ids from [`ElementIds`] so there is a
//! single definition of which element does what.

use crate::error::{DashboardError, DashboardResult};
use serde::Serialize;

/// Ids of the elements the page script binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIds {
    /// Canvas the chart is drawn on
    pub chart_canvas: String,
    /// Container for the hashtag list
    pub hashtag_container: String,
    /// Container for the sound list
    pub sound_container: String,
    /// Button that opens the modal
    pub connect_button: String,
    /// Modal backdrop
    pub modal_overlay: String,
    /// Modal body inside the backdrop
    pub modal_content: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            chart_canvas: "performanceChart".to_string(),
            hashtag_container: "hashtag-trends".to_string(),
            sound_container: "sound-trends".to_string(),
            connect_button: "connectBtn".to_string(),
            modal_overlay: "connectModal".to_string(),
            modal_content: "connectModalContent".to_string(),
        }
    }
}

impl ElementIds {
    fn roles(&self) -> [(&'static str, &str); 6] {
        [
            ("chart canvas", self.chart_canvas.as_str()),
            ("hashtag container", self.hashtag_container.as_str()),
            ("sound container", self.sound_container.as_str()),
            ("connect button", self.connect_button.as_str()),
            ("modal overlay", self.modal_overlay.as_str()),
            ("modal content", self.modal_content.as_str()),
        ]
    }

    /// Check every id is usable and unique
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id, an id containing whitespace, or two
    /// roles sharing an id.
    pub fn validate(&self) -> DashboardResult<()> {
        let roles = self.roles();
        for (index, &(role, id)) in roles.iter().enumerate() {
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(DashboardError::InvalidElementId {
                    role,
                    id: id.to_string(),
                });
            }
            if let Some(&(other, _)) = roles
                .iter()
                .skip(index + 1)
                .find(|&&(_, other_id)| other_id == id)
            {
                return Err(DashboardError::DuplicateElementId {
                    id: id.to_string(),
                    first: role,
                    second: other,
                });
            }
        }
        Ok(())
    }
}

/// CSS `display` values the overlay toggles between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Hidden
    None,
    /// Shown as a flex container
    Flex,
}

impl Display {
    /// CSS keyword
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flex => "flex",
        }
    }
}

/// Modal overlay with backdrop dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOverlay {
    element_id: String,
    display: Display,
}

impl ModalOverlay {
    /// A hidden overlay bound to `element_id`
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            display: Display::None,
        }
    }

    /// Current display value
    #[must_use]
    pub const fn display(&self) -> Display {
        self.display
    }

    /// Whether the overlay is shown
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display == Display::Flex
    }

    /// Show the overlay
    pub fn open(&mut self) {
        self.display = Display::Flex;
    }

    /// Click listener on the overlay; descendant clicks bubble up to it
    ///
    /// Only a click whose target is the overlay itself closes it; clicks on
    /// the modal content target a descendant and leave it open. Returns
    /// whether the click dismissed the overlay.
    pub fn on_backdrop_click(&mut self, target_id: &str) -> bool {
        if target_id == self.element_id && self.is_visible() {
            self.display = Display::None;
            true
        } else {
            false
        }
    }
}

/// A navigation entry keyed by a stable identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Stable key rendered as `data-tab`
    pub key: String,
    /// Visible text
    pub label: String,
    /// Font Awesome icon class
    pub icon: String,
    /// Whether the item carries the `active` class
    pub active: bool,
}

impl NavItem {
    /// An inactive item
    pub fn new(key: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: icon.into(),
            active: false,
        }
    }
}

/// The navigation list and its active state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    items: Vec<NavItem>,
}

impl NavBar {
    /// Build a navigation bar; keys compare case-insensitively and must be
    /// unique under that comparison
    ///
    /// # Errors
    ///
    /// Returns an error if two items share a key.
    pub fn new(items: Vec<NavItem>) -> DashboardResult<Self> {
        for (index, item) in items.iter().enumerate() {
            if items
                .iter()
                .skip(index + 1)
                .any(|other| other.key.eq_ignore_ascii_case(&item.key))
            {
                return Err(DashboardError::DuplicateNavKey(item.key.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The dashboard's standard sections, first one active
    #[must_use]
    pub fn standard() -> Self {
        let mut items = vec![
            NavItem::new("dashboard", "Dashboard", "fa-chart-line"),
            NavItem::new("analytics", "Analytics", "fa-chart-pie"),
            NavItem::new("trends", "Trends", "fa-fire"),
            NavItem::new("content", "Content", "fa-video"),
            NavItem::new("settings", "Settings", "fa-gear"),
        ];
        if let Some(first) = items.first_mut() {
            first.active = true;
        }
        Self { items }
    }

    /// Items in display order
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Keys of the active items
    #[must_use]
    pub fn active_keys(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.key.as_str())
            .collect()
    }

    /// Clear every item's active state, then activate the item whose key
    /// matches `tab_id`. Cosmetic only: no view changes. Returns whether an
    /// item matched.
    pub fn switch_tab(&mut self, tab_id: &str) -> bool {
        let mut matched = false;
        for item in &mut self.items {
            item.active = item.key.eq_ignore_ascii_case(tab_id);
            matched |= item.active;
        }
        tracing::info!(tab = tab_id, matched, "Switching to {tab_id} view");
        matched
    }
}

/// All click handling for one page
#[derive(Debug, Clone)]
pub struct Interactions {
    ids: ElementIds,
    /// Connect dialog
    pub modal: ModalOverlay,
    /// Navigation list
    pub nav: NavBar,
}

impl Interactions {
    /// Wire handlers to the given elements
    ///
    /// # Errors
    ///
    /// Returns an error if the element ids are invalid.
    pub fn new(ids: ElementIds, nav: NavBar) -> DashboardResult<Self> {
        ids.validate()?;
        let modal = ModalOverlay::new(ids.modal_overlay.clone());
        Ok(Self { ids, modal, nav })
    }

    /// Element ids in use
    #[must_use]
    pub const fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Deliver a click on `target_id`: the element's own listener runs first,
    /// then the event bubbles to the overlay listener
    pub fn click(&mut self, target_id: &str) {
        if target_id == self.ids.connect_button {
            self.modal.open();
        }
        self.modal.on_backdrop_click(target_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn interactions() -> Interactions {
        Interactions::new(ElementIds::default(), NavBar::standard()).unwrap()
    }

    #[test]
    fn test_modal_starts_hidden() {
        let page = interactions();
        assert_eq!(page.modal.display(), Display::None);
        assert!(!page.modal.is_visible());
    }

    #[test]
    fn test_open_then_backdrop_click_hides() {
        let mut page = interactions();

        page.click("connectBtn");
        assert_eq!(page.modal.display(), Display::Flex);

        page.click("connectModal");
        assert_eq!(page.modal.display(), Display::None);
    }

    #[test]
    fn test_click_inside_content_keeps_modal_open() {
        let mut page = interactions();

        page.click("connectBtn");
        page.click("connectModalContent");
        assert!(page.modal.is_visible());

        page.click("hashtag-trends");
        assert!(page.modal.is_visible());
    }

    #[test]
    fn test_backdrop_click_when_hidden_is_noop() {
        let mut modal = ModalOverlay::new("connectModal");
        assert!(!modal.on_backdrop_click("connectModal"));
        assert_eq!(modal.display(), Display::None);
    }

    #[test]
    fn test_display_css_keywords() {
        assert_eq!(Display::None.as_css(), "none");
        assert_eq!(Display::Flex.as_css(), "flex");
    }

    #[rstest]
    #[case("trends", vec!["trends"])]
    #[case("ANALYTICS", vec!["analytics"])]
    #[case("settings", vec!["settings"])]
    fn test_switch_tab_activates_exactly_one(#[case] tab: &str, #[case] expected: Vec<&str>) {
        let mut nav = NavBar::standard();

        assert!(nav.switch_tab(tab));
        assert_eq!(nav.active_keys(), expected);
    }

    #[rstest]
    #[case("reports")]
    #[case("")]
    #[case("trend")]
    fn test_switch_tab_without_match_clears_all(#[case] tab: &str) {
        let mut nav = NavBar::standard();

        assert!(!nav.switch_tab(tab));
        assert!(nav.active_keys().is_empty());
    }

    #[test]
    fn test_switch_tab_folds_ascii_only() {
        let mut nav = NavBar::new(vec![
            NavItem::new("état", "État", "fa-chart-line"),
            NavItem::new("trends", "Trends", "fa-fire"),
        ])
        .unwrap();

        assert!(!nav.switch_tab("ÉTAT"));
        assert!(nav.active_keys().is_empty());
        assert!(nav.switch_tab("éTAT"));
        assert_eq!(nav.active_keys(), vec!["état"]);
    }

    #[test]
    fn test_switch_tab_ignores_visible_text() {
        let mut nav = NavBar::new(vec![
            NavItem::new("home", "Trends overview", "fa-house"),
            NavItem::new("trends", "Hot", "fa-fire"),
        ])
        .unwrap();

        nav.switch_tab("trends");
        assert_eq!(nav.active_keys(), vec!["trends"]);
    }

    #[test]
    fn test_nav_rejects_duplicate_keys() {
        let result = NavBar::new(vec![
            NavItem::new("trends", "Trends", "fa-fire"),
            NavItem::new("Trends", "More trends", "fa-fire"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            DashboardError::DuplicateNavKey("trends".to_string())
        );
    }

    #[test]
    fn test_element_ids_reject_duplicates() {
        let ids = ElementIds {
            modal_content: "connectModal".to_string(),
            ..ElementIds::default()
        };

        assert!(matches!(
            ids.validate(),
            Err(DashboardError::DuplicateElementId { .. })
        ));
    }

    #[test]
    fn test_element_ids_reject_blank() {
        let ids = ElementIds {
            connect_button: "connect btn".to_string(),
            ..ElementIds::default()
        };

        assert!(matches!(
            Interactions::new(ids, NavBar::standard()),
            Err(DashboardError::InvalidElementId {
                role: "connect button",
                ..
            })
        ));
    }
}
