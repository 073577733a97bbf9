//! Links between the grid, compact and gallery listing views.

use crate::app::ViewMode;
use crate::domain::FilterCriteria;
use crate::ui::helpers::view_href;
use crate::ui::viewmodel::ViewModeLink;
use crate::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeSelector {
    current: ViewMode,
    base_path: String,
}

impl ViewModeSelector {
    pub fn new(current: ViewMode, base_path: impl Into<String>) -> Self {
        Self {
            current,
            base_path: base_path.into(),
        }
    }

    /// Selector rooted at the configured listing path.
    #[must_use]
    pub fn from_config(current: ViewMode, config: &Config) -> Self {
        Self::new(current, config.base_path.clone())
    }

    #[must_use]
    pub const fn current(&self) -> ViewMode {
        self.current
    }

    /// One link per view, each keeping the current filters in its query string.
    #[must_use]
    pub fn links(&self, criteria: &FilterCriteria) -> Vec<ViewModeLink> {
        ViewMode::ALL
            .into_iter()
            .map(|view| ViewModeLink {
                view,
                label: view.label(),
                href: view_href(view, &self.base_path, criteria),
                is_current: view == self.current,
            })
            .collect()
    }
}
