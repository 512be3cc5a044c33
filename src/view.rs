use crate::model::{Category, MealDetail, MealSummary};
use crate::render;

/// Which of the two content panels is shown. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Results,
    Details,
}

/// The rendered state of the page: category list, results panel, details
/// panel and which panel is visible.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    categories: String,
    results: String,
    details: String,
    panel: Panel,
}

impl ViewModel {
    pub fn categories(&self) -> &str {
        &self.categories
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn active_panel(&self) -> Panel {
        self.panel
    }

    pub fn results_visible(&self) -> bool {
        self.panel == Panel::Results
    }

    pub fn details_visible(&self) -> bool {
        self.panel == Panel::Details
    }

    /// Markup of the visible panel.
    pub fn active_markup(&self) -> &str {
        match self.panel {
            Panel::Results => &self.results,
            Panel::Details => &self.details,
        }
    }

    pub fn show_categories(&mut self, categories: &[Category]) {
        self.categories = render::render_categories(categories);
    }

    pub fn show_results_loading(&mut self) {
        self.results = render::LOADING.to_string();
        self.panel = Panel::Results;
    }

    pub fn show_results(&mut self, meals: Option<&[MealSummary]>) {
        self.results = render::render_results(meals);
        self.panel = Panel::Results;
    }

    pub fn show_details_loading(&mut self) {
        self.details = render::LOADING_DETAILS.to_string();
        self.panel = Panel::Details;
    }

    pub fn show_details(&mut self, meal: Option<&MealDetail>) {
        self.details = render::render_details(meal);
        self.panel = Panel::Details;
    }
}
