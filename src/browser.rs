use crate::client::MealApi;
use crate::model::MealSummary;
use crate::view::ViewModel;
use crate::MealError;
use log::{debug, error};
use std::sync::{Mutex, MutexGuard};

/// Surfaces a failed interaction to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that only writes to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        error!("{}", message);
    }
}

/// View plus request bookkeeping. Tokens are only read or written while this
/// is locked, so checking a token and rendering its response is one step.
#[derive(Default)]
struct Page {
    view: ViewModel,
    latest: u64,
    rendered: u64,
}

impl Page {
    fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

/// Translates user gestures into catalog requests and renders the answers
/// into a [`ViewModel`].
///
/// Every interaction except loading the category list takes a fresh request
/// token. A response is applied only while its token is the latest one
/// issued, so a slow answer never overwrites the result of a later click.
pub struct MealBrowser {
    api: Box<dyn MealApi>,
    notifier: Box<dyn Notifier>,
    page: Mutex<Page>,
}

impl MealBrowser {
    pub fn new(api: Box<dyn MealApi>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            page: Mutex::new(Page::default()),
        }
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> ViewModel {
        self.lock_page().view.clone()
    }

    /// Token of the most recently issued request.
    pub fn latest_request(&self) -> u64 {
        self.lock_page().latest
    }

    /// Token of the request whose response is currently rendered, 0 if none.
    pub fn rendered_request(&self) -> u64 {
        self.lock_page().rendered
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn report(&self, err: &MealError) {
        self.notifier.notify(&format!("Error: {}", err));
    }

    /// Fetches the category list into the sidebar.
    pub async fn load_categories(&self) {
        match self.api.categories().await {
            Ok(categories) => self.lock_page().view.show_categories(&categories),
            Err(e) => self.report(&e),
        }
    }

    /// Searches meals by name. Blank input is rejected before any request.
    pub async fn search(&self, input: &str) {
        let name = input.trim();
        if name.is_empty() {
            self.notifier.notify(&MealError::EmptyQuery.to_string());
            return;
        }

        let token = self.start_results();
        let result = self.api.search_by_name(name).await;
        self.finish_results(token, result);
    }

    pub async fn random(&self) {
        let token = self.start_results();
        let result = self.api.random().await;
        self.finish_results(token, result);
    }

    pub async fn select_category(&self, category: &str) {
        let token = self.start_results();
        let result = self.api.filter_by_category(category).await;
        self.finish_results(token, result);
    }

    /// Shows the details of the meal behind a clicked card.
    pub async fn select_meal(&self, id: &str) {
        let token = {
            let mut page = self.lock_page();
            page.view.show_details_loading();
            page.issue()
        };

        let result = self.api.lookup_by_id(id).await;

        let mut page = self.lock_page();
        if !page.is_current(token) {
            debug!("Discarding stale details for meal {} (request {})", id, token);
            return;
        }
        match result {
            Ok(meal) => {
                page.view.show_details(meal.as_ref());
                page.rendered = token;
            }
            Err(e) => self.report(&e),
        }
    }

    fn start_results(&self) -> u64 {
        let mut page = self.lock_page();
        page.view.show_results_loading();
        page.issue()
    }

    fn finish_results(&self, token: u64, result: Result<Option<Vec<MealSummary>>, MealError>) {
        let mut page = self.lock_page();
        if !page.is_current(token) {
            debug!("Discarding stale results (request {})", token);
            return;
        }
        match result {
            Ok(meals) => {
                page.view.show_results(meals.as_deref());
                page.rendered = token;
            }
            Err(e) => self.report(&e),
        }
    }
}
