//! View switching handle passed down from the root component.

use crate::content::Section;
use crate::storage::BrowserSessionStore;
use crate::util::scroll_to_section;
use gloo_timers::future::sleep;
use shared::Router;
use shared::models::ViewState;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, events::MouseEvent};

/// Delay before scrolling to a section of a view that is still rendering.
const SECTION_SCROLL_DELAY: Duration = Duration::from_millis(80);

/// Current router plus the callback that replaces it.
///
/// Components never mutate the router in place: they compute the next
/// router and hand it back to the root, which re-renders and resets the
/// scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    router: Router,
    on_route: Callback<Router>,
}

impl Navigation {
    pub fn new(router: Router, on_route: Callback<Router>) -> Self {
        Self { router, on_route }
    }

    pub fn router(&self) -> Router {
        self.router
    }

    pub fn is_logged_in(&self) -> bool {
        self.router.is_logged_in()
    }

    /// Applies `change` to a copy of the router and publishes the result.
    pub fn update(&self, change: impl FnOnce(&mut Router)) {
        let mut next = self.router;
        change(&mut next);
        self.on_route.emit(next);
    }

    /// Publishes a router produced elsewhere, e.g. by an async flow.
    pub fn replace(&self, router: Router) {
        self.on_route.emit(router);
    }

    /// Click handler switching to `view`.
    pub fn to(&self, view: ViewState) -> Callback<MouseEvent> {
        let navigation = self.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigation.update(|router| router.navigate(view));
        })
    }

    /// Click handler scrolling to a landing section, switching to the
    /// landing view first when another view is shown.
    pub fn to_section(&self, section: Section) -> Callback<MouseEvent> {
        let navigation = self.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if navigation.router.view() == ViewState::Landing {
                scroll_to_section(section.id());
                return;
            }
            navigation.update(Router::go_home);
            spawn_local(async move {
                sleep(SECTION_SCROLL_DELAY).await;
                scroll_to_section(section.id());
            });
        })
    }

    /// Click handler ending the session.
    pub fn logout(&self) -> Callback<MouseEvent> {
        let navigation = self.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigation.update(|router| router.logout(&mut BrowserSessionStore));
        })
    }
}
