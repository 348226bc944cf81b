use crate::navigation::Navigation;
use crate::pages::{ContactPage, LandingPage, LoginPage, SignupPage};
use crate::storage::BrowserSessionStore;
use crate::util::scroll_to_top;
use shared::Router;
use shared::models::ViewState;
use yew::{Callback, Html, function_component, html, use_state};

/// Root component: owns the router and renders the current view.
#[function_component(App)]
pub fn app() -> Html {
    let router = use_state(|| Router::restore(&BrowserSessionStore));

    let on_route = {
        let router = router.clone();
        Callback::from(move |next: Router| {
            router.set(next);
            scroll_to_top();
        })
    };

    let navigation = Navigation::new(*router, on_route);

    match router.view() {
        ViewState::Landing => html! { <LandingPage {navigation} /> },
        ViewState::Contact => html! { <ContactPage {navigation} /> },
        ViewState::Login => html! { <LoginPage {navigation} /> },
        ViewState::Signup => html! { <SignupPage {navigation} /> },
    }
}
