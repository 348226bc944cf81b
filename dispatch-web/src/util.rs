//! Browser helpers shared by pages and components.

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::pin;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Resolves to `work`'s output, or `None` when `timer` finishes first.
pub async fn race<W, T>(work: W, timer: T) -> Option<W::Output>
where
    W: Future,
    T: Future<Output = ()>,
{
    match select(pin!(work), pin!(timer)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Bounds `work` by `millis` on the browser clock.
pub async fn with_timeout<W: Future>(millis: u64, work: W) -> Option<W::Output> {
    race(work, TimeoutFuture::new(clamp_millis(millis))).await
}

/// Browser timers take a `u32` delay.
pub fn clamp_millis(millis: u64) -> u32 {
    u32::try_from(millis).unwrap_or(u32::MAX)
}

/// Jumps to the top of the page; called on every view change.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scrolls the element with `id` into view, if it is rendered.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("section #{id} is not rendered");
        return;
    };
    scroll_into_view(&element);
}

/// Smoothly scrolls `element` into view.
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
