use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Spinning indicator shown inside busy buttons.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="inline-flex animate-spin mr-2">
            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5" />
        </span>
    }
}
