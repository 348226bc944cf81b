use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or(false)]
    pub active: bool,
}

#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let (i18n, _) = use_translation();

    if !props.active {
        return Html::default();
    }

    html! {
        <div class="flex justify-start">
            <div class="bg-white border border-gray-100 px-5 py-3 shadow-sm flex items-center space-x-2">
                <span class="inline-flex animate-spin text-gray-400">
                    <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-4 h-4" />
                </span>
                <span class="text-gray-400 text-sm">{ i18n.t("chat.thinking") }</span>
            </div>
        </div>
    }
}
