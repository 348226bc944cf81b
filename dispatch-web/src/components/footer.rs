use crate::content::{FOOTER_AVATARS, Section};
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub navigation: Navigation,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let (i18n, _) = use_translation();
    let navigation = &props.navigation;
    let link = "text-gray-600 hover:text-black font-semibold transition-colors";

    html! {
        <footer class="bg-white border-t border-gray-100 pt-20 pb-10 overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-12 mb-16">
                    <div>
                        <p class="text-xl text-gray-900 font-bold mb-6 max-w-sm">{ i18n.t("footer.tagline") }</p>
                        <div class="flex items-center gap-3">
                            <div class="flex -space-x-3">
                                { for FOOTER_AVATARS.iter().map(|avatar| html! {
                                    <img
                                        key={*avatar}
                                        src={*avatar}
                                        alt=""
                                        class="w-10 h-10 rounded-full border-2 border-white object-cover"
                                    />
                                }) }
                            </div>
                            <span class="text-sm font-semibold text-gray-600">{ i18n.t("footer.active_users") }</span>
                        </div>
                    </div>
                    <nav class="flex flex-wrap md:justify-end gap-x-8 gap-y-4 items-start">
                        <a href="#features" class={link} onclick={navigation.to_section(Section::Features)}>
                            { i18n.t("footer.features") }
                        </a>
                        <a href="#getting-started" class={link} onclick={navigation.to_section(Section::GettingStarted)}>
                            { i18n.t("footer.getting_started") }
                        </a>
                        <a href="#testimonials" class={link} onclick={navigation.to_section(Section::Testimonials)}>
                            { i18n.t("footer.testimonials") }
                        </a>
                        <button class={link} onclick={navigation.to(ViewState::Contact)}>
                            { i18n.t("footer.contact") }
                        </button>
                    </nav>
                </div>
                <div class="border-t border-gray-100 pt-10">
                    <p class="text-[18vw] md:text-[12rem] font-extrabold text-gray-100 leading-none tracking-tighter select-none whitespace-nowrap">
                        { i18n.t("footer.brand") }
                        <sup class="text-2xl md:text-4xl text-gray-300 align-top">{ i18n.t("footer.trademark") }</sup>
                    </p>
                </div>
            </div>
        </footer>
    }
}
