use crate::components::BackgroundPattern;
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub navigation: Navigation,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let (i18n, _) = use_translation();
    let demo = props.navigation.to(ViewState::Signup);
    let contact = props.navigation.to(ViewState::Contact);

    html! {
        <section class="py-24 bg-black text-white relative overflow-hidden">
            <BackgroundPattern light={true} />
            <div class="absolute inset-0 opacity-10 pointer-events-none">
                <div class="absolute -top-24 -left-24 w-96 h-96 bg-white rounded-full filter blur-3xl"></div>
                <div class="absolute -bottom-24 -right-24 w-96 h-96 bg-gray-500 rounded-full filter blur-3xl"></div>
            </div>
            <div class="relative max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-4xl md:text-5xl font-extrabold mb-6 leading-tight">
                    { i18n.t("cta.title_lead") }
                    <br />
                    <span class="text-gray-400">{ i18n.t("cta.title_accent") }</span>
                </h2>
                <p class="text-lg text-gray-300 mb-10 max-w-2xl mx-auto leading-relaxed">
                    { i18n.t("cta.body") }
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <button
                        class="px-8 py-4 bg-white text-black font-bold text-lg hover:bg-gray-100 transition-all hover:-translate-y-1"
                        onclick={demo}
                    >
                        { i18n.t("cta.demo") }
                    </button>
                    <button
                        class="px-8 py-4 bg-transparent text-white border border-white/30 font-bold text-lg hover:bg-white/10 transition-all"
                        onclick={contact}
                    >
                        { i18n.t("cta.contact") }
                    </button>
                </div>
            </div>
        </section>
    }
}
