use crate::components::BackgroundPattern;
use crate::content::{STEPS, Section, Step};
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub navigation: Navigation,
}

/// Three-step onboarding walkthrough.
#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let (i18n, _) = use_translation();
    let get_started = props.navigation.to(ViewState::Signup);

    html! {
        <section id={Section::GettingStarted.id()} class="py-24 bg-white relative overflow-hidden">
            <BackgroundPattern />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-20">
                    <h2 class="text-sm font-bold text-gray-500 uppercase tracking-widest mb-3">
                        { i18n.t("how_it_works.eyebrow") }
                    </h2>
                    <h3 class="text-4xl md:text-5xl font-extrabold text-gray-900">
                        { i18n.t("how_it_works.title_lead") }{ " " }
                        <span class="text-gray-400">{ i18n.t("how_it_works.title_accent") }</span>
                    </h3>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        let key = |leaf: &str| format!("how_it_works.steps.{}.{leaf}", step.key);
                        html! {
                            <div key={step.key} class="relative group">
                                <div class="bg-gray-50 border border-gray-100 p-2 mb-6 group-hover:shadow-lg transition-shadow">
                                    <div class="h-56 overflow-hidden bg-white">
                                        <img
                                            src={step.image}
                                            alt={i18n.t(&key("image_alt"))}
                                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                                        />
                                    </div>
                                </div>
                                <span class="text-xs font-bold text-gray-400 uppercase tracking-widest">
                                    { i18n.t("how_it_works.step") }{ " " }{ Step::number(index) }
                                </span>
                                <h4 class="text-xl font-bold text-gray-900 mt-2">{ i18n.t(&key("title")) }</h4>
                            </div>
                        }
                    }) }
                </div>

                <div class="mt-20 text-center">
                    <button
                        class="inline-flex items-center gap-2 bg-black text-white px-10 py-4 font-bold text-lg hover:bg-gray-800 transition-all hover:-translate-y-1 shadow-xl"
                        onclick={get_started}
                    >
                        { i18n.t("how_it_works.cta") }
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                    </button>
                    <p class="mt-4 text-sm text-gray-500">{ i18n.t("how_it_works.footnote") }</p>
                </div>
            </div>
        </section>
    }
}
