use crate::components::BackgroundPattern;
use crate::content::{FEATURES, Feature, Section};
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub navigation: Navigation,
}

fn card_span(feature: &Feature) -> &'static str {
    if feature.wide { "md:col-span-7" } else { "md:col-span-5" }
}

fn title_size(feature: &Feature) -> &'static str {
    if feature.wide { "text-2xl" } else { "text-xl" }
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let (i18n, _) = use_translation();
    let try_now = props.navigation.to(ViewState::Signup);

    html! {
        <section id={Section::Features.id()} class="py-24 bg-gray-50 relative overflow-hidden">
            <BackgroundPattern />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-12 gap-12 items-end mb-16">
                    <div class="lg:col-span-7">
                        <h2 class="text-sm font-bold text-gray-500 uppercase tracking-widest mb-3">
                            { i18n.t("features.eyebrow") }
                        </h2>
                        <h3 class="text-4xl md:text-5xl font-extrabold text-gray-900 mb-6 leading-tight">
                            { i18n.t("features.title_lead") }
                            <br />
                            <span class="text-gray-400">{ i18n.t("features.title_tail") }</span>
                        </h3>
                        <p class="text-lg text-gray-600 leading-relaxed max-w-xl">
                            { i18n.t("features.intro") }
                        </p>
                    </div>
                    <div class="lg:col-span-5 flex lg:justify-end">
                        <button
                            class="group flex items-center gap-3 bg-black text-white px-8 py-4 font-bold hover:bg-gray-800 transition-all shadow-xl"
                            onclick={try_now}
                        >
                            { i18n.t("features.try_now") }
                            <span class="inline-flex group-hover:translate-x-1 transition-transform">
                                <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                            </span>
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-12 gap-6">
                    { for FEATURES.iter().map(|feature| {
                        let key = |leaf: &str| format!("features.items.{}.{leaf}", feature.key);
                        html! {
                            <div
                                key={feature.key}
                                class={classes!(
                                    card_span(feature), "bg-white", "border", "border-gray-200",
                                    "overflow-hidden", "group", "hover:shadow-xl", "transition-all", "duration-300"
                                )}
                            >
                                <div class="h-64 md:h-80 overflow-hidden bg-gray-100">
                                    <img
                                        src={feature.image}
                                        alt={i18n.t(&key("image_alt"))}
                                        class="w-full h-full object-cover object-top group-hover:scale-105 transition-transform duration-500"
                                    />
                                </div>
                                <div class="p-8">
                                    <h4 class={classes!(title_size(feature), "font-bold", "text-gray-900", "mb-3")}>
                                        { i18n.t(&key("title")) }
                                    </h4>
                                    <p class="text-gray-600 leading-relaxed">{ i18n.t(&key("description")) }</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_cards_take_more_columns() {
        let spans: Vec<_> = FEATURES.iter().map(card_span).collect();
        assert_eq!(spans, ["md:col-span-7", "md:col-span-5", "md:col-span-5", "md:col-span-7"]);
        assert_eq!(title_size(&FEATURES[0]), "text-2xl");
        assert_eq!(title_size(&FEATURES[1]), "text-xl");
    }
}
