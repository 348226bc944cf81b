use crate::content::{Section, TESTIMONIALS};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

const STARS: usize = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <section id={Section::Testimonials.id()} class="py-24 bg-gray-50 overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-sm font-bold text-gray-500 uppercase tracking-widest mb-3">
                        { i18n.t("testimonials.eyebrow") }
                    </h2>
                    <h3 class="text-4xl md:text-5xl font-extrabold text-gray-900">
                        { i18n.t("testimonials.title_lead") }
                        <br />
                        <span class="text-gray-400">{ i18n.t("testimonials.title_tail") }</span>
                    </h3>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for TESTIMONIALS.iter().map(|testimonial| {
                        let key = |leaf: &str| format!("testimonials.items.{}.{leaf}", testimonial.key);
                        html! {
                            <figure
                                key={testimonial.key}
                                class="bg-white p-8 border border-gray-100 shadow-sm hover:shadow-lg transition-shadow flex flex-col"
                            >
                                <div class="flex gap-1 mb-4 text-black">
                                    { for (0..STARS).map(|_| html! {
                                        <Icon icon_id={IconId::HeroiconsSolidStar} class="w-4 h-4" />
                                    }) }
                                </div>
                                <blockquote class="text-gray-700 leading-relaxed flex-1 mb-6">
                                    { format!("\u{201c}{}\u{201d}", i18n.t(&key("quote"))) }
                                </blockquote>
                                <figcaption class="flex items-center gap-3">
                                    <img
                                        src={testimonial.avatar}
                                        alt={testimonial.name}
                                        class="w-10 h-10 rounded-full object-cover grayscale"
                                    />
                                    <div>
                                        <p class="font-bold text-gray-900 text-sm">{ testimonial.name }</p>
                                        <p class="text-xs text-gray-500">{ i18n.t(&key("role")) }</p>
                                    </div>
                                </figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
