use crate::content::Section;
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub navigation: Navigation,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let (i18n, _) = use_translation();
    let get_started = props.navigation.to(ViewState::Signup);
    let view_features = props.navigation.to_section(Section::Features);

    html! {
        <section class="relative pt-32 pb-20 lg:pt-48 lg:pb-32 overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-full h-full z-0 pointer-events-none">
                <div class="absolute top-20 left-10 w-72 h-72 bg-gray-300 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob"></div>
                <div class="absolute top-20 right-10 w-72 h-72 bg-gray-200 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-2000"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="inline-flex items-center px-3 py-1 bg-gray-100 border border-gray-200 text-gray-800 text-xs font-semibold mb-8 animate-fade-in-up">
                    <span class="flex h-2 w-2 bg-black rounded-full mr-2"></span>
                    { i18n.t("hero.badge") }
                </div>

                <h1 class="text-5xl md:text-7xl font-extrabold tracking-tight text-gray-900 mb-8 leading-tight max-w-4xl mx-auto">
                    { i18n.t("hero.title_lead") }{ " " }
                    <span class="text-gray-500">{ i18n.t("hero.title_accent") }</span>
                    <br class="hidden md:block" />
                    { " " }{ i18n.t("hero.title_tail") }
                </h1>

                <p class="mt-4 text-xl text-gray-600 max-w-2xl mx-auto mb-12 leading-relaxed">
                    { i18n.t("hero.subtitle") }
                </p>

                <div class="flex flex-col sm:flex-row justify-center gap-4 mb-20">
                    <button
                        class="px-8 py-4 bg-black text-white font-bold text-lg hover:bg-gray-800 transition-all hover:-translate-y-1 shadow-xl flex items-center justify-center gap-2 group"
                        onclick={get_started}
                    >
                        { i18n.t("hero.get_started") }
                        <span class="inline-flex group-hover:translate-x-1 transition-transform">
                            <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                        </span>
                    </button>
                    <button
                        class="px-8 py-4 bg-white text-gray-900 border border-gray-200 font-bold text-lg hover:bg-gray-50 hover:border-gray-300 transition-all flex items-center justify-center"
                        onclick={view_features}
                    >
                        { i18n.t("hero.view_features") }
                    </button>
                </div>

                <DashboardPreview />
            </div>
        </section>
    }
}

/// Static mock of the student dashboard shown under the hero copy.
#[function_component(DashboardPreview)]
fn dashboard_preview() -> Html {
    let (i18n, _) = use_translation();
    let t = |key: &str| i18n.t(&format!("hero.preview.{key}"));

    let sidebar = [
        (IconId::HeroiconsOutlineHome, "dashboard", true),
        (IconId::HeroiconsOutlineCalendarDays, "schedule", false),
        (IconId::HeroiconsOutlineBookOpen, "resources", false),
        (IconId::HeroiconsOutlineChatBubbleLeftRight, "messages", false),
    ];

    html! {
        <div class="relative mx-auto max-w-6xl animate-fade-in-up animation-delay-2000">
            <div class="relative bg-white border border-gray-200 shadow-2xl overflow-hidden flex flex-col h-[500px] md:h-[700px] text-left">
                <div class="h-14 border-b border-gray-100 flex items-center px-4 justify-between bg-white z-20 relative">
                    <div class="flex items-center gap-4">
                        <div class="flex gap-1.5">
                            <div class="w-3 h-3 rounded-full bg-gray-300"></div>
                            <div class="w-3 h-3 rounded-full bg-gray-300"></div>
                            <div class="w-3 h-3 rounded-full bg-gray-300"></div>
                        </div>
                        <div class="hidden md:flex items-center gap-2 text-gray-400 bg-gray-50 px-3 py-1.5 text-xs w-64">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-3.5 h-3.5" />
                            <span>{ t("search") }</span>
                        </div>
                    </div>
                    <div class="w-8 h-8 bg-black text-white flex items-center justify-center font-bold text-xs">
                        { t("initials") }
                    </div>
                </div>

                <div class="flex flex-1 overflow-hidden">
                    <div class="w-20 md:w-64 border-r border-gray-100 bg-gray-50/50 flex flex-col py-6 px-3 md:px-4 gap-2">
                        { for sidebar.into_iter().map(|(icon, key, active)| html! {
                            <div class={if active {
                                "flex items-center gap-3 px-3 py-2.5 bg-white text-black shadow-sm border border-gray-100"
                            } else {
                                "flex items-center gap-3 px-3 py-2.5 text-gray-500"
                            }}>
                                <Icon icon_id={icon} class="w-5 h-5" />
                                <span class="hidden md:block font-semibold text-sm">{ t(key) }</span>
                            </div>
                        }) }
                        <div class="mt-auto flex items-center gap-3 px-3 py-2.5 text-gray-500">
                            <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="w-5 h-5" />
                            <span class="hidden md:block font-medium text-sm">{ t("settings") }</span>
                        </div>
                    </div>

                    <div class="flex-1 bg-white p-6 md:p-8 overflow-hidden">
                        <div class="bg-black text-white p-8 mb-8 shadow-lg">
                            <h2 class="text-2xl md:text-3xl font-bold mb-2">{ t("greeting") }</h2>
                            <p class="text-gray-300 mb-6 max-w-lg">{ t("summary") }</p>
                            <span class="inline-block bg-white text-black px-5 py-2.5 font-bold text-sm">
                                { t("view_timetable") }
                            </span>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <div class="bg-white p-6 border border-gray-100 shadow-sm">
                                <div class="flex justify-between items-start mb-4">
                                    <div class="p-2.5 bg-gray-100 text-gray-900">
                                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-5 h-5" />
                                    </div>
                                    <span class="text-xs font-bold bg-gray-100 text-gray-700 px-2 py-1">{ t("next_class_eta") }</span>
                                </div>
                                <p class="text-gray-500 text-xs font-bold uppercase tracking-wider mb-1">{ t("next_class") }</p>
                                <h3 class="text-xl font-bold text-gray-900 mb-1">{ t("course_code") }</h3>
                                <p class="text-sm text-gray-500 mb-4">{ t("course_name") }</p>
                                <div class="flex items-center gap-2 text-xs font-medium text-gray-500 bg-gray-50 p-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-3.5 h-3.5" />
                                    { t("venue") }
                                </div>
                            </div>

                            <div class="bg-white p-6 border border-gray-100 shadow-sm">
                                <div class="flex justify-between items-center mb-4">
                                    <h3 class="font-bold text-gray-900 flex items-center gap-2">
                                        <Icon icon_id={IconId::HeroiconsOutlineBell} class="w-4 h-4" />
                                        { t("notices") }
                                    </h3>
                                    <span class="text-xs text-gray-500 font-semibold">{ t("view_all") }</span>
                                </div>
                                <div class="space-y-4">
                                    <div class="flex gap-3 items-start">
                                        <div class="w-2 h-2 mt-2 rounded-full bg-gray-800 shrink-0"></div>
                                        <div>
                                            <p class="text-sm font-bold text-gray-800">{ t("exam_title") }</p>
                                            <p class="text-xs text-gray-500">{ t("exam_body") }</p>
                                        </div>
                                    </div>
                                    <div class="flex gap-3 items-start">
                                        <div class="w-2 h-2 mt-2 rounded-full bg-gray-400 shrink-0"></div>
                                        <div>
                                            <p class="text-sm font-bold text-gray-800">{ t("chapel_title") }</p>
                                            <p class="text-xs text-gray-500">{ t("chapel_body") }</p>
                                        </div>
                                    </div>
                                </div>
                            </div>

                            <div class="bg-white p-6 border border-gray-100 shadow-sm hidden md:block">
                                <div class="flex items-center gap-2 mb-4 text-gray-900">
                                    <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="w-5 h-5" />
                                    <span class="font-bold">{ t("gpa") }</span>
                                </div>
                                <div class="flex items-end gap-2">
                                    <span class="text-4xl font-extrabold text-gray-900">{ t("gpa_value") }</span>
                                    <span class="text-sm text-gray-500 mb-1">{ t("gpa_current") }</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
