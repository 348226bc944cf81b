use crate::content::Section;
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::models::ViewState;
use yew::{Callback, Html, Properties, events::MouseEvent, function_component, html, use_state};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub navigation: Navigation,
}

/// Chains closing the mobile menu after `action`.
fn and_close(action: Callback<MouseEvent>, close: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        action.emit(event);
        close.emit(());
    })
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let (i18n, _) = use_translation();
    let menu_open = use_state(|| false);

    let navigation = &props.navigation;
    let go_home = navigation.to(ViewState::Landing);
    let go_features = navigation.to_section(Section::Features);
    let go_testimonials = navigation.to_section(Section::Testimonials);
    let go_contact = navigation.to(ViewState::Contact);
    let go_login = navigation.to(ViewState::Login);
    let go_signup = navigation.to(ViewState::Signup);
    let log_out = navigation.logout();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(false))
    };

    let link = "text-gray-600 hover:text-black text-sm font-bold transition-all hover:scale-105";
    let mobile_link = "block w-full text-left text-gray-600 hover:text-gray-900 hover:bg-gray-50 px-4 py-3 text-base font-semibold transition-colors";

    html! {
        <nav class="fixed w-full z-50 bg-white/70 backdrop-blur-lg border-b border-white/20 py-3">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-12">
                    <button class="flex-shrink-0 flex items-center cursor-pointer group" onclick={go_home.clone()}>
                        <span class="text-2xl font-extrabold text-gray-900 tracking-tight group-hover:text-black transition-colors">
                            { i18n.t("nav.brand") }
                        </span>
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        <a href="#" class={link} onclick={go_home.clone()}>{ i18n.t("nav.home") }</a>
                        <a href="#features" class={link} onclick={go_features.clone()}>{ i18n.t("nav.features") }</a>
                        <a href="#testimonials" class={link} onclick={go_testimonials.clone()}>{ i18n.t("nav.testimonials") }</a>
                        <button class={link} onclick={go_contact.clone()}>{ i18n.t("nav.contact") }</button>
                        <div class="flex items-center space-x-4 ml-4">
                            if navigation.is_logged_in() {
                                <div class="flex items-center space-x-2 px-3 py-1.5 bg-gray-100 rounded border border-gray-200 shadow-sm">
                                    <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-4 h-4 text-gray-600" />
                                    <span class="text-sm font-bold text-gray-900">{ i18n.t("nav.greeting") }</span>
                                </div>
                                <button class="text-gray-500 hover:text-red-600 text-sm font-bold transition-colors" onclick={log_out.clone()}>
                                    { i18n.t("nav.log_out") }
                                </button>
                            } else {
                                <button class="text-gray-900 hover:text-black text-sm font-bold hover:underline underline-offset-4" onclick={go_login.clone()}>
                                    { i18n.t("nav.log_in") }
                                </button>
                                <button class="bg-black text-white px-5 py-2.5 rounded text-sm font-bold hover:bg-gray-800 transition-all" onclick={go_signup.clone()}>
                                    { i18n.t("nav.sign_up") }
                                </button>
                            }
                        </div>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="text-gray-600 hover:text-gray-900 p-2 hover:bg-gray-100 transition-colors"
                            aria-label={i18n.t("nav.menu")}
                            onclick={toggle_menu}
                        >
                            if *menu_open {
                                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" />
                            } else {
                                <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                            }
                        </button>
                    </div>
                </div>
            </div>

            if *menu_open {
                <div class="md:hidden bg-white/95 backdrop-blur-xl border-b border-gray-100 absolute w-full shadow-xl animate-fade-in">
                    <div class="px-4 pt-2 pb-6 space-y-2">
                        <button class={mobile_link} onclick={and_close(go_home, close_menu.clone())}>{ i18n.t("nav.home") }</button>
                        <button class={mobile_link} onclick={and_close(go_features, close_menu.clone())}>{ i18n.t("nav.features") }</button>
                        <button class={mobile_link} onclick={and_close(go_testimonials, close_menu.clone())}>{ i18n.t("nav.testimonials") }</button>
                        <button class={mobile_link} onclick={and_close(go_contact, close_menu.clone())}>{ i18n.t("nav.contact") }</button>
                        <div class="border-t border-gray-100 my-2 pt-2">
                            if navigation.is_logged_in() {
                                <div class="px-4 py-2 text-sm font-bold text-gray-900 flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-4 h-4" />
                                    { i18n.t("nav.greeting") }
                                </div>
                                <button
                                    class="block w-full text-left text-red-600 hover:bg-red-50 px-4 py-3 text-base font-bold transition-colors"
                                    onclick={and_close(log_out, close_menu.clone())}
                                >
                                    { i18n.t("nav.log_out") }
                                </button>
                            } else {
                                <button
                                    class="block w-full text-center text-gray-900 hover:bg-gray-50 px-4 py-3 text-base font-bold transition-colors"
                                    onclick={and_close(go_login, close_menu.clone())}
                                >
                                    { i18n.t("nav.log_in") }
                                </button>
                                <button
                                    class="block w-full text-center bg-black text-white px-4 py-3 text-base font-bold mt-2 hover:bg-gray-800 transition-colors"
                                    onclick={and_close(go_signup, close_menu)}
                                >
                                    { i18n.t("nav.sign_up") }
                                </button>
                            }
                        </div>
                    </div>
                </div>
            }
        </nav>
    }
}
