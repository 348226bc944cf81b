use crate::auth::SimulatedAuthenticator;
use crate::components::{AsidePanel, FormField, Spinner};
use crate::config;
use crate::messages::localize;
use crate::navigation::Navigation;
use crate::storage::BrowserSessionStore;
use i18nrs::yew::use_translation;
use shared::SessionStore;
use shared::auth::complete_login;
use shared::models::{LoginField, LoginForm, ViewState};
use shared::validation::{FieldErrors, validate_login};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, Properties, TargetCast,
    events::{Event, MouseEvent, SubmitEvent},
    function_component, html, use_state,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub navigation: Navigation,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let (i18n, _) = use_translation();
    let form = use_state(|| LoginForm::remembered(BrowserSessionStore.remembered_email()));
    let errors = use_state(FieldErrors::<LoginField>::new);
    let loading = use_state(|| false);
    let failed = use_state(|| false);

    let on_field = |field: LoginField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.has(field) {
                let mut remaining = (*errors).clone();
                remaining.clear(field);
                errors.set(remaining);
            }
        })
    };

    let on_remember = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.remember_me = input.checked();
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let failed = failed.clone();
        let navigation = props.navigation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let found = validate_login(&form);
            if !found.is_valid() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            failed.set(false);
            loading.set(true);

            let submitted = (*form).clone();
            let loading = loading.clone();
            let failed = failed.clone();
            let navigation = navigation.clone();
            spawn_local(async move {
                let authenticator = SimulatedAuthenticator::new(&config::current());
                let mut router = navigation.router();
                let outcome = complete_login(
                    &authenticator,
                    &mut BrowserSessionStore,
                    &mut router,
                    &submitted,
                )
                .await;
                match outcome {
                    Ok(()) => navigation.replace(router),
                    Err(error) => {
                        log::error!("sign in failed: {error}");
                        failed.set(true);
                        loading.set(false);
                    }
                }
            });
        })
    };

    let forgot_password = Callback::from(|event: MouseEvent| event.prevent_default());

    let translate = |key: &str| i18n.t(key);
    let message = |field: LoginField| {
        errors
            .get(field)
            .map(|error| localize(&translate, "login", field.as_ref(), error))
    };
    let busy = *loading;

    html! {
        <div class="min-h-screen w-full flex bg-white animate-fade-in">
            <div class="w-full lg:w-1/2 p-8 md:p-12 lg:p-20 relative flex flex-col">
                <button
                    class="absolute top-8 left-8 p-2 hover:bg-gray-100 transition-colors group flex items-center gap-2"
                    onclick={props.navigation.to(ViewState::Landing)}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-5 h-5 text-gray-600" />
                    <span class="text-sm font-bold text-gray-600 group-hover:text-black">{ i18n.t("login.back") }</span>
                </button>

                <div class="flex-1 flex flex-col justify-center max-w-md mx-auto w-full">
                    <h1 class="text-3xl font-extrabold text-center mb-2 tracking-tight text-black">
                        { i18n.t("login.title") }
                    </h1>
                    <p class="text-center text-gray-500 mb-12 font-medium">{ i18n.t("login.subtitle") }</p>

                    <form class="space-y-8" {onsubmit}>
                        <FormField
                            name="email"
                            label={i18n.t("login.email")}
                            value={form.email.clone()}
                            on_input={on_field(LoginField::Email)}
                            input_type="email"
                            placeholder={i18n.t("login.email_placeholder")}
                            error={message(LoginField::Email)}
                            disabled={busy}
                        />
                        <FormField
                            name="password"
                            label={i18n.t("login.password")}
                            value={form.password.clone()}
                            on_input={on_field(LoginField::Password)}
                            input_type="password"
                            placeholder={i18n.t("login.password_placeholder")}
                            error={message(LoginField::Password)}
                            disabled={busy}
                        />

                        <div class="flex items-center justify-between text-sm pt-2">
                            <label class="flex items-center space-x-2 cursor-pointer group">
                                <input
                                    type="checkbox"
                                    class="accent-black w-4 h-4 border-gray-300 focus:ring-0"
                                    checked={form.remember_me}
                                    disabled={busy}
                                    onchange={on_remember}
                                />
                                <span class="text-gray-500 font-medium group-hover:text-gray-900 transition-colors">
                                    { i18n.t("login.remember_me") }
                                </span>
                            </label>
                            <button
                                type="button"
                                class="font-bold text-gray-900 hover:text-gray-600 transition-colors"
                                disabled={busy}
                                onclick={forgot_password}
                            >
                                { i18n.t("login.forgot_password") }
                            </button>
                        </div>

                        <button
                            type="submit"
                            disabled={busy}
                            class="w-full bg-[#1A1A1A] text-white font-extrabold tracking-tight py-5 mt-8 hover:bg-black transition-all duration-300 flex items-center justify-center group shadow-lg hover:shadow-xl disabled:opacity-70 disabled:cursor-not-allowed"
                        >
                            if busy {
                                <Spinner />
                                { i18n.t("login.submitting") }
                            } else {
                                { i18n.t("login.submit") }
                                <span class="inline-flex ml-2 group-hover:translate-x-1 transition-transform">
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                                </span>
                            }
                        </button>

                        if *failed {
                            <div class="bg-red-100 text-red-500 px-4 py-3 text-center text-sm font-semibold">
                                { i18n.t("login.failed") }
                            </div>
                        }
                    </form>

                    <div class="mt-10 text-center text-sm text-gray-500 font-medium">
                        { i18n.t("login.no_account") }{ " " }
                        <button
                            class="font-bold text-black hover:text-gray-700 transition-colors ml-1"
                            disabled={busy}
                            onclick={props.navigation.to(ViewState::Signup)}
                        >
                            { i18n.t("login.sign_up") }
                        </button>
                    </div>
                </div>
            </div>

            <AsidePanel
                title={i18n.t("login.aside_title_lead")}
                accent={i18n.t("login.aside_title_accent")}
                body={i18n.t("login.aside_body")}
            />
        </div>
    }
}
