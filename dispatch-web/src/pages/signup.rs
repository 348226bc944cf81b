use crate::auth::SimulatedAuthenticator;
use crate::components::{AsidePanel, FormField, Spinner, StrengthLabelText, StrengthMeter};
use crate::config;
use crate::messages::localize;
use crate::navigation::Navigation;
use i18nrs::yew::use_translation;
use shared::auth::complete_signup;
use shared::models::{SignupField, SignupForm, ViewState};
use shared::validation::{FieldErrors, validate_signup};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, Properties, TargetCast, classes,
    events::{Event, MouseEvent, SubmitEvent},
    function_component, html, use_state,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    pub navigation: Navigation,
}

fn terms_class(flagged: bool) -> &'static str {
    if flagged {
        "text-red-500"
    } else {
        "text-gray-500 group-hover:text-gray-900"
    }
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let (i18n, _) = use_translation();
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::<SignupField>::new);
    let loading = use_state(|| false);
    let failed = use_state(|| false);

    let on_field = |field: SignupField| {
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

    let on_terms = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let accepted = input.checked();
            let mut next = (*form).clone();
            next.terms_accepted = accepted;
            form.set(next);
            if accepted && errors.has(SignupField::Terms) {
                let mut remaining = (*errors).clone();
                remaining.clear(SignupField::Terms);
                errors.set(remaining);
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
            let settings = config::current();
            let found = validate_signup(&form, &settings.institution_domain);
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
                let authenticator = SimulatedAuthenticator::new(&settings);
                let mut router = navigation.router();
                match complete_signup(&authenticator, &mut router, &submitted).await {
                    Ok(()) => navigation.replace(router),
                    Err(error) => {
                        log::error!("sign up failed: {error}");
                        failed.set(true);
                        loading.set(false);
                    }
                }
            });
        })
    };

    let legal_link = Callback::from(|event: MouseEvent| event.prevent_default());

    let translate = |key: &str| i18n.t(key);
    let message = |field: SignupField| {
        errors
            .get(field)
            .map(|error| localize(&translate, "signup", field.as_ref(), error))
    };
    let password_error = message(SignupField::Password);
    let terms_error = message(SignupField::Terms);
    let busy = *loading;

    html! {
        <div class="min-h-screen w-full flex bg-white animate-fade-in">
            <div class="w-full lg:w-1/2 p-8 md:p-12 lg:p-20 relative flex flex-col">
                <button
                    class="absolute top-8 left-8 p-2 hover:bg-gray-100 transition-colors group flex items-center gap-2"
                    onclick={props.navigation.to(ViewState::Landing)}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-5 h-5 text-gray-600" />
                    <span class="text-sm font-bold text-gray-600 group-hover:text-black">{ i18n.t("signup.back") }</span>
                </button>

                <div class="flex-1 flex flex-col justify-center max-w-md mx-auto w-full">
                    <h1 class="text-3xl font-extrabold text-center mb-2 tracking-tight text-black">
                        { i18n.t("signup.title") }
                    </h1>
                    <p class="text-center text-gray-500 mb-12 font-medium">{ i18n.t("signup.subtitle") }</p>

                    <form class="space-y-6" {onsubmit}>
                        <FormField
                            name="name"
                            label={i18n.t("signup.name")}
                            value={form.name.clone()}
                            on_input={on_field(SignupField::Name)}
                            placeholder={i18n.t("signup.name_placeholder")}
                            error={message(SignupField::Name)}
                            disabled={busy}
                        />
                        <FormField
                            name="email"
                            label={i18n.t("signup.email")}
                            value={form.email.clone()}
                            on_input={on_field(SignupField::Email)}
                            input_type="email"
                            placeholder={i18n.t("signup.email_placeholder")}
                            error={message(SignupField::Email)}
                            disabled={busy}
                        />
                        // The password error shares a row with the strength label.
                        <FormField
                            name="password"
                            label={i18n.t("signup.password")}
                            value={form.password.clone()}
                            on_input={on_field(SignupField::Password)}
                            input_type="password"
                            placeholder={i18n.t("signup.password_placeholder")}
                            invalid={password_error.is_some()}
                            disabled={busy}
                        >
                            <StrengthMeter password={form.password.clone()} />
                            <div class="flex justify-between mt-1">
                                if let Some(error) = password_error {
                                    <p class="text-red-500 text-xs font-medium">{ error }</p>
                                } else {
                                    <p class="text-gray-400 text-xs">{ i18n.t("signup.hint") }</p>
                                }
                                <StrengthLabelText password={form.password.clone()} />
                            </div>
                        </FormField>

                        <div class="pt-2">
                            <label class="flex items-start space-x-3 cursor-pointer group">
                                <div class="relative flex items-center">
                                    <input
                                        type="checkbox"
                                        class="peer appearance-none w-5 h-5 border border-gray-300 checked:bg-black checked:border-black transition-colors"
                                        checked={form.terms_accepted}
                                        disabled={busy}
                                        onchange={on_terms}
                                    />
                                    <span class="absolute top-0.5 left-0.5 text-white opacity-0 peer-checked:opacity-100 transition-opacity pointer-events-none">
                                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-4 h-4" />
                                    </span>
                                </div>
                                <span class={classes!("text-sm", "leading-tight", "transition-colors", terms_class(terms_error.is_some()))}>
                                    { i18n.t("signup.terms_prefix") }{ " " }
                                    <a href="#" class="underline font-bold text-black hover:text-gray-600" onclick={legal_link.clone()}>
                                        { i18n.t("signup.terms") }
                                    </a>
                                    { " " }{ i18n.t("signup.terms_and") }{ " " }
                                    <a href="#" class="underline font-bold text-black hover:text-gray-600" onclick={legal_link}>
                                        { i18n.t("signup.privacy") }
                                    </a>
                                    { "." }
                                </span>
                            </label>
                            if let Some(error) = terms_error {
                                <p class="text-red-500 text-xs mt-1 ml-8 font-medium">{ error }</p>
                            }
                        </div>

                        <button
                            type="submit"
                            disabled={busy}
                            class="w-full bg-[#1A1A1A] text-white font-extrabold tracking-tight py-5 mt-8 hover:bg-black transition-all duration-300 flex items-center justify-center group shadow-lg hover:shadow-xl disabled:opacity-70 disabled:cursor-not-allowed"
                        >
                            if busy {
                                <Spinner />
                                { i18n.t("signup.submitting") }
                            } else {
                                { i18n.t("signup.submit") }
                                <span class="inline-flex ml-2 group-hover:translate-x-1 transition-transform">
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                                </span>
                            }
                        </button>

                        if *failed {
                            <div class="bg-red-100 text-red-500 px-4 py-3 text-center text-sm font-semibold">
                                { i18n.t("signup.failed") }
                            </div>
                        }
                    </form>

                    <div class="mt-10 text-center text-sm text-gray-500 font-medium">
                        { i18n.t("signup.have_account") }{ " " }
                        <button
                            class="font-bold text-black hover:text-gray-700 transition-colors ml-1"
                            disabled={busy}
                            onclick={props.navigation.to(ViewState::Login)}
                        >
                            { i18n.t("signup.log_in") }
                        </button>
                    </div>
                </div>
            </div>

            <AsidePanel
                title={i18n.t("signup.aside_title_lead")}
                accent={i18n.t("signup.aside_title_accent")}
                body={i18n.t("signup.aside_body")}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_class() {
        assert_eq!(terms_class(true), "text-red-500");
        assert!(terms_class(false).starts_with("text-gray-500"));
    }
}
