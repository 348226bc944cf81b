use crate::api::GeminiClient;
use crate::components::{AsidePanel, FormField, Spinner};
use crate::config;
use crate::navigation::Navigation;
use gloo_timers::future::sleep;
use i18nrs::yew::use_translation;
use shared::models::{ContactField, ContactForm, ContactStatus, ViewState};
use shared::support::{TicketCheck, check_ticket};
use shared::validation::FieldErrors;
use std::time::Duration;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, Properties, UseStateHandle, events::SubmitEvent, function_component, html,
    use_state,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub navigation: Navigation,
}

pub fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        ContactField::Name | ContactField::Message => "text",
    }
}

/// Runs a submitted ticket through validation, classification and the
/// simulated delivery, driving the status banner as it goes.
async fn submit_ticket(
    ticket: ContactForm,
    form: UseStateHandle<ContactForm>,
    errors: UseStateHandle<FieldErrors<ContactField>>,
    status: UseStateHandle<ContactStatus>,
) {
    let settings = config::current();
    let client = GeminiClient::shared();

    match check_ticket(&client, &settings.model, &ticket).await {
        Ok(TicketCheck::Invalid(found)) => {
            log::debug!("contact form rejected with {} missing fields", found.len());
            errors.set(found);
            status.set(ContactStatus::Error);
        }
        Ok(TicketCheck::Accepted(sentiment)) => {
            if let Some(sentiment) = sentiment {
                log::debug!("ticket sentiment: {sentiment}");
            }
            sleep(Duration::from_millis(settings.contact_delivery_ms)).await;
            status.set(ContactStatus::Success);
            form.set(ContactForm::default());
            sleep(Duration::from_millis(settings.status_reset_ms)).await;
            status.set(ContactStatus::Idle);
        }
        Err(error) => {
            log::error!("failed to classify support ticket: {error}");
            status.set(ContactStatus::Error);
        }
    }
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let (i18n, _) = use_translation();
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::<ContactField>::new);
    let status = use_state(ContactStatus::default);

    let on_field = |field: ContactField| {
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

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if status.is_busy() {
                return;
            }
            status.set(ContactStatus::Submitting);
            errors.set(FieldErrors::new());
            spawn_local(submit_ticket(
                (*form).clone(),
                form.clone(),
                errors.clone(),
                status.clone(),
            ));
        })
    };

    let busy = status.is_busy();

    html! {
        <div class="min-h-screen w-full flex bg-white">
            <div class="w-full lg:w-1/2 p-8 md:p-12 lg:p-20 relative flex flex-col">
                <button
                    class="absolute top-8 left-8 p-2 hover:bg-gray-100 transition-colors"
                    aria-label={i18n.t("contact.back")}
                    onclick={props.navigation.to(ViewState::Landing)}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-6 h-6 text-gray-600" />
                </button>

                <div class="flex-1 flex flex-col justify-center max-w-md mx-auto w-full">
                    <h1 class="text-3xl font-extrabold text-center mb-12 tracking-tight text-black">
                        { i18n.t("contact.title") }
                    </h1>

                    <form class="space-y-8" {onsubmit}>
                        { for ContactField::iter().map(|field| html! {
                            <FormField
                                key={field.to_string()}
                                name={field.to_string()}
                                label={i18n.t(&format!("contact.{field}"))}
                                value={form.value(field).to_string()}
                                on_input={on_field(field)}
                                input_type={input_type(field)}
                                invalid={errors.has(field)}
                                disabled={busy}
                                multiline={field == ContactField::Message}
                            />
                        }) }

                        <button
                            type="submit"
                            disabled={busy}
                            class="w-full bg-[#1A1A1A] text-white font-extrabold tracking-tight py-4 mt-4 hover:bg-black transition-all duration-300 disabled:opacity-70 disabled:cursor-not-allowed flex items-center justify-center"
                        >
                            if busy {
                                <Spinner />
                                { i18n.t("contact.sending") }
                            } else {
                                { i18n.t("contact.send") }
                            }
                        </button>

                        if *status == ContactStatus::Error {
                            <div class="bg-red-100 text-red-500 px-4 py-3 text-center text-sm font-semibold">
                                { i18n.t("contact.error") }
                            </div>
                        }
                        if *status == ContactStatus::Success {
                            <div class="bg-green-100 text-green-600 px-4 py-3 text-center text-sm font-semibold">
                                { i18n.t("contact.success") }
                            </div>
                        }
                    </form>
                </div>
            </div>

            <AsidePanel title={i18n.t("contact.aside_title")} body={i18n.t("contact.aside_body")} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_types() {
        assert_eq!(input_type(ContactField::Email), "email");
        assert_eq!(input_type(ContactField::Phone), "tel");
        assert_eq!(input_type(ContactField::Name), "text");
    }

    #[test]
    fn test_every_field_has_a_label() {
        let table: serde_json::Value =
            serde_json::from_str(include_str!("../../translations/en.json")).unwrap();
        for field in ContactField::iter() {
            assert!(
                table["contact"][field.to_string()].is_string(),
                "missing label for {field}"
            );
        }
    }
}
