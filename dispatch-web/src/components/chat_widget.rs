use crate::api::GeminiClient;
use crate::components::TypingIndicator;
use crate::config;
use crate::util::scroll_into_view;
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::assistant::{ChatSession, ask};
use shared::genai::{GenAiResult, GenerationResponse};
use shared::models::ChatMessage;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use yew::{
    Callback, Html, NodeRef, Reducible, TargetCast, classes,
    events::{InputEvent, KeyboardEvent, MouseEvent},
    function_component, html, use_effect_with, use_node_ref, use_reducer, use_state,
};
use yew_icons::{Icon, IconId};

/// Transcript updates applied in order, so a reply arriving after further
/// renders still lands on the latest transcript.
pub enum ChatAction {
    Ask(String),
    Reply(GenAiResult<GenerationResponse>),
}

#[derive(Debug, Default, PartialEq)]
pub struct ChatTranscript {
    session: ChatSession,
}

impl ChatTranscript {
    pub fn messages(&self) -> &[ChatMessage] {
        self.session.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }
}

impl Reducible for ChatTranscript {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            ChatAction::Ask(input) => {
                if session.begin(&input).is_none() {
                    return self;
                }
            }
            ChatAction::Reply(outcome) => session.finish(outcome),
        }
        Rc::new(Self { session })
    }
}

/// Local wall-clock time a message was appended, e.g. `14:05`.
fn sent_time(message: &ChatMessage) -> String {
    message.sent_at.with_timezone(&Local).format("%H:%M").to_string()
}

fn bubble_class(message: &ChatMessage) -> &'static str {
    if message.is_from_user() {
        "bg-black text-white"
    } else {
        "bg-white text-gray-800 border border-gray-100"
    }
}

/// Floating assistant panel pinned to the bottom-right corner.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let (i18n, _) = use_translation();
    let transcript = use_reducer(ChatTranscript::default);
    let open = use_state(|| false);
    let input = use_state(String::new);
    let end_ref = use_node_ref();

    {
        let end_ref = end_ref.clone();
        let dependencies = (transcript.messages().len(), transcript.is_pending(), *open);
        use_effect_with(dependencies, move |_| {
            scroll_to_end(&end_ref);
        });
    }

    let send = {
        let transcript = transcript.clone();
        let input = input.clone();
        Callback::from(move |()| {
            let question = (*input).clone();
            if question.trim().is_empty() || transcript.is_pending() {
                return;
            }
            input.set(String::new());
            transcript.dispatch(ChatAction::Ask(question.clone()));

            let transcript = transcript.clone();
            spawn_local(async move {
                let client = GeminiClient::shared();
                let model = config::current().model.clone();
                let outcome = ask(&client, &model, &question).await;
                transcript.dispatch(ChatAction::Reply(outcome));
            });
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };
    let on_keypress = {
        let send = send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                send.emit(());
            }
        })
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(field) = event.target_dyn_into::<HtmlInputElement>() {
                input.set(field.value());
            }
        })
    };
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let can_send = !input.trim().is_empty() && !transcript.is_pending();

    html! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end">
            if *open {
                <div class="bg-white shadow-2xl w-80 sm:w-96 mb-4 overflow-hidden border border-gray-200 flex flex-col h-[500px] animate-fade-in-up">
                    <div class="bg-black p-4 flex justify-between items-center text-white">
                        <div class="flex items-center space-x-3">
                            <div class="bg-white/10 p-1.5">
                                <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-5 h-5 text-white" />
                            </div>
                            <div>
                                <h3 class="font-bold text-sm">{ i18n.t("chat.title") }</h3>
                                <p class="text-xs text-gray-400 flex items-center">
                                    <span class="w-1.5 h-1.5 bg-green-500 rounded-full mr-1.5"></span>
                                    { i18n.t("chat.status") }
                                </p>
                            </div>
                        </div>
                        <button
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label={i18n.t("chat.minimize")}
                            onclick={toggle.clone()}
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineMinus} class="w-5 h-5" />
                        </button>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 space-y-4 bg-gray-50">
                        { for transcript.messages().iter().map(|message| html! {
                            <div
                                key={message.id.to_string()}
                                class={classes!("flex", if message.is_from_user() { "justify-end" } else { "justify-start" })}
                            >
                                <div class={classes!("max-w-[85%]", "px-4", "py-3", "text-sm", "shadow-sm", bubble_class(message))}>
                                    { message.text.clone() }
                                    <time class="block mt-1 text-[10px] opacity-50">{ sent_time(message) }</time>
                                </div>
                            </div>
                        }) }
                        <TypingIndicator active={transcript.is_pending()} />
                        <div ref={end_ref}></div>
                    </div>

                    <div class="p-4 bg-white border-t border-gray-100">
                        <div class="flex items-center space-x-2 bg-gray-50 px-4 py-2 border border-transparent focus-within:border-gray-300 focus-within:bg-white transition-all">
                            <input
                                type="text"
                                class="flex-1 bg-transparent border-none focus:ring-0 text-sm outline-none text-gray-800 placeholder-gray-400"
                                placeholder={i18n.t("chat.placeholder")}
                                value={(*input).clone()}
                                oninput={on_input}
                                onkeypress={on_keypress}
                            />
                            <button
                                class="text-black hover:text-gray-600 disabled:opacity-30 disabled:cursor-not-allowed transition-colors"
                                aria-label={i18n.t("chat.send")}
                                disabled={!can_send}
                                onclick={on_send_click}
                            >
                                <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="w-4 h-4" />
                            </button>
                        </div>
                        <div class="text-center mt-2">
                            <span class="text-[10px] text-gray-400 font-medium">{ i18n.t("chat.footer") }</span>
                        </div>
                    </div>
                </div>
            }

            <button
                class="bg-black hover:bg-gray-800 text-white p-4 shadow-xl transition-all hover:scale-110 flex items-center justify-center"
                aria-label={i18n.t("chat.open")}
                onclick={toggle}
            >
                if *open {
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-7 h-7" />
                } else {
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleOvalLeftEllipsis} class="w-7 h-7" />
                }
            </button>
        </div>
    }
}

fn scroll_to_end(end_ref: &NodeRef) {
    if let Some(element) = end_ref.cast::<Element>() {
        scroll_into_view(&element);
    }
}
