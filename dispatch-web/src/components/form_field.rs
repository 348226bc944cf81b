use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{
    AttrValue, Callback, Children, Html, Properties, TargetCast, classes, events::InputEvent,
    function_component, html,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    /// Input `name`, also used as its `id`
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Flags the field without a message, as the contact form does.
    #[prop_or(false)]
    pub invalid: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(false)]
    pub multiline: bool,
    /// Rendered between the input and the error line.
    #[prop_or_default]
    pub children: Children,
}

pub fn label_class(flagged: bool) -> &'static str {
    if flagged { "text-red-500" } else { "text-gray-900" }
}

pub fn input_class(flagged: bool) -> &'static str {
    if flagged {
        "border-red-500 text-red-900 placeholder-red-300 focus:border-red-500"
    } else {
        "border-gray-300 focus:border-black text-gray-900 placeholder-gray-300"
    }
}

/// Underlined text input with label and inline error.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let flagged = props.invalid || props.error.is_some();

    let oninput = {
        let on_input = props.on_input.clone();
        let multiline = props.multiline;
        Callback::from(move |event: InputEvent| {
            let value = if multiline {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            } else {
                event
                    .target_dyn_into::<HtmlInputElement>()
                    .map(|input| input.value())
            };
            if let Some(value) = value {
                on_input.emit(value);
            }
        })
    };

    let field_class = classes!(
        "w-full", "border-b", "py-3", "outline-none", "transition-all", "bg-transparent",
        "text-lg", "pr-8", input_class(flagged)
    );

    html! {
        <div class="group">
            <label
                for={props.name.clone()}
                class={classes!("text-xs", "font-bold", "uppercase", "tracking-wider", "mb-2", "block", label_class(flagged))}
            >
                { props.label.clone() }
            </label>
            <div class="relative">
                if props.multiline {
                    <textarea
                        id={props.name.clone()}
                        name={props.name.clone()}
                        rows="2"
                        class={classes!(field_class, "resize-none")}
                        value={props.value.clone()}
                        placeholder={props.placeholder.clone()}
                        disabled={props.disabled}
                        {oninput}
                    />
                } else {
                    <input
                        id={props.name.clone()}
                        name={props.name.clone()}
                        type={props.input_type.clone()}
                        class={field_class}
                        value={props.value.clone()}
                        placeholder={props.placeholder.clone()}
                        disabled={props.disabled}
                        {oninput}
                    />
                }
                if props.error.is_some() {
                    <div class="absolute right-0 top-3 text-red-500 animate-pulse">
                        <Icon icon_id={IconId::HeroiconsOutlineExclamationCircle} class="w-5 h-5" />
                    </div>
                }
            </div>
            { props.children.clone() }
            if let Some(message) = &props.error {
                <p class="text-red-500 text-xs mt-2 font-medium">{ message.clone() }</p>
            }
        </div>
    }
}
