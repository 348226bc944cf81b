use i18nrs::yew::use_translation;
use shared::validation::{PasswordStrength, StrengthLabel};
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StrengthMeterProps {
    pub password: String,
}

/// Fill colour shared by every lit segment; the whole bar takes the colour
/// of the current score.
pub fn segment_class(strength: PasswordStrength, segment: u8) -> &'static str {
    if !strength.lights(segment) {
        return "bg-gray-200";
    }
    match strength.score() {
        1 => "bg-red-500",
        2 => "bg-orange-500",
        3 => "bg-yellow-500",
        _ => "bg-green-500",
    }
}

pub fn label_class(label: StrengthLabel) -> &'static str {
    match label {
        StrengthLabel::Weak => "text-red-500",
        StrengthLabel::Medium => "text-yellow-600",
        StrengthLabel::Strong => "text-green-600",
    }
}

/// Four-segment bar under the signup password input.
#[function_component(StrengthMeter)]
pub fn strength_meter(props: &StrengthMeterProps) -> Html {
    let strength = PasswordStrength::of(&props.password);

    html! {
        <div class="mt-2 flex items-center space-x-1">
            { for (1..=PasswordStrength::MAX).map(|segment| html! {
                <div class={classes!(
                    "h-1", "flex-1", "rounded-full", "transition-colors", "duration-300",
                    segment_class(strength, segment)
                )}></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StrengthLabelTextProps {
    pub password: String,
}

/// Weak / Medium / Strong caption; hidden while the password is empty.
#[function_component(StrengthLabelText)]
pub fn strength_label_text(props: &StrengthLabelTextProps) -> Html {
    let (i18n, _) = use_translation();

    if props.password.is_empty() {
        return Html::default();
    }
    let label = PasswordStrength::of(&props.password).label();

    html! {
        <span class={classes!("text-xs", "font-bold", label_class(label))}>
            { i18n.t(&format!("signup.strength.{}", label.as_ref())) }
        </span>
    }
}
