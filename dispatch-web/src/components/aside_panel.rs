use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct AsidePanelProps {
    pub title: AttrValue,
    /// Second line of the title, rendered muted.
    #[prop_or_default]
    pub accent: Option<AttrValue>,
    pub body: AttrValue,
}

/// Black side pane beside the contact, login and signup forms; hidden on
/// small screens.
#[function_component(AsidePanel)]
pub fn aside_panel(props: &AsidePanelProps) -> Html {
    html! {
        <aside class="hidden lg:flex w-1/2 bg-black relative overflow-hidden items-center justify-center p-12">
            <div class="absolute inset-0 opacity-20 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-white rounded-full mix-blend-overlay filter blur-3xl animate-blob"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-gray-500 rounded-full mix-blend-overlay filter blur-3xl animate-blob animation-delay-2000"></div>
            </div>
            <div class="relative z-10 text-white max-w-lg">
                <h2 class="text-5xl font-extrabold mb-6 leading-tight">
                    { props.title.clone() }
                    if let Some(accent) = &props.accent {
                        <br />
                        <span class="text-gray-400">{ accent.clone() }</span>
                    }
                </h2>
                <p class="text-xl text-gray-300 leading-relaxed">{ props.body.clone() }</p>
            </div>
        </aside>
    }
}
