use crate::components::{
    ChatWidget, CtaSection, Features, Footer, Hero, HowItWorks, Navbar, Testimonials,
};
use crate::navigation::Navigation;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub navigation: Navigation,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let navigation = props.navigation.clone();

    html! {
        <div class="min-h-screen bg-white text-gray-900">
            <Navbar navigation={navigation.clone()} />
            <main>
                <Hero navigation={navigation.clone()} />
                <Features navigation={navigation.clone()} />
                <HowItWorks navigation={navigation.clone()} />
                <Testimonials />
                <CtaSection navigation={navigation.clone()} />
            </main>
            <Footer {navigation} />
            <ChatWidget />
        </div>
    }
}
