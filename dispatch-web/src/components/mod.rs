pub(crate) mod aside_panel;
pub(crate) mod background_pattern;
pub(crate) mod chat_widget;
pub(crate) mod cta_section;
pub(crate) mod features;
pub(crate) mod footer;
pub(crate) mod form_field;
pub(crate) mod hero;
pub(crate) mod how_it_works;
pub(crate) mod navbar;
pub(crate) mod spinner;
pub(crate) mod strength_meter;
pub(crate) mod testimonials;
pub(crate) mod typing_indicator;

// Re-export components for convenience
pub use aside_panel::AsidePanel;
pub use background_pattern::BackgroundPattern;
pub use chat_widget::ChatWidget;
pub use cta_section::CtaSection;
pub use features::Features;
pub use footer::Footer;
pub use form_field::FormField;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use spinner::Spinner;
pub use strength_meter::{StrengthLabelText, StrengthMeter};
pub use testimonials::Testimonials;
pub use typing_indicator::TypingIndicator;
