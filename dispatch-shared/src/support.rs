//! Support ticket submission from the contact form.

use crate::genai::{GenAiResult, GenerationRequest, TextGenerator};
use crate::models::{ContactField, ContactForm, Sentiment};
use crate::validation::{FieldErrors, validate_contact};

/// Builds the one-word sentiment classification prompt for a ticket body.
#[must_use]
pub fn sentiment_prompt(message: &str) -> String {
    format!(
        "Analyze this support ticket sentiment strictly in one word (Positive/Neutral/Negative): {message}"
    )
}

/// Classifies the ticket's sentiment with the text model.
///
/// # Errors
/// Propagates any generator failure; the contact form treats it as a failed
/// submission.
pub async fn classify_ticket<G: TextGenerator + ?Sized>(
    generator: &G,
    model: &str,
    form: &ContactForm,
) -> GenAiResult<Sentiment> {
    let request = GenerationRequest::new(model, sentiment_prompt(&form.message));
    let response = generator.generate(&request).await?;
    let sentiment = response
        .non_empty_text()
        .map_or(Sentiment::Unknown, |text| text.parse().unwrap_or(Sentiment::Unknown));
    tracing::info!(%sentiment, "support ticket classified");
    Ok(sentiment)
}

/// Outcome of the pre-delivery stage of a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketCheck {
    /// Required fields are missing.
    Invalid(FieldErrors<ContactField>),
    /// The ticket may be delivered; carries the sentiment when one was computed.
    Accepted(Option<Sentiment>),
}

/// Validates the ticket and, when the generator has a credential,
/// classifies its sentiment.
///
/// # Errors
/// Fails when the classification request fails.
pub async fn check_ticket<G: TextGenerator + ?Sized>(
    generator: &G,
    model: &str,
    form: &ContactForm,
) -> GenAiResult<TicketCheck> {
    let errors = validate_contact(form);
    if !errors.is_valid() {
        return Ok(TicketCheck::Invalid(errors));
    }
    if !generator.is_configured() {
        return Ok(TicketCheck::Accepted(None));
    }
    let sentiment = classify_ticket(generator, model, form).await?;
    Ok(TicketCheck::Accepted(Some(sentiment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::{GenAiError, GenerationResponse};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct ScriptedGenerator {
        configured: bool,
        reply: GenAiResult<GenerationResponse>,
        calls: Cell<usize>,
    }

    impl ScriptedGenerator {
        fn new(configured: bool, reply: GenAiResult<GenerationResponse>) -> Self {
            Self {
                configured,
                reply,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, request: &GenerationRequest) -> GenAiResult<GenerationResponse> {
            assert!(request.prompt.starts_with("Analyze this support ticket sentiment"));
            assert!(request.system_instruction.is_none());
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }

        fn is_configured(&self) -> bool {
            self.configured
        }
    }

    fn ticket() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            phone: "0800".to_string(),
            email: "ada@stu.cu.edu.ng".to_string(),
            message: "The portal keeps logging me out.".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_message() {
        assert!(sentiment_prompt("slow wifi").ends_with("(Positive/Neutral/Negative): slow wifi"));
    }

    #[test]
    fn test_invalid_ticket_skips_classification() {
        let generator =
            ScriptedGenerator::new(true, Ok(GenerationResponse::from_text("Negative")));
        let form = ContactForm {
            message: String::new(),
            ..ticket()
        };

        let check = block_on(check_ticket(&generator, "m", &form)).unwrap();

        match check {
            TicketCheck::Invalid(errors) => assert!(errors.has(ContactField::Message)),
            TicketCheck::Accepted(_) => panic!("expected validation failure"),
        }
        assert_eq!(generator.calls.get(), 0);
    }

    #[test]
    fn test_without_credentials_ticket_is_accepted_unclassified() {
        let generator = ScriptedGenerator::new(false, Err(GenAiError::MissingApiKey));
        let check = block_on(check_ticket(&generator, "m", &ticket())).unwrap();
        assert_eq!(check, TicketCheck::Accepted(None));
        assert_eq!(generator.calls.get(), 0);
    }

    #[test]
    fn test_configured_generator_classifies() {
        let generator =
            ScriptedGenerator::new(true, Ok(GenerationResponse::from_text("Negative\n")));
        let check = block_on(check_ticket(&generator, "m", &ticket())).unwrap();
        assert_eq!(check, TicketCheck::Accepted(Some(Sentiment::Negative)));
        assert_eq!(generator.calls.get(), 1);
    }

    #[test]
    fn test_empty_classification_is_unknown() {
        let generator = ScriptedGenerator::new(true, Ok(GenerationResponse::empty()));
        let sentiment = block_on(classify_ticket(&generator, "m", &ticket())).unwrap();
        assert_eq!(sentiment, Sentiment::Unknown);
    }

    #[test]
    fn test_classification_failure_fails_the_check() {
        let generator = ScriptedGenerator::new(true, Err(GenAiError::status(500, "boom")));
        let result = block_on(check_ticket(&generator, "m", &ticket()));
        assert_eq!(result, Err(GenAiError::status(500, "boom")));
    }
}
