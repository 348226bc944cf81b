use crate::{config, util::with_timeout};
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::Client;
use shared::DispatchConfig;
use shared::genai::{
    GenAiError, GenAiResult, GenerateContentResponse, GenerationRequest, GenerationResponse,
    TextGenerator,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

thread_local! {
    static SHARED_CLIENT: OnceCell<GeminiClient> = const { OnceCell::new() };
}

/// Minimal client for the Gemini `generateContent` REST call.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    endpoint: String,
    api_key: Option<String>,
    timeout_ms: u64,
    client: Client,
}

impl GeminiClient {
    /// Create a client from the endpoint, key and timeout in `config`.
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
            timeout_ms: config.request_timeout_ms,
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(&config::current())).clone())
    }

    pub(crate) fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }

    async fn send(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> GenAiResult<GenerationResponse> {
        let response = self
            .client
            .post(self.generate_url(&request.model))
            .header(API_KEY_HEADER, api_key)
            .json(&request.to_wire())
            .send()
            .await
            .map_err(|error| GenAiError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::status(status.as_u16(), body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|error| GenAiError::decode(error.to_string()))?;
        Ok(body.into())
    }
}

#[async_trait(?Send)]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> GenAiResult<GenerationResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenAiError::MissingApiKey);
        };
        log::debug!("generateContent with {}", request.model);
        with_timeout(self.timeout_ms, self.send(api_key, request))
            .await
            .unwrap_or(Err(GenAiError::timeout(self.timeout_ms)))
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
