//! OpenAI-compatible backend implementation.
//!
//! A single [`OpenAiCompatBackend`] serves OpenAI, Google Gemini, Mistral,
//! OpenRouter, and any self-hosted endpoint that speaks the chat completions
//! protocol, via configurable base URLs and factory functions.
//!
//! Each [`OpenAiChatSession`] keeps its own message memory and sends the whole
//! of it (behind the description as the system message) on every request.

pub mod config;

use std::sync::{Mutex, PoisonError};

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use rizz_core::backend::{Backend, BackendSession};
use rizz_types::chat::Role;
use rizz_types::error::{BackendError, RequestFailure};

use self::config::OpenAiCompatConfig;

/// Session factory for any OpenAI-compatible API.
///
/// Does NOT derive Debug: the `async_openai::Client` holds the API key.
pub struct OpenAiCompatBackend {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiCompatBackend {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Backend for OpenAiCompatBackend {
    type Session = OpenAiChatSession;

    fn name(&self) -> &str {
        &self.provider_name
    }

    fn create(&self, description: &str) -> Result<OpenAiChatSession, BackendError> {
        if self.model.trim().is_empty() {
            return Err(BackendError::construction(format!(
                "no model configured for provider '{}'",
                self.provider_name
            )));
        }

        tracing::debug!(
            provider = %self.provider_name,
            model = %self.model,
            "Created chat session"
        );

        Ok(OpenAiChatSession {
            client: self.client.clone(),
            provider_name: self.provider_name.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: description.to_string(),
            memory: Mutex::new(Vec::new()),
        })
    }
}

/// One conversation against an OpenAI-compatible endpoint.
pub struct OpenAiChatSession {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    memory: Mutex<Vec<(Role, String)>>,
}

impl OpenAiChatSession {
    /// Number of messages recorded so far (excluding the system message).
    pub fn memory_len(&self) -> usize {
        self.memory.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Build a [`CreateChatCompletionRequest`] from the current memory.
    fn build_request(&self) -> CreateChatCompletionRequest {
        let memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(memory.len() + 1);

        if !self.system.is_empty() {
            messages.push(ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(self.system.clone()),
                    name: None,
                },
            ));
        }

        for (role, text) in memory.iter() {
            let oai_msg = match role {
                Role::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(text.clone()),
                    name: None,
                }),
                Role::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                text.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            };
            messages.push(oai_msg);
        }

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_completion_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            ..Default::default()
        }
    }
}

impl BackendSession for OpenAiChatSession {
    fn add_message(&self, role: Role, text: &str) {
        self.memory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((role, text.to_string()));
    }

    async fn get_response(&self, mode: &str) -> Result<String, BackendError> {
        let request = self.build_request();
        tracing::debug!(
            provider = %self.provider_name,
            model = %self.model,
            mode,
            messages = request.messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                input_tokens = usage.prompt_tokens,
                output_tokens = usage.completion_tokens,
                "Chat completion finished"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(BackendError::Request(RequestFailure::EmptyResponse))
    }
}

/// Map an `async_openai::error::OpenAIError` to a [`RequestFailure`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> RequestFailure {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                RequestFailure::Authentication
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                RequestFailure::RateLimited
            } else if error_type == "invalid_request_error" {
                RequestFailure::InvalidRequest(api_err.message.clone())
            } else {
                RequestFailure::Provider(err.to_string())
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => RequestFailure::Authentication,
            Some(429) => RequestFailure::RateLimited,
            Some(_) => RequestFailure::Provider(err.to_string()),
            None => RequestFailure::Network(err.to_string()),
        },
        OpenAIError::JSONDeserialize(_, content) => {
            RequestFailure::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => RequestFailure::InvalidRequest(msg.clone()),
        _ => RequestFailure::Provider(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn backend() -> OpenAiCompatBackend {
        OpenAiCompatBackend::new(config::openai_defaults(
            SecretString::from("sk-test".to_string()),
            "gpt-4o-mini",
        ))
    }

    #[test]
    fn test_create_session() {
        let backend = backend();
        assert_eq!(backend.name(), "openai");
        assert_eq!(backend.model(), "gpt-4o-mini");

        let session = backend.create("be charming").unwrap();
        assert_eq!(session.system, "be charming");
        assert_eq!(session.memory_len(), 0);
    }

    #[test]
    fn test_create_without_model_fails() {
        let backend = OpenAiCompatBackend::new(config::openai_defaults(
            SecretString::from("sk-test".to_string()),
            " ",
        ));
        let err = backend.create("d").err().unwrap();
        assert!(matches!(err, BackendError::Construction { .. }));
    }

    #[test]
    fn test_build_request_messages() {
        let session = backend().create("Be charming").unwrap();
        session.add_message(Role::User, "Hello");
        session.add_message(Role::Assistant, "Hi there!");
        session.add_message(Role::User, "coffee?");

        let oai_req = session.build_request();
        assert_eq!(oai_req.model, "gpt-4o-mini");
        // 1 system + 3 conversation = 4 messages
        assert_eq!(oai_req.messages.len(), 4);
        assert!(matches!(oai_req.messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(oai_req.messages[2], ChatCompletionRequestMessage::Assistant(_)));
        assert!(matches!(oai_req.messages[3], ChatCompletionRequestMessage::User(_)));
        assert_eq!(oai_req.max_completion_tokens, Some(config::DEFAULT_MAX_TOKENS));
        assert_eq!(oai_req.temperature, Some(config::DEFAULT_TEMPERATURE));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_without_description_has_no_system_message() {
        let session = backend().create("").unwrap();
        session.add_message(Role::User, "Hello");

        let oai_req = session.build_request();
        assert_eq!(oai_req.messages.len(), 1);
    }

    #[test]
    fn test_sessions_do_not_share_memory() {
        let backend = backend();
        let first = backend.create("a").unwrap();
        let second = backend.create("b").unwrap();

        first.add_message(Role::User, "only in the first");

        assert_eq!(first.memory_len(), 1);
        assert_eq!(second.memory_len(), 0);
    }

    #[test]
    fn test_map_openai_error_api_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("invalid_api_key".to_string()),
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert_eq!(err, RequestFailure::Authentication);
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert_eq!(err, RequestFailure::RateLimited);
    }

    #[test]
    fn test_map_openai_error_invalid_request() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "model not found".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: Some("model".to_string()),
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert_eq!(err, RequestFailure::InvalidRequest("model not found".to_string()));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, RequestFailure::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_request_failure() {
        let backend = OpenAiCompatBackend::new(config::custom(
            "local",
            "http://127.0.0.1:9/v1",
            SecretString::from("k".to_string()),
            "m",
        ));
        let session = backend.create("d").unwrap();
        session.add_message(Role::User, "hi");

        let err = session.get_response("text").await.unwrap_err();
        assert!(matches!(err, BackendError::Request(_)));
    }
}
