use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Supported generative-language backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LLMProviderType {
    Gemini,
    OpenAI,
}

/// Enum-based provider dispatch, one variant per backend.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(GeminiProvider),
    OpenAI(OpenAIProvider),
}

impl LLMProvider {
    /// Send a completion request and return the raw text reply.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            LLMProvider::Gemini(provider) => provider.generate(prompt).await,
            LLMProvider::OpenAI(provider) => provider.generate(prompt).await,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            LLMProvider::Gemini(_) => "Gemini",
            LLMProvider::OpenAI(_) => "OpenAI",
        }
    }

    pub fn model_name(&self) -> &str {
        match self {
            LLMProvider::Gemini(provider) => &provider.model,
            LLMProvider::OpenAI(provider) => &provider.model,
        }
    }
}

/// Factory for creating LLM providers based on provider type
pub struct LLMProviderFactory;

impl LLMProviderFactory {
    pub fn create_provider(
        provider_type: LLMProviderType,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
    ) -> LLMProvider {
        match provider_type {
            LLMProviderType::Gemini => {
                LLMProvider::Gemini(GeminiProvider::new(api_key, base_url, model))
            }
            LLMProviderType::OpenAI => {
                LLMProvider::OpenAI(OpenAIProvider::new(api_key, base_url, model))
            }
        }
    }
}

// ============================================================================
// Gemini
// ============================================================================

/// Gemini `generateContent` client. The API key travels in the query string.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            model: model.unwrap_or_else(|| "gemini-1.5-pro-latest".to_string()),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        info!(
            provider = "Gemini",
            model = %self.model,
            prompt_length = prompt.len(),
            "Making LLM request"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                provider = "Gemini",
                status = %status,
                error = %error_text,
                "LLM API request failed"
            );
            return Err(anyhow::anyhow!("Gemini API request failed: {}", error_text));
        }

        let gemini_response: GeminiResponse = response.json().await?;

        let text = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| anyhow::anyhow!("No candidates in Gemini response"))?;

        info!(
            provider = "Gemini",
            response_length = text.len(),
            "Successfully received LLM response"
        );

        Ok(text)
    }
}

// ============================================================================
// OpenAI
// ============================================================================

/// OpenAI-compatible `chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: ChatMessage,
}

impl OpenAIProvider {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request_body = OpenAIRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        info!(
            provider = "OpenAI",
            model = %self.model,
            prompt_length = prompt.len(),
            "Making LLM request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                provider = "OpenAI",
                status = %status,
                error = %error_text,
                "LLM API request failed"
            );
            return Err(anyhow::anyhow!("OpenAI API request failed: {}", error_text));
        }

        let openai_response: OpenAIResponse = response.json().await?;

        let text = openai_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("No choices in OpenAI response"))?;

        info!(
            provider = "OpenAI",
            response_length = text.len(),
            "Successfully received LLM response"
        );

        Ok(text)
    }
}
