use anyhow::Result;
use tracing::{debug, info};

use crate::llm_providers::{LLMProvider, LLMProviderFactory, LLMProviderType};

/// Number of questions requested per quiz generation.
pub const DEFAULT_QUIZ_SIZE: usize = 5;

#[derive(Clone)]
pub struct LLMService {
    provider: LLMProvider,
}

impl LLMService {
    /// Gemini with default model and base URL.
    pub fn new(api_key: String) -> Self {
        Self::new_with_provider(api_key, None, LLMProviderType::Gemini, None)
    }

    pub fn new_with_provider(
        api_key: String,
        base_url: Option<String>,
        provider_type: LLMProviderType,
        model: Option<String>,
    ) -> Self {
        let provider = LLMProviderFactory::create_provider(provider_type, api_key, base_url, model);

        Self { provider }
    }

    /// Get the provider name for logging and testing
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Get the model name being used
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Ask the provider for `num_questions` MCQs over `text`, returning the
    /// raw reply. The reply follows the `Q:`/`A)`-`D)`/`Answer:` convention
    /// the prompt dictates; parsing it is the caller's job.
    pub async fn generate_mcqs(&self, text: &str, num_questions: usize) -> Result<String> {
        info!(
            provider = self.provider_name(),
            model = %self.model_name(),
            content_length = text.len(),
            num_questions,
            "Generating MCQs from document text"
        );

        let prompt = mcq_prompt(text, num_questions);
        let response = self.provider.generate(&prompt).await?;

        debug!(
            response_length = response.len(),
            "Raw LLM response for MCQ generation"
        );

        Ok(response)
    }
}

/// The fixed prompt carrying the MCQ format contract.
pub fn mcq_prompt(text: &str, num_questions: usize) -> String {
    format!(
        "Generate {num_questions} multiple-choice questions (MCQs) based on the following content:\n\n\
         {text}\n\n\
         Each question should have 4 options and one correct answer. \
         Separate questions with a blank line. Format:\n\n\
         Q: <question>\n\
         A) <option 1>\n\
         B) <option 2>\n\
         C) <option 3>\n\
         D) <option 4>\n\
         Answer: <correct option letter>"
    )
}
