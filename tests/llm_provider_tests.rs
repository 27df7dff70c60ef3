use mindvault::llm_providers::{LLMProviderFactory, LLMProviderType};
use mindvault::llm_service::LLMService;

#[test]
fn test_factory_creates_gemini_with_defaults() {
    let provider = LLMProviderFactory::create_provider(
        LLMProviderType::Gemini,
        "test-key".to_string(),
        None,
        None,
    );

    assert_eq!(provider.provider_name(), "Gemini");
    assert_eq!(provider.model_name(), "gemini-1.5-pro-latest");
}

#[test]
fn test_factory_creates_openai_with_defaults() {
    let provider = LLMProviderFactory::create_provider(
        LLMProviderType::OpenAI,
        "test-key".to_string(),
        None,
        None,
    );

    assert_eq!(provider.provider_name(), "OpenAI");
    assert_eq!(provider.model_name(), "gpt-4o-mini");
}

#[test]
fn test_factory_honors_model_override() {
    let provider = LLMProviderFactory::create_provider(
        LLMProviderType::Gemini,
        "test-key".to_string(),
        Some("https://proxy.example.com/v1beta".to_string()),
        Some("gemini-1.5-flash".to_string()),
    );

    assert_eq!(provider.model_name(), "gemini-1.5-flash");
}

#[test]
fn test_provider_type_equality() {
    assert_eq!(LLMProviderType::Gemini, LLMProviderType::Gemini);
    assert_ne!(LLMProviderType::Gemini, LLMProviderType::OpenAI);

    assert_eq!(format!("{:?}", LLMProviderType::Gemini), "Gemini");
    assert_eq!(format!("{:?}", LLMProviderType::OpenAI), "OpenAI");
}

#[test]
fn test_service_reports_configured_provider() {
    let service = LLMService::new_with_provider(
        "test-key".to_string(),
        None,
        LLMProviderType::OpenAI,
        Some("gpt-4o".to_string()),
    );

    assert_eq!(service.provider_name(), "OpenAI");
    assert_eq!(service.model_name(), "gpt-4o");
}
