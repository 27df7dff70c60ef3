pub mod api;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod flashcards;
pub mod llm_providers;
pub mod llm_service;
pub mod logging;
pub mod mcq_parser;
pub mod models;
pub mod review_scheduler;
pub mod study_service;

pub use config::Config;
pub use errors::*;
pub use llm_providers::{LLMProvider, LLMProviderFactory, LLMProviderType};
pub use llm_service::LLMService;
pub use models::*;
pub use review_scheduler::ReviewScheduler;
pub use study_service::StudyService;
