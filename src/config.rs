use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::{info, warn};

use crate::llm_providers::LLMProviderType;

// Import logging macros
use crate::{log_system_event, log_validation};

/// Complete application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LLMConfig,
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// Generative-language service configuration. The API key is mandatory:
/// without it the process refuses to start.
#[derive(Debug, Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub provider: LLMProviderType,
    pub model: Option<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upload directory configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub directory: PathBuf,
}

/// Logging system configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub log_directory: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        log_system_event!(config, "Loading application configuration from environment variables");

        let config = Config {
            llm: LLMConfig::from_env()?,
            server: ServerConfig::from_env()?,
            upload: UploadConfig::from_env(),
            logging: LoggingConfig::from_env(),
        };

        log_system_event!(config, "Configuration loaded successfully");
        config.log_configuration_summary();

        Ok(config)
    }

    /// Log a summary of loaded configuration (without sensitive data)
    fn log_configuration_summary(&self) {
        info!(
            llm_api_key_masked = %mask_sensitive_data(&self.llm.api_key),
            llm_provider = ?self.llm.provider,
            llm_model = ?self.llm.model,
            server_address = %format!("{}:{}", self.server.host, self.server.port),
            upload_directory = %self.upload.directory.display(),
            log_level = %self.logging.level,
            "Configuration summary"
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("Server port must be greater than 0"));
        }

        if self.upload.directory.as_os_str().is_empty() {
            return Err(anyhow!("UPLOAD_DIR must not be empty"));
        }

        if !["trace", "debug", "info", "warn", "error"]
            .contains(&self.logging.level.to_lowercase().as_str())
            && !self.logging.level.contains(',')
        {
            warn!(
                "Unusual log level '{}', passing it to the filter as-is",
                self.logging.level
            );
        }

        log_validation!(success, "configuration", "Configuration validation completed successfully");
        Ok(())
    }
}

impl LLMConfig {
    fn from_env() -> Result<Self> {
        let api_key = env::var("LLM_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .map_err(|_| {
                anyhow!(
                    "LLM API key is missing! Set LLM_API_KEY (or GEMINI_API_KEY) \
                     in your .env file or environment."
                )
            })?;

        let base_url = env::var("LLM_BASE_URL").ok();

        let provider_str = env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
        let provider = match provider_str.to_lowercase().as_str() {
            "gemini" | "google" => LLMProviderType::Gemini,
            "openai" | "chatgpt" | "gpt" => LLMProviderType::OpenAI,
            _ => {
                info!("Unknown LLM provider '{}', defaulting to Gemini", provider_str);
                LLMProviderType::Gemini
            }
        };

        let model = env::var("LLM_MODEL").ok();

        Ok(LLMConfig {
            api_key,
            base_url,
            provider,
            model,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        let port = port_str.parse::<u16>().map_err(|_| {
            anyhow!(
                "Invalid PORT value: '{}'. Must be a number between 1-65535",
                port_str
            )
        })?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(ServerConfig { host, port })
    }
}

impl UploadConfig {
    fn from_env() -> Self {
        let directory = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        UploadConfig {
            directory: PathBuf::from(directory),
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info,mindvault=debug".to_string());
        let log_directory = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        LoggingConfig {
            level,
            log_directory,
        }
    }
}

/// Mask sensitive data in configuration for safe logging
fn mask_sensitive_data(data: &str) -> String {
    if data.len() <= 8 {
        "*".repeat(data.len())
    } else {
        format!("{}***{}", &data[..4], &data[data.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_mask_sensitive_data() {
        assert_eq!(mask_sensitive_data("short"), "*****");
        assert_eq!(mask_sensitive_data("AIzaSyExampleKey1234"), "AIza***1234");
    }

    #[test]
    fn test_llm_config_requires_api_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var("LLM_API_KEY");
            env::remove_var("GEMINI_API_KEY");
        }

        let result = LLMConfig::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("LLM_API_KEY"));
    }

    #[test]
    fn test_llm_config_accepts_legacy_key_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var("LLM_API_KEY");
            env::set_var("GEMINI_API_KEY", "legacy-key");
            env::remove_var("LLM_PROVIDER");
        }

        let config = LLMConfig::from_env().unwrap();
        assert_eq!(config.api_key, "legacy-key");
        assert_eq!(config.provider, LLMProviderType::Gemini);

        unsafe {
            env::remove_var("GEMINI_API_KEY");
        }
    }

    #[test]
    fn test_llm_provider_parsing() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("LLM_API_KEY", "test-key");
        }

        let test_cases = vec![
            ("gemini", LLMProviderType::Gemini),
            ("Google", LLMProviderType::Gemini),
            ("openai", LLMProviderType::OpenAI),
            ("chatgpt", LLMProviderType::OpenAI),
            ("gpt", LLMProviderType::OpenAI),
            ("unknown", LLMProviderType::Gemini),
        ];

        for (input, expected) in test_cases {
            unsafe {
                env::set_var("LLM_PROVIDER", input);
            }
            let config = LLMConfig::from_env().unwrap();
            assert_eq!(
                config.provider, expected,
                "Input '{}' should map to {:?}",
                input, expected
            );
        }

        unsafe {
            env::remove_var("LLM_PROVIDER");
            env::remove_var("LLM_API_KEY");
        }
    }

    #[test]
    fn test_server_config_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var("PORT");
            env::remove_var("HOST");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_parsing() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("PORT", "not-a-number");
        }

        assert!(ServerConfig::from_env().is_err());

        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    fn test_config_validation() {
        let config = Config {
            llm: LLMConfig {
                api_key: "test-key".to_string(),
                base_url: None,
                provider: LLMProviderType::Gemini,
                model: None,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            upload: UploadConfig {
                directory: PathBuf::from("uploads"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_directory: "logs".to_string(),
            },
        };

        assert!(config.validate().is_ok());

        let mut invalid = config.clone();
        invalid.server.port = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = config;
        invalid.upload.directory = PathBuf::new();
        assert!(invalid.validate().is_err());
    }
}
