use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// CORS allowed origins; `*` means any origin
    pub allowed_origins: Vec<String>,
    /// iFixit API configuration
    pub ifixit: IfixitConfig,
    /// LLM summarizer configuration
    pub llm: LlmConfig,
}

/// Configuration for the iFixit API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfixitConfig {
    /// Base URL for the iFixit site and its 2.0 API.
    pub base_url: String,
    /// User-Agent sent on every outbound request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of guides fetched when expanding a device page.
    pub max_guides_per_device: usize,
}

impl Default for IfixitConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.ifixit.com".to_string(),
            user_agent: "repair-search/0.1.0".to_string(),
            timeout_secs: 30,
            max_guides_per_device: 5,
        }
    }
}

/// Configuration for the DeepSeek-compatible summarization LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; if None, summarization uses the deterministic fallback.
    pub api_key: Option<String>,
    /// Base URL for the OpenAI-compatible chat API.
    pub base_url: String,
    /// Model name to request.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Attempts per call on transport failure.
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            temperature: 0.1,
            max_tokens: 1000,
            timeout_secs: 120,
            max_retries: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            allowed_origins: vec!["*".to_string()],
            ifixit: IfixitConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("REPAIR_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        if let Ok(url) = std::env::var("IFIXIT_BASE_URL") {
            config.ifixit.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(agent) = std::env::var("IFIXIT_USER_AGENT") {
            config.ifixit.user_agent = agent;
        }
        if let Ok(val) = std::env::var("IFIXIT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.ifixit.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("IFIXIT_MAX_GUIDES_PER_DEVICE") {
            if let Ok(v) = val.parse() {
                config.ifixit.max_guides_per_device = v;
            }
        }

        if let Ok(key) = std::env::var("DEEPSEEK_API_KEY") {
            if !key.trim().is_empty() {
                config.llm.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var("DEEPSEEK_BASE_URL") {
            config.llm.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("DEEPSEEK_MODEL") {
            config.llm.model = model;
        }
        if let Ok(val) = std::env::var("DEEPSEEK_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.llm.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("DEEPSEEK_MAX_RETRIES") {
            if let Ok(v) = val.parse() {
                config.llm.max_retries = v;
            }
        }

        config
    }

    /// True when any origin is allowed.
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
