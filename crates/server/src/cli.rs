use clap::Parser;
use shared::api::content::ContentApiConfig;

#[derive(Clone, Parser)]
#[clap(name = "workout tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    #[arg(long, env, default_value = "http://localhost:8081")]
    pub cors_origin: String,
    /// Upper bound on request bodies
    #[arg(long, env, default_value = "65536")]
    pub max_body_bytes: usize,

    #[arg(long, env)]
    pub content_project_id: String,
    #[arg(long, env, default_value = "production")]
    pub content_dataset: String,
    #[arg(long, env, default_value = "2024-01-01")]
    pub content_api_version: String,
    /// Only needed when the backend isn't the hosted one
    #[arg(long, env)]
    pub content_api_host: Option<String>,
    /// Write token for the content backend
    #[arg(long, env, hide_env_values = true)]
    pub content_api_token: String,

    #[arg(long, env, hide_env_values = true)]
    pub llm_api_key: String,
    #[arg(long, env, default_value = "https://api.groq.com/openai/v1")]
    pub llm_base_url: String,
    #[arg(long, env, default_value = "llama-3.1-8b-instant")]
    pub llm_model: String,
}

impl Cli {
    pub fn content_api(&self) -> ContentApiConfig {
        let config = ContentApiConfig::new(
            &self.content_project_id,
            &self.content_dataset,
            &self.content_api_version,
        );
        match &self.content_api_host {
            Some(host) => config.with_host(host),
            None => config,
        }
    }
}

// Tokens stay out of the logs
impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("cors_origin", &self.cors_origin)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("content_project_id", &self.content_project_id)
            .field("content_dataset", &self.content_dataset)
            .field("content_api_version", &self.content_api_version)
            .field("content_api_host", &self.content_api_host)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .finish_non_exhaustive()
    }
}
