use std::path::PathBuf;

use clap::Args;
use shared::api::content::ContentApiConfig;

const PREFERENCES_DIR: &str = "workout-tracker";
const PREFERENCES_FILE: &str = "preferences.json";

/// Where the client finds its services and who it acts for
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    #[arg(long, env)]
    pub content_project_id: String,
    #[arg(long, env, default_value = "production")]
    pub content_dataset: String,
    #[arg(long, env, default_value = "2024-01-01")]
    pub content_api_version: String,
    #[arg(long, env)]
    pub content_api_host: Option<String>,

    #[arg(long, env, default_value = "http://127.0.0.1:8080")]
    pub server_url: String,

    /// Defaults to the platform config directory
    #[arg(long, env)]
    pub preferences_path: Option<PathBuf>,

    /// Id of the signed in user
    #[arg(long, env)]
    pub user_id: String,
}

impl ClientConfig {
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

    pub fn preferences_path(&self) -> PathBuf {
        match &self.preferences_path {
            Some(path) => path.clone(),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(PREFERENCES_DIR)
                .join(PREFERENCES_FILE),
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ClientConfig,
    }

    fn parse(args: &[&str]) -> ClientConfig {
        let base = ["workout", "--content-project-id", "abc123", "--user-id", "user_1"];
        TestCli::parse_from(base.iter().chain(args)).config
    }

    #[test]
    fn test_content_api() {
        let config = parse(&[
            "--content-api-host",
            "http://localhost:3333",
            "--content-api-version",
            "2024-01-01",
            "--content-dataset",
            "staging",
        ]);
        assert_eq!(config.content_api().project_id, "abc123");
        assert_eq!(
            config.content_api().query_url(),
            "http://localhost:3333/v2024-01-01/data/query/staging"
        );
    }

    #[test]
    fn test_preferences_path() {
        let config = parse(&["--preferences-path", "/tmp/prefs.json"]);
        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/prefs.json"));

        let config = ClientConfig { preferences_path: None, ..config };
        assert!(config.preferences_path().ends_with("workout-tracker/preferences.json"));
    }
}
