use serde::{Deserialize, Serialize};

/// Where the hosted content backend lives for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentApiConfig {
    pub project_id: String,
    pub dataset: String,
    /// Date style version, e.g. `2024-01-01`. The `v` prefix is added when building urls
    pub api_version: String,
    /// Overrides `https://{project_id}.api.sanity.io`
    pub host: Option<String>,
}

impl ContentApiConfig {
    pub fn new<P: Into<String>, D: Into<String>, V: Into<String>>(
        project_id: P,
        dataset: D,
        api_version: V,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: api_version.into(),
            host: None,
        }
    }

    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    fn base_url(&self) -> String {
        let host = match &self.host {
            Some(host) => host.trim_end_matches('/').to_owned(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        format!("{host}/v{}", self.api_version.trim_start_matches('v'))
    }

    /// GROQ query endpoint. Query text and parameters are passed as url parameters
    pub fn query_url(&self) -> String {
        format!("{}/data/query/{}", self.base_url(), self.dataset)
    }

    /// Mutation endpoint, asking for the ids of created documents back
    pub fn mutate_url(&self) -> String {
        format!("{}/data/mutate/{}?returnIds=true", self.base_url(), self.dataset)
    }
}
