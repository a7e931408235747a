//! Page fetch and extraction pipeline

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::extractors::extract_module_record;
use crate::record::ModuleRecord;

/// Fetches project pages and turns them into [`ModuleRecord`]s
///
/// Holds no per-module state; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct ProjectFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        url::Url::parse(&config.base_url).map_err(|source| FetchError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Canonical page URL for `module_name`
    ///
    /// The name is inserted as-is. Characters such as `/`, `?` or `#` change
    /// the meaning of the URL and are left for the server to reject.
    pub fn project_url(&self, module_name: &str) -> String {
        format!("{}/{}", self.base_url, module_name)
    }

    /// Fetch the project page for `module_name` and extract its summary
    ///
    /// Fails only if the page cannot be retrieved. Missing page structure
    /// yields default field values instead.
    pub async fn fetch_module_info(&self, module_name: &str) -> Result<ModuleRecord, FetchError> {
        let url = self.project_url(module_name);
        tracing::info!(module = module_name, %url, "fetching project page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "project page request failed"))?;

        let status = response.status();
        tracing::debug!(%url, %status, "project page responded");

        let body = response
            .error_for_status()
            .inspect_err(|e| tracing::warn!(%url, error = %e, "project page returned error status"))?
            .text()
            .await?;

        let record = extract_module_record(&body, &url);
        tracing::debug!(
            module = module_name,
            version = %record.version,
            compatibility = record.drupal_compatibility.len(),
            "extracted module record"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::VIEWS_PAGE;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> ProjectFetcher {
        let config = FetcherConfig::default().with_base_url(format!("{}/project", server.uri()));
        ProjectFetcher::new(config).unwrap()
    }

    #[test]
    fn test_project_url_default() {
        let fetcher = ProjectFetcher::new(FetcherConfig::default()).unwrap();
        assert_eq!(
            fetcher.project_url("views"),
            "https://www.drupal.org/project/views"
        );
    }

    #[test]
    fn test_project_url_is_verbatim() {
        let config = FetcherConfig::default().with_base_url("http://localhost:8080/project/");
        let fetcher = ProjectFetcher::new(config).unwrap();
        assert_eq!(
            fetcher.project_url("a/b?c"),
            "http://localhost:8080/project/a/b?c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FetcherConfig::default().with_base_url("not a url");
        let err = ProjectFetcher::new(config).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_fetch_module_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/project/views"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VIEWS_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let record = fetcher.fetch_module_info("views").await.unwrap();

        assert_eq!(record.name, "Views");
        assert_eq!(record.version, "8.x-3.0");
        assert_eq!(record.drupal_compatibility, vec!["^9", "^10", "^11"]);
        assert_eq!(record.project_url, format!("{}/project/views", server.uri()));
    }

    #[tokio::test]
    async fn test_fetch_page_without_structure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/project/bare"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let record = fetcher.fetch_module_info("bare").await.unwrap();

        assert_eq!(record, ModuleRecord::empty(fetcher.project_url("bare")));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/project/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let err = fetcher.fetch_module_info("missing").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "drupal-modules-mcp-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VIEWS_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let config = FetcherConfig::default()
            .with_base_url(format!("{}/project", server.uri()))
            .with_user_agent("drupal-modules-mcp-test");
        let fetcher = ProjectFetcher::new(config).unwrap();

        let record = fetcher.fetch_module_info("views").await.unwrap();
        assert_eq!(record.name, "Views");
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = FetcherConfig::default()
            .with_base_url(format!("{}/project", server.uri()))
            .with_timeout(Some(Duration::from_millis(100)));
        let fetcher = ProjectFetcher::new(config).unwrap();

        let err = fetcher.fetch_module_info("slow").await.unwrap_err();
        match err {
            FetchError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
