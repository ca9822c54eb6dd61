//! Where suggestions come from: the HTTP endpoint or an in-process service

use std::time::Duration;

use crate::error::TypeaheadError;
use crate::query::QueryService;
use crate::suggestion::Suggestion;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub enum Backend {
    /// `GET {endpoint}?q=...` returning a JSON array of suggestions
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
    /// Search the source list directly
    Local(QueryService),
}

impl Backend {
    pub fn http(endpoint: impl Into<String>) -> Result<Self, TypeaheadError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Backend::Http {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn local(service: QueryService) -> Self {
        Backend::Local(service)
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, TypeaheadError> {
        match self {
            Backend::Http { client, endpoint } => {
                let response = client
                    .get(endpoint)
                    .query(&[("q", query)])
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(response.json::<Vec<Suggestion>>().await?)
            }
            Backend::Local(service) => Ok(service.search(Some(query))),
        }
    }
}
