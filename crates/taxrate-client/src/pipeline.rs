//! Request pipeline: one authenticated HTTP exchange per call.
//!
//! Each call moves `Building → Sending → {Succeeded | Failed}`. Building
//! interpolates the path template, assembles query parameters, and
//! serializes the body — any failure there surfaces before a single byte
//! hits the network. Sending performs exactly one HTTP attempt with the
//! configured timeout; retry policy belongs to callers, not here. The
//! response branches into the graph deserializer on success or the error
//! mapper on failure.
//!
//! Pipelines hold no per-call state; any number of calls may run
//! concurrently on one pipeline.

use std::time::Duration;

use url::Url;

use taxrate_core::{GraphCodec, ModelInstance, TypeRegistry, WireError};

use crate::config::{ConfigError, Credentials, TaxrateConfig};
use crate::envelope::map_error;
use crate::error::TaxrateError;

/// One call being built: verb, path template, parameters, optional body,
/// and the model the response deserializes against.
///
/// Constructed fresh per call and consumed by [`RequestPipeline::execute`];
/// descriptors are never reused.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: reqwest::Method,
    path: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<ModelInstance>,
    response_model: &'static str,
    credentials: Option<Credentials>,
}

impl RequestDescriptor {
    /// A descriptor for `method` on `path`, deserializing the response
    /// against `response_model`. Placeholders in the path use
    /// `{name}` syntax and must be filled with [`path_param`](Self::path_param).
    pub fn new(
        method: reqwest::Method,
        path: &'static str,
        response_model: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            response_model,
            credentials: None,
        }
    }

    /// Supply a value for a path placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl std::fmt::Display) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &'static str, value: impl std::fmt::Display) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Append a query parameter when a value is present; absent values are
    /// omitted from the URL entirely.
    pub fn query_opt(mut self, name: &'static str, value: Option<impl std::fmt::Display>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// Attach a request body.
    pub fn body(mut self, body: ModelInstance) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the pipeline's credentials for this one call.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Executes calls against one base URL with one set of credentials.
///
/// Stateless between calls apart from the shared frozen registry and the
/// underlying connection pool.
#[derive(Debug)]
pub struct RequestPipeline {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    registry: &'static TypeRegistry,
    timeout: Duration,
}

impl RequestPipeline {
    /// Build a pipeline from configuration.
    pub fn new(config: &TaxrateConfig) -> Result<Self, TaxrateError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TaxrateError::ConnectionFailed {
                endpoint: "client_init".to_string(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            registry: taxrate_models::registry(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// The frozen registry this pipeline deserializes against.
    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    /// Execute one call: build, send once, branch on status.
    ///
    /// Local failures (unknown model, missing placeholder, marshalling)
    /// return before any network activity. A non-success status always
    /// yields [`TaxrateError::Api`] with a fully-populated descriptor.
    pub async fn execute(
        &self,
        request: RequestDescriptor,
    ) -> Result<ModelInstance, TaxrateError> {
        let endpoint = format!("{} {}", request.method, request.path);

        // Building: fail fast before any network activity.
        let url = self.build_url(&request, &endpoint)?;
        let body = match &request.body {
            Some(instance) => Some(GraphCodec::new(self.registry).serialize(instance)?),
            None => None,
        };

        // Sending: one attempt, bounded by the per-call timeout.
        tracing::debug!(endpoint = endpoint.as_str(), "sending Taxrate API request");
        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .timeout(self.timeout);
        builder = match request.credentials.as_ref().unwrap_or(&self.credentials) {
            Credentials::Basic {
                account_id,
                license_key,
            } => builder.basic_auth(account_id.as_str(), Some(license_key.as_str())),
            Credentials::Bearer(token) => builder.bearer_auth(token.as_str()),
            Credentials::None => builder,
        };
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_transport(&endpoint, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| classify_transport(&endpoint, e))?;

        if status.is_success() {
            tracing::debug!(
                endpoint = endpoint.as_str(),
                status = status.as_u16(),
                "Taxrate API request succeeded"
            );
            // Deletions and similar answer with an empty body.
            if text.trim().is_empty() {
                return Ok(ModelInstance::new(request.response_model));
            }
            let wire: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| WireError::MalformedPayload(e.to_string()))?;
            Ok(GraphCodec::new(self.registry).deserialize(request.response_model, &wire)?)
        } else {
            tracing::debug!(
                endpoint = endpoint.as_str(),
                status = status.as_u16(),
                "Taxrate API returned an error"
            );
            Err(TaxrateError::Api(map_error(status.as_u16(), &text)))
        }
    }

    fn build_url(
        &self,
        request: &RequestDescriptor,
        endpoint: &str,
    ) -> Result<Url, TaxrateError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TaxrateError::Config(ConfigError::InvalidUrl(
                    "base_url".to_string(),
                    "cannot be a base".to_string(),
                ))
            })?;
            segments.pop_if_empty();
            for segment in request.path.split('/').filter(|s| !s.is_empty()) {
                let resolved = resolve_segment(segment, &request.path_params, endpoint)?;
                segments.push(&resolved);
            }
        }
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// A path segment is either literal or a single `{placeholder}`.
fn resolve_segment(
    segment: &str,
    params: &[(&'static str, String)],
    endpoint: &str,
) -> Result<String, TaxrateError> {
    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) => params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| TaxrateError::MissingParameter {
                name: name.to_string(),
                endpoint: endpoint.to_string(),
            }),
        None => Ok(segment.to_string()),
    }
}

fn classify_transport(endpoint: &str, source: reqwest::Error) -> TaxrateError {
    if source.is_timeout() {
        TaxrateError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        TaxrateError::ConnectionFailed {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_resolve_placeholders_and_pass_literals() {
        let params = vec![("companyId", "42".to_string())];
        assert_eq!(
            resolve_segment("{companyId}", &params, "ep").unwrap(),
            "42"
        );
        assert_eq!(resolve_segment("nexus", &params, "ep").unwrap(), "nexus");
    }

    #[test]
    fn missing_placeholder_names_the_parameter() {
        let err = resolve_segment("{transactionCode}", &[], "GET x").unwrap_err();
        match err {
            TaxrateError::MissingParameter { name, .. } => {
                assert_eq!(name, "transactionCode");
            }
            other => panic!("expected MissingParameter, got: {other:?}"),
        }
    }
}
