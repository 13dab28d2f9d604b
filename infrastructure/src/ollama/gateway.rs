//! Ollama LLM Gateway implementation

use crate::ollama::error::{OllamaError, Result};
use async_trait::async_trait;
use panel_application::ports::llm_gateway::{GatewayError, LlmGateway};
use panel_domain::ModelConfig;
use panel_domain::util::preview;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

/// Longest error body kept in an error message
const MAX_ERROR_BODY: usize = 320;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    eval_count: Option<u64>,
}

/// LLM Gateway implementation for a local or remote Ollama server
pub struct OllamaGateway {
    client: Client,
    endpoint: String,
}

impl OllamaGateway {
    /// Create a gateway for the server at `endpoint`
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("OllamaGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }

    /// Run one non-streaming completion
    pub async fn generate(&self, model: &ModelConfig, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(self.generate_url())
            .json(&generate_request(model, prompt))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(OllamaError::ModelNotFound(model.model.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body: preview(&body, MAX_ERROR_BODY).into_owned(),
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::InvalidResponse(e.to_string()))?;

        debug!(
            "Ollama generated {} chars ({} tokens) with {}",
            body.response.len(),
            body.eval_count.unwrap_or_default(),
            model.model
        );

        Ok(body.response)
    }
}

/// Body of a `/api/generate` request
fn generate_request(model: &ModelConfig, prompt: &str) -> Value {
    json!({
        "model": model.model,
        "prompt": prompt,
        "stream": false,
        "options": {
            "temperature": model.temperature,
            "top_p": model.top_p,
        },
    })
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn complete(
        &self,
        model: &ModelConfig,
        prompt: &str,
    ) -> std::result::Result<String, GatewayError> {
        Ok(self.generate(model, prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (endpoint, handle)
    }

    #[test]
    fn test_generate_request_body() {
        let model = ModelConfig::new("llama3.2").with_temperature(0.3).with_top_p(0.5);
        let body = generate_request(&model, "Hello");

        assert_eq!(body["model"], "llama3.2");
        assert_eq!(body["prompt"], "Hello");
        assert_eq!(body["stream"], false);
        assert!((body["options"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert!((body["options"]["top_p"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let gateway = OllamaGateway::new("http://localhost:11434/", None).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:11434");
        assert_eq!(gateway.generate_url(), "http://localhost:11434/api/generate");
    }

    #[tokio::test]
    async fn test_complete_returns_raw_response() {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"response": "  The moon.\n", "done": true}"#).await;
        let gateway = OllamaGateway::new(&endpoint, Some(Duration::from_secs(5))).unwrap();

        let reply = gateway
            .complete(&ModelConfig::default(), "Why tides?")
            .await
            .unwrap();

        assert_eq!(reply, "  The moon.\n");
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/generate"));
        assert!(request.contains("Why tides?"));
    }

    #[tokio::test]
    async fn test_missing_model_maps_to_model_not_available() {
        let (endpoint, _server) =
            serve_once("404 Not Found", r#"{"error": "model not found"}"#).await;
        let gateway = OllamaGateway::new(&endpoint, None).unwrap();

        let result = gateway.complete(&ModelConfig::new("nope"), "hi").await;

        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(m)) if m == "nope"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_failed() {
        let (endpoint, _server) =
            serve_once("500 Internal Server Error", r#"{"error": "out of memory"}"#).await;
        let gateway = OllamaGateway::new(&endpoint, None).unwrap();

        let result = gateway.complete(&ModelConfig::default(), "hi").await;

        match result {
            Err(GatewayError::RequestFailed(msg)) => assert!(msg.contains("out of memory")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let (endpoint, _server) = serve_once("200 OK", r#"{"unexpected": 1}"#).await;
        let gateway = OllamaGateway::new(&endpoint, None).unwrap();

        let result = gateway.complete(&ModelConfig::default(), "hi").await;

        assert!(matches!(result, Err(GatewayError::InvalidResponse(_))));
    }
}
