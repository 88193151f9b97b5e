use crate::error::{Error, Result};
use hp_core::server::payload::predict_request::PredictRequest;
use hp_core::server::payload::predict_response::PredictResponse;
use hp_core::server::routes::predict_url;
use reqwest::{Client, Response};
use std::future::Future;

/// Anything able to answer a prediction request. The form controller only
/// talks to this trait, so tests can substitute the HTTP transport.
pub trait PredictionService {
    fn predict(
        &self,
        request: &PredictRequest,
    ) -> impl Future<Output = Result<PredictResponse>> + Send;
}

pub struct PredictorClient {
    client: Client,
    base_url: String,
    predict_url: String,
}

impl PredictorClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        PredictorClient {
            client,
            base_url: base_url.to_string(),
            predict_url: predict_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = res.map_err(|e| self.map_transport_error(e))?;
        match res.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => Err(self.map_transport_error(e)),
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_connect() {
            Error::ConnectionRefused(self.base_url.clone())
        } else {
            Error::Http(e)
        }
    }
}

impl PredictionService for PredictorClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        let result = self
            .client
            .post(&self.predict_url)
            .json(request)
            .send()
            .await;
        let text = self.handle_response(result).await?;
        let response = serde_json::from_str::<PredictResponse>(&text)
            .map_err(hp_core::error::Error::from)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_predict_posts_single_triple() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict/"))
            .and(body_json(json!({
                "sizes": [1200.0],
                "bedrooms": [3.0],
                "cities": ["Bangalore"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Prediction results",
                "results": [{ "predicted_price": "₹85.40 L", "predicted_price_raw": 8540000 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PredictorClient::new(&server.uri());
        let response = client
            .predict(&PredictRequest::single(1200.0, 3.0, "Bangalore"))
            .await
            .unwrap();
        assert_eq!(response.first_price().unwrap().to_string(), "₹85.40 L");
    }

    #[tokio::test]
    async fn test_predict_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PredictorClient::new(&server.uri());
        let result = client
            .predict(&PredictRequest::single(900.0, 2.0, "Delhi"))
            .await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_predict_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>sleeping</html>"))
            .mount(&server)
            .await;

        let client = PredictorClient::new(&server.uri());
        let result = client
            .predict(&PredictRequest::single(900.0, 2.0, "Delhi"))
            .await;
        assert!(matches!(result, Err(Error::Core(_))));
    }

    #[tokio::test]
    async fn test_predict_connection_refused() {
        // port 9 (discard) is not listening in test environments
        let client = PredictorClient::new("http://127.0.0.1:9");
        let result = client
            .predict(&PredictRequest::single(900.0, 2.0, "Delhi"))
            .await;
        assert!(matches!(result, Err(Error::ConnectionRefused(_))));
    }
}
