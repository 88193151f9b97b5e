use crate::client::PredictionService;
use crate::form::state::FormState;
use hp_core::server::payload::predict_request::PredictRequest;
use hp_core::types::city;
use tracing::{debug, error, warn};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid numbers";
pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to get prediction. Please try again.";

/// Drives a [`FormState`] against a prediction service.
pub struct PredictionForm<S> {
    service: S,
    state: FormState,
}

impl<S: PredictionService> PredictionForm<S> {
    pub fn new(service: S) -> Self {
        PredictionForm {
            service,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_size(&mut self, size: impl Into<String>) {
        self.state = self.state.with_size(size);
    }

    pub fn set_bedrooms(&mut self, bedrooms: impl Into<String>) {
        self.state = self.state.with_bedrooms(bedrooms);
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.state = self.state.with_city(city);
    }

    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    /// Validates the current fields and, when they are complete, issues exactly
    /// one prediction request. Failures never escape: they end up in `state().error`.
    pub async fn submit(&mut self) -> &FormState {
        if self.state.is_loading {
            debug!("prediction already in flight, ignoring submit");
            return &self.state;
        }

        let request = match build_request(&self.state) {
            Ok(request) => request,
            Err(message) => {
                self.state = self.state.with_error(message);
                return &self.state;
            }
        };

        if !city::is_known(&self.state.city) {
            warn!("city {} is not in the catalogue", self.state.city);
        }

        self.state = self.state.loading();
        let outcome = self.service.predict(&request).await.and_then(|response| {
            let price = response.first_price()?.to_string();
            Ok(price)
        });

        // settle always clears the loading flag
        self.state = match outcome {
            Ok(price) => {
                debug!("predicted price: {}", price);
                self.state.settled_with_price(price)
            }
            Err(e) => {
                error!("Error: {}", e);
                self.state.settled_with_error(PREDICTION_FAILED_MESSAGE)
            }
        };
        &self.state
    }
}

/// Mirrors the form's presence check, then coerces size and bedrooms to numbers.
fn build_request(state: &FormState) -> std::result::Result<PredictRequest, &'static str> {
    let size = state.size.trim();
    let bedrooms = state.bedrooms.trim();
    let city = state.city.trim();
    if size.is_empty() || bedrooms.is_empty() || city.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }

    let size = parse_number(size).ok_or(INVALID_NUMBER_MESSAGE)?;
    let bedrooms = parse_number(bedrooms).ok_or(INVALID_NUMBER_MESSAGE)?;
    Ok(PredictRequest::single(size, bedrooms, city))
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use hp_core::server::payload::predict_response::PredictResponse;
    use std::sync::Mutex;

    struct FakeService {
        response: std::result::Result<String, String>,
        calls: Mutex<Vec<PredictRequest>>,
    }

    impl FakeService {
        fn answering(body: &str) -> Self {
            FakeService {
                response: Ok(body.to_string()),
                calls: Mutex::new(vec![]),
            }
        }

        fn failing(message: &str) -> Self {
            FakeService {
                response: Err(message.to_string()),
                calls: Mutex::new(vec![]),
            }
        }

        fn calls(&self) -> Vec<PredictRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PredictionService for FakeService {
        async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
            self.calls.lock().unwrap().push(request.clone());
            match &self.response {
                Ok(body) => Ok(serde_json::from_str(body).map_err(hp_core::error::Error::from)?),
                Err(message) => Err(Error::Prediction(message.clone())),
            }
        }
    }

    fn filled_form(service: FakeService) -> PredictionForm<FakeService> {
        let mut form = PredictionForm::new(service);
        form.set_size("1200");
        form.set_bedrooms("3");
        form.set_city("Mumbai");
        form
    }

    #[tokio::test]
    async fn test_missing_size_makes_no_call() {
        let mut form = PredictionForm::new(FakeService::answering("{}"));
        form.set_bedrooms("2");
        let state = form.submit().await.clone();
        assert_eq!(state.error, MISSING_FIELDS_MESSAGE);
        assert!(!state.is_loading);
        assert!(form.service().calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_bedrooms_makes_no_call() {
        let mut form = PredictionForm::new(FakeService::answering("{}"));
        form.set_size("800");
        form.submit().await;
        assert_eq!(form.state().error, MISSING_FIELDS_MESSAGE);
        assert!(form.service().calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_makes_no_call() {
        let mut form = PredictionForm::new(FakeService::answering("{}"));
        form.set_size("big");
        form.set_bedrooms("3");
        form.submit().await;
        assert_eq!(form.state().error, INVALID_NUMBER_MESSAGE);
        assert!(form.service().calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submission_sends_one_coerced_triple() {
        let mut form = filled_form(FakeService::answering(
            r#"{"results":[{"predicted_price":"₹2.10 Cr"}]}"#,
        ));
        form.set_size(" 1500.5 ");
        form.submit().await;

        let calls = form.service().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], PredictRequest::single(1500.5, 3.0, "Mumbai"));
    }

    #[tokio::test]
    async fn test_success_displays_price_verbatim() {
        let mut form = filled_form(FakeService::answering(
            r#"{"results":[{"predicted_price":"₹50,00,000"}]}"#,
        ));
        let state = form.submit().await.clone();
        assert_eq!(state.price, "₹50,00,000");
        assert_eq!(state.error, "");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_failure_sets_generic_message() {
        let mut form = filled_form(FakeService::failing("connection reset"));
        let state = form.submit().await.clone();
        assert_eq!(state.error, PREDICTION_FAILED_MESSAGE);
        assert!(!state.is_loading);
        assert_eq!(form.service().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_results_is_a_failure() {
        let mut form = filled_form(FakeService::answering(r#"{"results":[]}"#));
        form.submit().await;
        assert_eq!(form.state().error, PREDICTION_FAILED_MESSAGE);
        assert_eq!(form.state().price, "");
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_error() {
        let mut form = PredictionForm::new(FakeService::answering(
            r#"{"results":[{"predicted_price":"₹30.00 L"}]}"#,
        ));
        form.submit().await;
        assert_eq!(form.state().error, MISSING_FIELDS_MESSAGE);

        form.set_size("700");
        form.set_bedrooms("1");
        form.submit().await;
        assert_eq!(form.state().error, "");
        assert_eq!(form.state().price, "₹30.00 L");
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let mut form = filled_form(FakeService::answering(
            r#"{"results":[{"predicted_price":"₹50,00,000"}]}"#,
        ));
        form.state = form.state.loading();
        let before = form.state().clone();

        let after = form.submit().await.clone();

        assert_eq!(after, before);
        assert!(after.is_loading);
        assert!(form.service().calls().is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let mut form = filled_form(FakeService::failing("boom"));
        form.submit().await;
        form.reset();
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.state().city, "Delhi");
        assert_eq!(form.service().calls().len(), 1);
    }
}
