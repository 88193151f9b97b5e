pub mod predict_request;
pub mod predict_response;
