use crate::client::PredictionService;
use crate::error::{Error, Result};
use crate::form::controller::PredictionForm;
use crate::form::state::FormPhase;

pub async fn handle<S: PredictionService>(
    service: S,
    size: String,
    bedrooms: String,
    city: String,
) -> Result<()> {
    let mut form = PredictionForm::new(service);
    form.set_size(size);
    form.set_bedrooms(bedrooms);
    form.set_city(city);

    let state = form.submit().await;
    match state.phase() {
        FormPhase::DisplayingResult => {
            println!("Estimated price: {}", state.price);
            println!(
                "{} sq ft · {} bedrooms · {}",
                state.size, state.bedrooms, state.city
            );
            Ok(())
        }
        _ => Err(Error::Prediction(state.error.clone())),
    }
}
