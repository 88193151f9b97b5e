use crate::client::PredictorClient;
use crate::error::Result;
use crate::form::controller::PredictionForm;
use crate::prompt::form::{
    FormAction, prompt_action, prompt_bedrooms, prompt_city, prompt_size, render,
};

pub async fn handler(client: PredictorClient) -> Result<()> {
    let mut form = PredictionForm::new(client);
    println!(
        "🏠 Indian House Price Predictor ({})",
        form.service().base_url()
    );
    form.set_size(prompt_size("")?);
    form.set_bedrooms(prompt_bedrooms("")?);
    form.set_city(prompt_city(&form.state().city)?);

    loop {
        render(form.state());
        match prompt_action()? {
            FormAction::Predict => {
                println!("Predicting...");
                form.submit().await;
            }
            FormAction::EditSize => {
                let size = prompt_size(&form.state().size)?;
                form.set_size(size);
            }
            FormAction::EditBedrooms => {
                let bedrooms = prompt_bedrooms(&form.state().bedrooms)?;
                form.set_bedrooms(bedrooms);
            }
            FormAction::EditCity => {
                let city = prompt_city(&form.state().city)?;
                form.set_city(city);
            }
            FormAction::Reset => form.reset(),
            FormAction::Quit => break,
        }
    }
    Ok(())
}
