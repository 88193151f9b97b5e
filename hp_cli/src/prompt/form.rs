use crate::error::Result;
use crate::form::state::FormState;
use hp_core::types::city;
use inquire::{InquireError, Select, Text};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Predict,
    EditSize,
    EditBedrooms,
    EditCity,
    Reset,
    Quit,
}

impl FormAction {
    pub const ALL: [FormAction; 6] = [
        FormAction::Predict,
        FormAction::EditSize,
        FormAction::EditBedrooms,
        FormAction::EditCity,
        FormAction::Reset,
        FormAction::Quit,
    ];
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormAction::Predict => "🔮 Predict Price",
            FormAction::EditSize => "📐 House Size",
            FormAction::EditBedrooms => "🛏️ Number of Bedrooms",
            FormAction::EditCity => "🏙️ City/Location",
            FormAction::Reset => "🔄 Reset",
            FormAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Asks for the next action. Escape or Ctrl-C means quit.
pub fn prompt_action() -> Result<FormAction> {
    action_or_quit(Select::new("What next?", FormAction::ALL.to_vec()).prompt())
}

fn action_or_quit(answer: std::result::Result<FormAction, InquireError>) -> Result<FormAction> {
    match answer {
        Ok(action) => Ok(action),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(FormAction::Quit)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn prompt_size(current: &str) -> Result<String> {
    Ok(Text::new("House size (sq ft):")
        .with_placeholder("e.g., 1200")
        .with_initial_value(current)
        .prompt()?)
}

pub fn prompt_bedrooms(current: &str) -> Result<String> {
    Ok(Text::new("Number of bedrooms:")
        .with_placeholder("e.g., 3")
        .with_initial_value(current)
        .prompt()?)
}

pub fn prompt_city(current: &str) -> Result<String> {
    let cities = city::all();
    let cursor = cities
        .iter()
        .position(|name| *name == current)
        .unwrap_or(city::default_index());
    let selected = Select::new("City/Location:", cities.to_vec())
        .with_starting_cursor(cursor)
        .prompt()?;
    Ok(selected.to_string())
}

pub fn render(state: &FormState) {
    println!();
    println!(
        "📐 {} sq ft | 🛏️ {} | 🏙️ {}",
        or_dash(&state.size),
        or_dash(&state.bedrooms),
        state.city
    );
    if !state.error.is_empty() {
        println!("❌ {}", state.error);
    }
    if !state.price.is_empty() {
        println!("🎉 Estimated House Price: {}", state.price);
    }
    println!();
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
