use hp_core::types::city::DEFAULT_CITY;

/// Snapshot of the prediction form. Every user action or network completion
/// produces a new value; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub size: String,
    pub bedrooms: String,
    pub city: String,
    pub price: String,
    pub error: String,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    DisplayingResult,
    DisplayingError,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            size: String::new(),
            bedrooms: String::new(),
            city: DEFAULT_CITY.to_string(),
            price: String::new(),
            error: String::new(),
            is_loading: false,
        }
    }
}

impl FormState {
    pub fn with_size(&self, size: impl Into<String>) -> Self {
        FormState {
            size: size.into(),
            ..self.clone()
        }
    }

    pub fn with_bedrooms(&self, bedrooms: impl Into<String>) -> Self {
        FormState {
            bedrooms: bedrooms.into(),
            ..self.clone()
        }
    }

    pub fn with_city(&self, city: impl Into<String>) -> Self {
        FormState {
            city: city.into(),
            ..self.clone()
        }
    }

    pub(crate) fn with_error(&self, error: impl Into<String>) -> Self {
        FormState {
            error: error.into(),
            ..self.clone()
        }
    }

    pub(crate) fn loading(&self) -> Self {
        FormState {
            error: String::new(),
            is_loading: true,
            ..self.clone()
        }
    }

    pub(crate) fn settled_with_price(&self, price: impl Into<String>) -> Self {
        FormState {
            price: price.into(),
            is_loading: false,
            ..self.clone()
        }
    }

    pub(crate) fn settled_with_error(&self, error: impl Into<String>) -> Self {
        FormState {
            error: error.into(),
            is_loading: false,
            ..self.clone()
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_loading {
            FormPhase::Loading
        } else if !self.error.is_empty() {
            FormPhase::DisplayingError
        } else if !self.price.is_empty() {
            FormPhase::DisplayingResult
        } else {
            FormPhase::Idle
        }
    }
}
