//! Display target models
//!
//! A display target is the set of text fields one fetch writes into, plus the
//! id of the canvas its chart is drawn on.

/// Placeholder shown while a request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Styling class of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStyle {
    #[default]
    Plain,
    Loading,
    Positive,
    Negative,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub text: String,
    pub style: FieldStyle,
}

impl TextField {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.style = FieldStyle::Plain;
    }

    pub fn set_styled(&mut self, text: impl Into<String>, style: FieldStyle) {
        self.text = text.into();
        self.style = style;
    }

    /// Replace the text and mark the field as an error.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_styled(text, FieldStyle::Error);
    }

    pub fn set_loading(&mut self) {
        self.set_styled(LOADING_TEXT, FieldStyle::Loading);
    }

    pub fn clear(&mut self) {
        self.set("");
    }

    pub fn is_error(&self) -> bool {
        self.style == FieldStyle::Error
    }

    /// Text with a style marker, for the terminal board
    pub fn render(&self) -> String {
        if self.text.is_empty() {
            return String::new();
        }
        match self.style {
            FieldStyle::Plain => self.text.clone(),
            FieldStyle::Loading => format!("⏳ {}", self.text),
            FieldStyle::Positive => format!("▲ {}", self.text),
            FieldStyle::Negative => format!("▼ {}", self.text),
            FieldStyle::Error => format!("❌ {}", self.text),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisplayTarget {
    pub name: TextField,
    pub price: TextField,
    pub change: TextField,
    pub error: TextField,
    pub canvas_id: String,
}

impl DisplayTarget {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        }
    }

    /// Reset the text fields before a new fetch; the price shows the loading placeholder.
    pub fn begin_loading(&mut self, name: &str) {
        self.price.set_loading();
        self.change.clear();
        self.name.set(name);
        self.error.clear();
    }
}
