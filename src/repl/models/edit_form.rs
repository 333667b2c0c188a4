//! # Edit Form Model
//!
//! Text buffers and validation for the product edit modal.

use crate::repl::models::product::{ProductEdit, ProductId, ProductRecord};
use std::fmt;

/// Editable fields of the modal, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Price,
    Stock,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Price, FormField::Stock];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Price,
            FormField::Price => FormField::Stock,
            FormField::Stock => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Stock,
            FormField::Price => FormField::Title,
            FormField::Stock => FormField::Price,
        }
    }

    /// Whether the field accepts this character at all
    fn accepts(&self, current: &str, ch: char) -> bool {
        match self {
            FormField::Title => !ch.is_control(),
            FormField::Price => ch.is_ascii_digit() || (ch == '.' && !current.contains('.')),
            FormField::Stock => ch.is_ascii_digit(),
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(FormField),
    NotANumber(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Required(field) | FieldError::NotANumber(field) => *field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => {
                write!(f, "Please input the {}!", field.label().to_lowercase())
            }
            FieldError::NotANumber(FormField::Stock) => write!(f, "Stock must be a whole number"),
            FieldError::NotANumber(field) => write!(f, "{} must be a number", field.label()),
        }
    }
}

/// All validation failures of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// State of an open edit session
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    record_id: ProductId,
    original_title: String,
    title: String,
    price: String,
    stock: String,
    focused: FormField,
    errors: FormErrors,
}

impl EditForm {
    /// Open a form pre-filled with the record's current values
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            record_id: record.id,
            original_title: record.title.clone(),
            title: record.title.clone(),
            price: record.price.to_string(),
            stock: record.stock.to_string(),
            focused: FormField::Title,
            errors: FormErrors::default(),
        }
    }

    pub fn record_id(&self) -> ProductId {
        self.record_id
    }

    /// Modal caption, fixed to the title the record had when opened
    pub fn caption(&self) -> String {
        format!("Product Details: {}", self.original_title)
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        *self.value_mut(field) = value.to_string();
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Append a character to the focused field. Returns false when the field rejects it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let field = self.focused;
        if !field.accepts(self.value(field), ch) {
            return false;
        }
        self.value_mut(field).push(ch);
        true
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) -> bool {
        let field = self.focused;
        self.value_mut(field).pop().is_some()
    }

    /// Check every field; on failure the messages are kept for inline display
    pub fn validate(&mut self) -> Result<ProductEdit, FormErrors> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(FieldError::Required(FormField::Title));
        }

        let price = if self.price.trim().is_empty() {
            errors.push(FieldError::Required(FormField::Price));
            None
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
                _ => {
                    errors.push(FieldError::NotANumber(FormField::Price));
                    None
                }
            }
        };

        let stock = if self.stock.trim().is_empty() {
            errors.push(FieldError::Required(FormField::Stock));
            None
        } else {
            match self.stock.trim().parse::<u32>() {
                Ok(stock) => Some(stock),
                Err(_) => {
                    errors.push(FieldError::NotANumber(FormField::Stock));
                    None
                }
            }
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.is_empty() => {
                self.errors = FormErrors::default();
                Ok(ProductEdit {
                    id: self.record_id,
                    title: self.title.clone(),
                    price,
                    stock,
                })
            }
            _ => {
                self.errors = FormErrors(errors);
                Err(self.errors.clone())
            }
        }
    }
}
