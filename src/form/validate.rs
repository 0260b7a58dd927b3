// Field validation for the book form
//
// Rules mirror the server's expectations: name 4-100 characters,
// description 10-150 characters, price required and numeric. Lengths are
// counted in characters so multibyte input behaves like a browser field.
//
// Messages come from the configurable `[messages]` set (Indonesian by
// default) rather than being baked into the rules.

use crate::config::Messages;
use std::collections::BTreeMap;

pub const NAME_MIN: usize = 4;
pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 150;

/// The three form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Description,
    Price,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Price => "Price",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Input Book Name",
            Field::Description => "Input Book Description",
            Field::Price => "Input Book Price",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Description,
            Field::Description => Field::Price,
            Field::Price => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Price,
            Field::Description => Field::Name,
            Field::Price => Field::Description,
        }
    }
}

/// Errors keyed by field. Empty map means the form is schema-valid.
pub type Errors = BTreeMap<Field, String>;

/// Validate all three fields at once.
///
/// `price` is the raw entry string; parse failure is a field error here,
/// never a panic downstream.
pub fn validate(name: &str, description: &str, price: &str, messages: &Messages) -> Errors {
    let mut errors = Errors::new();

    let name_len = name.chars().count();
    if name.is_empty() {
        errors.insert(Field::Name, messages.name_required.clone());
    } else if name_len < NAME_MIN {
        errors.insert(Field::Name, messages.name_min.clone());
    } else if name_len > NAME_MAX {
        errors.insert(Field::Name, messages.name_max.clone());
    }

    let description_len = description.chars().count();
    if description.is_empty() {
        errors.insert(Field::Description, messages.description_required.clone());
    } else if description_len < DESCRIPTION_MIN {
        errors.insert(Field::Description, messages.description_min.clone());
    } else if description_len > DESCRIPTION_MAX {
        errors.insert(Field::Description, messages.description_max.clone());
    }

    if price.trim().is_empty() {
        errors.insert(Field::Price, messages.price_required.clone());
    } else if price.trim().parse::<f64>().is_err() {
        errors.insert(Field::Price, messages.price_numeric.clone());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, description: &str, price: &str) -> Errors {
        validate(name, description, price, &Messages::default())
    }

    const GOOD_DESC: &str = "Sebuah deskripsi yang cukup panjang";

    #[test]
    fn valid_input_has_no_errors() {
        let errors = check("Laskar Pelangi", GOOD_DESC, "85000");
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn name_length_boundaries() {
        assert!(check("abc", GOOD_DESC, "10").contains_key(&Field::Name));
        assert!(!check("abcd", GOOD_DESC, "10").contains_key(&Field::Name));

        let max = "a".repeat(NAME_MAX);
        assert!(!check(&max, GOOD_DESC, "10").contains_key(&Field::Name));
        let over = "a".repeat(NAME_MAX + 1);
        assert!(check(&over, GOOD_DESC, "10").contains_key(&Field::Name));
    }

    #[test]
    fn empty_name_reports_required_message() {
        let errors = check("", GOOD_DESC, "10");
        assert_eq!(errors[&Field::Name], Messages::default().name_required);
    }

    #[test]
    fn description_length_boundaries() {
        assert!(check("Buku A", "terlalu", "10").contains_key(&Field::Description));
        assert!(!check("Buku A", "cukup puas.", "10").contains_key(&Field::Description));

        let over = "d".repeat(DESCRIPTION_MAX + 1);
        assert!(check("Buku A", &over, "10").contains_key(&Field::Description));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // four characters, more than four bytes
        assert!(!check("béné", GOOD_DESC, "10").contains_key(&Field::Name));
    }

    #[test]
    fn price_must_be_present_and_numeric() {
        let messages = Messages::default();

        let errors = check("Buku A", GOOD_DESC, "");
        assert_eq!(errors[&Field::Price], messages.price_required);

        let errors = check("Buku A", GOOD_DESC, "12rb");
        assert_eq!(errors[&Field::Price], messages.price_numeric);

        assert!(!check("Buku A", GOOD_DESC, "12.50").contains_key(&Field::Price));
    }

    #[test]
    fn errors_accumulate_per_field() {
        let errors = check("", "", "");
        assert_eq!(errors.len(), 3);
    }
}
