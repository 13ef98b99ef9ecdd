pub mod person;

pub use person::PersonValidator;

/// Checks a candidate value, returning human readable error messages.
/// An empty list means the value is valid.
pub trait Validator<T> {
    fn validate(&self, value: &T) -> Vec<String>;
}
