use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

/// A person record. Field names serialize in camelCase so the same type binds
/// directly from the HTML forms (`firstName`, `emailAddress`, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    /// `None` until the store assigns one on create
    pub person_id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Person {
    pub fn new(first_name: String, last_name: String, email_address: String) -> Self {
        Person {
            person_id: None,
            first_name,
            last_name,
            email_address,
            ..Default::default()
        }
    }

    pub fn with_address(
        mut self,
        street_address: String,
        city: String,
        state: String,
        zip_code: String,
    ) -> Self {
        self.street_address = street_address;
        self.city = city;
        self.state = state;
        self.zip_code = zip_code;
        self
    }

    pub fn with_id(mut self, person_id: PersonId) -> Self {
        self.person_id = Some(person_id);
        self
    }

    pub fn new_test() -> Self {
        Person::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
        )
        .with_address(
            "1 Main Street".to_string(),
            "Boston".to_string(),
            "MA".to_string(),
            "02110".to_string(),
        )
    }

    /// "Last, First" as shown on the listing and confirmation pages
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_from_camel_case_fields_with_missing_fields_defaulted() {
        let json = r#"{"firstName":"Jane","lastName":"Doe","emailAddress":"jane@example.com"}"#;

        let person: Person = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(person.person_id, None);
        assert_eq!(person.first_name, "Jane");
        assert_eq!(person.city, "");
    }

    #[test]
    fn person_id_serializes_as_a_plain_number() {
        let person = Person::new_test().with_id(PersonId(7));

        let value = serde_json::to_value(&person).expect("should serialize");

        assert_eq!(value["personId"], serde_json::json!(7));
        assert_eq!(value["zipCode"], serde_json::json!("02110"));
    }
}
