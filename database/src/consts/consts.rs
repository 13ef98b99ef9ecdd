use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(pub i32);

impl PersonId {
    pub fn to_number(self) -> i32 {
        self.0
    }

    /// `None` once the id space (`i32::MAX`, the SERIAL ceiling) is used up
    pub fn increment(&self) -> Option<PersonId> {
        self.0.checked_add(1).map(PersonId)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const START_AT_ID: PersonId = PersonId(1);

// Column sizes of the person table
pub const NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_ADDRESS_MAX_LENGTH: usize = 50;
pub const STREET_ADDRESS_MAX_LENGTH: usize = 100;
pub const CITY_MAX_LENGTH: usize = 50;
pub const STATE_MAX_LENGTH: usize = 2;
pub const ZIP_CODE_MAX_LENGTH: usize = 5;
