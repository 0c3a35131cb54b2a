use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `people` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body accepted by create and update. Missing or null fields become empty
/// strings; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PersonInput {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    // Type-checked but never used: storage owns the id.
    #[serde(default, rename = "id")]
    _id: Option<i64>,
}

impl PersonInput {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn into_person(self, id: i64) -> Person {
        Person {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}
