use crate::utils::transcript::Transcript;
use serde::{Deserialize, Serialize};

/// A person with a fixed set of skills. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: u32,
    skills: Vec<String>,
}

impl Person {
    /// Builds the record and announces it with `Created <name>`.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        age: u32,
        skills: impl IntoIterator<Item = S>,
        transcript: &Transcript,
    ) -> Self {
        let person = Self {
            name: name.into(),
            age,
            skills: skills.into_iter().map(Into::into).collect(),
        };
        transcript.line(format!("Created {}", person.name));
        person
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// Payload returned by a (simulated) fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub status: String,
    pub data: String,
}

impl FetchResult {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            data: "Some data".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
