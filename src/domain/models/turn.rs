#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Who authored a turn. Serialized lowercase to match the service contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a conversation. Immutable once created;
/// ordering inside a history is chronological and append-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: &str) -> Turn {
        return Turn {
            role: Role::User,
            content: content.to_string(),
        };
    }

    pub fn assistant(content: &str) -> Turn {
        return Turn {
            role: Role::Assistant,
            content: content.to_string(),
        };
    }
}
