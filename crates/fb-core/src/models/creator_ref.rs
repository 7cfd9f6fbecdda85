use serde::{Deserialize, Serialize};

/// Reference to the user who created a feedback item.
///
/// The backend emits either the numeric user id or the username, depending
/// on which serializer produced the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatorRef {
    Id(i64),
    Username(String),
}

impl std::fmt::Display for CreatorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "user #{}", id),
            Self::Username(name) => write!(f, "{}", name),
        }
    }
}
