use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// A person who plays in competitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nickname: None,
        }
    }
}

/// Identity and display name, as carried by result rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for PlayerRef {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
        }
    }
}
