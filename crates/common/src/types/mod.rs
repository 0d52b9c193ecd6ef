use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain acknowledgement body, e.g. `{"message": "payment succeeded"}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned by delete endpoints.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Deleted {
    pub deleted: bool,
}

impl Default for Deleted {
    fn default() -> Self { Self { deleted: true } }
}
