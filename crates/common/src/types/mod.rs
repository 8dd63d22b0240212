use serde::{Deserialize, Serialize};

/// Body returned by `GET /health`.
///
/// Exactly one of `database` / `message` is present depending on `status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Health {
    pub fn connected() -> Self {
        Self { status: "ok".into(), database: Some("connected".into()), message: None }
    }

    pub fn database_failed() -> Self {
        Self { status: "error".into(), database: None, message: Some("Database connection failed".into()) }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Error body shared by every failing endpoint: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
