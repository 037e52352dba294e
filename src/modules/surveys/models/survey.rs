use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student survey record
///
/// `id` is absent until the store assigns one on first save and is never
/// reassigned afterwards. The text fields carry no format constraints at
/// this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Survey {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}
