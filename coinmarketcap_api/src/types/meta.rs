use serde::{Deserialize, Serialize};

/// Status block attached to every CoinMarketCap response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub timestamp: String,
    /// Zero on success; the vendor error code otherwise.
    #[serde(default)]
    pub error_code: i64,
    pub error_message: Option<String>,
    #[serde(default)]
    pub elapsed: i64,
    #[serde(default)]
    pub credit_count: i64,
    pub notice: Option<String>,
}

impl Status {
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }
}

/// Response envelope: `{ "status": {...}, "data": ... }`.
///
/// `data` is absent when the request failed.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Status,
    pub data: Option<T>,
}
