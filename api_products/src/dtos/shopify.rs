use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UnsyncAllRequest {
    #[serde(rename = "storeId")]
    pub store_id: String,
}

#[derive(Debug, Serialize)]
pub struct UnsyncAllResponse {
    pub count: u64,
}
