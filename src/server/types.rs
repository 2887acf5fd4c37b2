use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateCsvRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateCsvResponse {
    pub csv_content: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadPackageRequest {
    #[serde(default)]
    pub csv_content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
