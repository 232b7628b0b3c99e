// Cloudinary upload API response types
// Author: kelexine (https://github.com/kelexine)

use serde::Deserialize;

/// Successful upload response (only the fields we read).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

impl UploadResponse {
    /// Prefer the HTTPS URL when the host returns both.
    pub fn public_url(&self) -> Option<&str> {
        self.secure_url.as_deref().or(self.url.as_deref())
    }
}

/// Error envelope, e.g. `{"error":{"message":"Invalid Signature ..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadErrorResponse {
    pub error: UploadErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_prefers_https() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{"url":"http://res.cloudinary.com/a.jpg","secure_url":"https://res.cloudinary.com/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(resp.public_url(), Some("https://res.cloudinary.com/a.jpg"));
    }

    #[test]
    fn test_public_url_falls_back() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"url":"http://res.cloudinary.com/a.jpg"}"#).unwrap();
        assert_eq!(resp.public_url(), Some("http://res.cloudinary.com/a.jpg"));

        let empty: UploadResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.public_url(), None);
    }
}
