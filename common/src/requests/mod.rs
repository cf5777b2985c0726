//! Request payloads for the JSON tool endpoints. Field names follow the
//! backend contract, which identifies the caller by the auth provider's
//! opaque id under `clerkId`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleRequest {
    #[serde(rename = "clerkId")]
    pub clerk_id: String,
    pub prompt: String,
}

/// Shared shape for the single-text tools (humanize, grammar, paraphrase,
/// plagiarism).
#[derive(Debug, Clone, Serialize)]
pub struct TextToolRequest {
    #[serde(rename = "clerkId")]
    pub clerk_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoRequest {
    #[serde(rename = "clerkId")]
    pub clerk_id: String,
    pub content: String,
    pub keywords: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerateRequest {
    #[serde(rename = "clerkId")]
    pub clerk_id: String,
    pub prompt: String,
    pub style: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextToPdfRequest {
    pub title: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_field_serializes_as_clerk_id() {
        let req = ArticleRequest {
            clerk_id: "user_42".into(),
            prompt: "Benefits of meditation".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["clerkId"], "user_42");
        assert_eq!(json["prompt"], "Benefits of meditation");
        assert!(json.get("clerk_id").is_none());
    }

    #[test]
    fn seo_request_carries_keywords() {
        let req = SeoRequest {
            clerk_id: "u".into(),
            content: "body".into(),
            keywords: "rust, wasm".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["keywords"], "rust, wasm");
    }
}
