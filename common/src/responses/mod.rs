//! Response payloads. Every JSON response from the backend is wrapped in a
//! `success` boolean envelope; error bodies carry at most one of
//! `message`, `error`, or `details`.

use serde::Deserialize;

use crate::model::payment::PaymentOrder;
use crate::model::plagiarism::PlagiarismReport;

/// Implemented by every enveloped response so the transport layer can turn
/// a 2xx-with-`success:false` body into a request failure without knowing
/// the concrete payload.
pub trait Envelope {
    fn is_success(&self) -> bool;
}

macro_rules! envelope {
    ($ty:ty) => {
        impl Envelope for $ty {
            fn is_success(&self) -> bool {
                self.success
            }
        }
    };
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub success: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub credits_remaining: Option<u64>,
}
envelope!(ArticleResponse);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResponse {
    pub success: bool,
    #[serde(default)]
    pub humanized_text: String,
}
envelope!(HumanizeResponse);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarResponse {
    pub success: bool,
    #[serde(default)]
    pub corrected_text: String,
}
envelope!(GrammarResponse);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParaphraseResponse {
    pub success: bool,
    #[serde(default)]
    pub paraphrased_text: String,
}
envelope!(ParaphraseResponse);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoResponse {
    pub success: bool,
    #[serde(default)]
    pub optimized_content: String,
}
envelope!(SeoResponse);

#[derive(Debug, Clone, Deserialize)]
pub struct PlagiarismResponse {
    pub success: bool,
    pub report: Option<PlagiarismReport>,
}
envelope!(PlagiarismResponse);

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionResponse {
    pub success: bool,
    #[serde(default)]
    pub caption: String,
}
envelope!(CaptionResponse);

/// Shared by image generation and background removal: `image` is a data
/// URI or URL, ready to render and download as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    pub success: bool,
    #[serde(default)]
    pub image: String,
}
envelope!(ImageResponse);

#[derive(Debug, Clone, Deserialize)]
pub struct PdfTextResponse {
    pub success: bool,
    #[serde(default)]
    pub text: String,
    pub info: Option<PdfInfo>,
}
envelope!(PdfTextResponse);

/// Extraction metadata reported alongside PDF text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfInfo {
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditsResponse {
    pub success: bool,
    pub data: Option<CreditData>,
}
envelope!(CreditsResponse);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditData {
    pub credit_balance: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Option<PaymentOrder>,
}
envelope!(OrderResponse);

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
}
envelope!(VerifyResponse);

/// Best-effort shape of a non-2xx JSON body. The server uses whichever of
/// the three fields its handler happened to set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub details: Option<String>,
}

impl ErrorBody {
    /// First populated field, checked in `message`, `error`, `details`
    /// order.
    pub fn first_message(&self) -> Option<String> {
        [&self.message, &self.error, &self.details]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_response_reads_camel_case_credits() {
        let resp: ArticleResponse = serde_json::from_str(
            r##"{"success": true, "content": "# Hello", "creditsRemaining": 49}"##,
        )
        .unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.credits_remaining, Some(49));
    }

    #[test]
    fn credits_response_nests_balance() {
        let resp: CreditsResponse =
            serde_json::from_str(r#"{"success": true, "data": {"creditBalance": 1250}}"#).unwrap();
        assert_eq!(resp.data.unwrap().credit_balance, 1250);
    }

    #[test]
    fn error_body_prefers_message_then_error_then_details() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "bad font", "details": "negative margin"}"#).unwrap();
        assert_eq!(body.first_message().as_deref(), Some("bad font"));

        let body: ErrorBody = serde_json::from_str(r#"{"details": "negative margin"}"#).unwrap();
        assert_eq!(body.first_message().as_deref(), Some("negative margin"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert_eq!(body.first_message(), None);
    }

    #[test]
    fn missing_result_fields_default_empty() {
        let resp: HumanizeResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.is_success());
        assert!(resp.humanized_text.is_empty());
    }
}
