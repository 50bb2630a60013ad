//! Request and response types for the completion service API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: usize,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_expected_keys() {
        let req = GenerateRequest {
            prompt: "write a script".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 2048,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["prompt"], "write a script");
        assert_eq!(json["model"], "claude-sonnet-4-20250514");
        assert_eq!(json["max_tokens"], 2048);
    }

    #[test]
    fn response_deserializes_text() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"text":"| AUDIO | VISUAL |"}"#).unwrap();
        assert_eq!(resp.text, "| AUDIO | VISUAL |");
    }
}
