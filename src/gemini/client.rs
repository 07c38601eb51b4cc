use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GeminiError, TextGenerator};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Panggilan keluar tidak boleh menggantung tanpa batas
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Klien HTTP untuk endpoint `generateContent` Gemini.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Gagal membangun HTTP client");

        Self {
            client,
            api_key,
            model,
        }
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model, api_key
        );

        // Seluruh prompt dikirim sebagai satu giliran user, tanpa
        // system_instruction atau generationConfig terpisah
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!("Memanggil Gemini API dengan model {}", self.model);

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let body: GenerateContentResponse = res.json().await?;
        extract_text(body)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

// Ambil teks dari kandidat pertama; bagian tanpa teks diabaikan.
fn extract_text(body: GenerateContentResponse) -> Result<String, GeminiError> {
    let parts = body
        .candidates
        .into_iter()
        .next()
        .and_then(|kandidat| kandidat.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();

    if text.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    Ok(text)
}

// --- Tipe wire generateContent ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn respons(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn teks_kandidat_pertama_diambil() {
        let body = respons(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "<div>Laporan</div>" }]
                },
                "finishReason": "STOP"
            }]
        }));

        assert_eq!(extract_text(body).unwrap(), "<div>Laporan</div>");
    }

    #[test]
    fn beberapa_bagian_teks_digabung() {
        let body = respons(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "<div>" }, { "text": "</div>" }]
                }
            }]
        }));

        assert_eq!(extract_text(body).unwrap(), "<div></div>");
    }

    #[test]
    fn bagian_tanpa_teks_diabaikan() {
        let body = respons(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png" } },
                        { "text": "oke" }
                    ]
                }
            }]
        }));

        assert_eq!(extract_text(body).unwrap(), "oke");
    }

    #[test]
    fn tanpa_kandidat_adalah_error() {
        let body = respons(json!({ "candidates": [] }));

        assert!(matches!(extract_text(body), Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn respons_tanpa_field_candidates_adalah_error() {
        let body = respons(json!({}));

        assert!(matches!(extract_text(body), Err(GeminiError::EmptyResponse)));
    }
}
