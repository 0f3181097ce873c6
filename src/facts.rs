use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const MODEL: &str = "gemini-3-flash-preview";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Birth-date trivia produced by the generative service.
///
/// Opaque pass-through payload: contents are only checked for structural
/// shape, never for meaning.
#[derive(Debug, Deserialize)]
pub struct FunFacts {
    #[serde(rename = "historicalEvents")]
    pub historical_events: Vec<String>,
    #[serde(rename = "personalityTraits")]
    pub personality_traits: String,
    #[serde(rename = "famousBirthdays")]
    pub famous_birthdays: Vec<String>,
    #[serde(rename = "zodiacWisdom")]
    pub zodiac_wisdom: String,
}

#[derive(Clone)]
pub struct FactsClient {
    api_key: Arc<String>,
    http: Arc<Client>,
}

impl FactsClient {
    /// Create a Gemini client using the API_KEY env variable.
    pub fn new() -> Result<Self> {
        let api_key = std::env::var("API_KEY").context("API_KEY environment variable not set")?;
        Ok(Self {
            api_key: Arc::new(api_key),
            http: Arc::new(Client::new()),
        })
    }

    /// Fetch trivia for a birth date: one best-effort request, no retries.
    ///
    /// The model is asked for JSON constrained to the `FunFacts` schema; the
    /// first candidate's text part is parsed as that payload.
    pub async fn fun_facts(&self, birthdate: NaiveDate) -> Result<FunFacts> {
        let date_str = format!(
            "ngày {} tháng {} năm {}",
            birthdate.day(),
            birthdate.month(),
            birthdate.year()
        );
        let prompt = format!(
            "Cung cấp các sự thật thú vị và hiểu biết cho một người sinh {date_str}. \
             Tất cả câu trả lời phải bằng tiếng Việt. \
             Bao gồm các sự kiện lịch sử, đặc điểm tính cách dựa trên ngày sinh \
             và một vài người nổi tiếng có cùng ngày sinh."
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "historicalEvents": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Danh sách 3 sự kiện lịch sử lớn đã xảy ra vào ngày/tháng/năm cụ thể này."
                        },
                        "personalityTraits": {
                            "type": "STRING",
                            "description": "Một đoạn văn ngắn, tích cực về tính cách của người sinh vào ngày này dựa trên thần số học và chiêm tinh học."
                        },
                        "famousBirthdays": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Danh sách 3-4 người nổi tiếng sinh vào ngày này."
                        },
                        "zodiacWisdom": {
                            "type": "STRING",
                            "description": "Một lời khuyên hoặc trí tuệ cụ thể dựa trên cung hoàng đạo của họ cho năm hiện tại."
                        }
                    },
                    "required": ["historicalEvents", "personalityTraits", "famousBirthdays", "zodiacWisdom"]
                }
            }
        });

        let url = format!("{API_BASE}/{MODEL}:generateContent");
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &*self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Network error sending generateContent request: {e}"))?;

        let status = resp.status();

        // Parse JSON (even for non-2xx to capture error payloads)
        let json: Value = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON from Gemini: {e}"))?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Gemini API returned HTTP {}: {json:#}",
                status.as_u16()
            ));
        }

        #[derive(Deserialize)]
        struct GenerateResponse {
            candidates: Option<Vec<Candidate>>,
        }
        #[derive(Deserialize)]
        struct Candidate {
            content: Option<CandidateContent>,
        }
        #[derive(Deserialize)]
        struct CandidateContent {
            parts: Option<Vec<Part>>,
        }
        #[derive(Deserialize)]
        struct Part {
            text: Option<String>,
        }

        let parsed: GenerateResponse = serde_json::from_value(json)
            .context("Failed to deserialize generateContent response")?;

        let text = parsed
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) })
            .and_then(|p| p.text)
            .ok_or_else(|| anyhow::anyhow!("Gemini response contained no text part"))?;

        let facts: FunFacts = serde_json::from_str(text.trim())
            .context("Gemini returned text that does not match the fun-facts schema")?;

        Ok(facts)
    }
}
