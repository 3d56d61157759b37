//! JSON wire types for the Gemini `generateContent` and Files endpoints.
//!
//! # Request shape
//!
//! ```text
//! {
//!   "contents": [{"role": "user", "parts": [{"text": ...}, {"inlineData": ...}, {"fileData": ...}]}],
//!   "systemInstruction": {"parts": [{"text": ...}]},
//!   "generationConfig": {"responseMimeType": "application/json", "responseSchema": {...}},
//!   "tools": [{"googleSearch": {}}]
//! }
//! ```
//!
//! `generationConfig.responseSchema` and the `googleSearch` tool are mutually exclusive:
//! the service rejects requests that carry both. [`GenerateContentRequest::from_service_request`]
//! derives exactly one of them from the request's [`ResponseContract`].

use hookline_core::EncodedPart;
use hookline_interface::{ContentPart, ResponseContract, ServiceRequest, UploadedFile};
use serde::{Deserialize, Serialize};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns (a single user turn here)
    pub contents: Vec<Content>,

    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Output constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Tools available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

/// A turn of content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// "user" or "model"; omitted for system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// Text
    Text {
        /// The text
        text: String,
    },
    /// Base64 bytes
    InlineData {
        /// Payload
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Reference to an uploaded file
    FileData {
        /// Reference
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
    /// Any part shape this client does not model (e.g. thoughts, executable code)
    Other(serde_json::Value),
}

/// Inline base64 payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the decoded bytes
    pub mime_type: String,
    /// Base64 data
    pub data: String,
}

/// Reference to a file in the Files API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// MIME type of the file
    pub mime_type: String,
    /// URI returned by the Files API
    pub file_uri: String,
}

/// Output constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// "application/json" on the strict schema path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// OpenAPI-subset schema the reply must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Tool declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Grounding with Google Search
    pub google_search: GoogleSearch,
}

/// Empty marker object enabling Google Search grounding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GoogleSearch {}

impl From<&EncodedPart> for Part {
    fn from(part: &EncodedPart) -> Self {
        match part {
            EncodedPart::Inline { data, mime_type } => Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                },
            },
            EncodedPart::Remote { uri, mime_type } => Part::FileData {
                file_data: FileData {
                    mime_type: mime_type.clone(),
                    file_uri: uri.clone(),
                },
            },
        }
    }
}

impl From<&ContentPart> for Part {
    fn from(part: &ContentPart) -> Self {
        match part {
            ContentPart::Text { text } => Part::Text { text: text.clone() },
            ContentPart::Media(encoded) => Part::from(encoded),
        }
    }
}

impl GenerateContentRequest {
    /// Translate a provider-neutral request into the Gemini wire format.
    ///
    /// # Examples
    ///
    /// ```
    /// use hookline_interface::{ContentPart, ResponseContract, ServiceRequest};
    /// use hookline_models::GenerateContentRequest;
    ///
    /// let request = ServiceRequest {
    ///     parts: vec![ContentPart::text("Find trends")],
    ///     system_instruction: "JSON only".to_string(),
    ///     contract: ResponseContract::SearchAugmented,
    /// };
    ///
    /// let wire = GenerateContentRequest::from_service_request(&request);
    /// assert!(wire.tools.is_some());
    /// assert!(wire.generation_config.is_none());
    /// ```
    pub fn from_service_request(req: &ServiceRequest) -> Self {
        let (generation_config, tools) = match &req.contract {
            ResponseContract::StrictSchema { schema } => (
                Some(GenerationConfig {
                    response_mime_type: Some("application/json".to_string()),
                    response_schema: Some(schema.clone()),
                    temperature: None,
                }),
                None,
            ),
            ResponseContract::SearchAugmented => (
                None,
                Some(vec![Tool {
                    google_search: GoogleSearch::default(),
                }]),
            ),
        };

        let system_instruction = (!req.system_instruction.trim().is_empty()).then(|| Content {
            role: None,
            parts: vec![Part::Text {
                text: req.system_instruction.clone(),
            }],
        });

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: req.parts.iter().map(Part::from).collect(),
            }],
            system_instruction,
            generation_config,
            tools,
        }
    }
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Body of a successful `generateContent` reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (usually one)
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Present when the prompt itself was blocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<serde_json::Value>,
}

/// One generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped (e.g. "STOP", "SAFETY")
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        (!text.is_empty()).then_some(text)
    }

    /// Short reason for an empty reply, for diagnostics.
    pub fn empty_reason(&self) -> String {
        if let Some(feedback) = &self.prompt_feedback {
            return format!("prompt feedback: {}", feedback);
        }
        match self.candidates.first() {
            None => "no candidates".to_string(),
            Some(candidate) => format!(
                "finish reason {}",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

/// `{"file": {...}}` envelope returned by the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileEnvelope {
    /// The uploaded file
    pub file: UploadedFile,
}

/// `{"error": {"message": ...}}` body of a failed call.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
