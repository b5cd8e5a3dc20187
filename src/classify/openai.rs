// src/classify/openai.rs
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{BetKind, Classification, ClassifyError, Sport, TextClassifier};
use crate::config::classifier::ClassifierConfig;

const FUNCTION_NAME: &str = "Classification";

const TAGGING_PROMPT: &str = "
Extract the desired information from the provided information.
Only extract the properties mentioned in the 'Classification' function.

Text:
";

/// Chat-completions client with one forced `Classification` tool call.
pub struct OpenAiClassifier {
    config: ClassifierConfig,
    api_key: String,
    client: reqwest::blocking::Client,
    tool: Value,
}

impl OpenAiClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let api_key = config.api_key.clone().ok_or(ClassifyError::MissingApiKey)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClassifyError::Http(e.to_string()))?;

        Ok(Self { config, api_key, client, tool: classification_tool() })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    tools: [&'a Value; 1],
    tool_choice: Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    /// JSON document encoded as a string.
    arguments: String,
}

fn classification_tool() -> Value {
    let sports: Vec<&str> = Sport::ALL.iter().map(|s| s.label()).collect();
    let kinds: Vec<&str> = BetKind::ALL.iter().map(|k| k.label()).collect();
    json!({
        "type": "function",
        "function": {
            "name": FUNCTION_NAME,
            "description": "A classification of a bet.",
            "parameters": {
                "type": "object",
                "properties": {
                    "sport": { "type": "string", "enum": sports },
                    "bet_type": { "type": "string", "enum": kinds },
                },
                "required": ["sport", "bet_type"],
            },
        },
    })
}

fn parse_response(response: ChatResponse) -> Result<Classification, ClassifyError> {
    let call = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.tool_calls.into_iter().next())
        .ok_or_else(|| ClassifyError::MalformedResponse(s!("no tool call in response")))?;

    if call.function.name != FUNCTION_NAME {
        return Err(ClassifyError::MalformedResponse(format!(
            "unexpected function {:?}",
            call.function.name
        )));
    }
    serde_json::from_str(&call.function.arguments)
        .map_err(|e| ClassifyError::MalformedResponse(format!("{e}: {}", call.function.arguments)))
}

impl TextClassifier for OpenAiClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let url = join!(&self.config.base_url, "/chat/completions");
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage { role: "user", content: join!(TAGGING_PROMPT, text, "\n") }],
            tools: [&self.tool],
            tool_choice: json!({ "type": "function", "function": { "name": FUNCTION_NAME } }),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifyError::Timeout(self.config.timeout_secs)
                } else {
                    ClassifyError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifyError::Api { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))?;
        parse_response(parsed)
    }
}
