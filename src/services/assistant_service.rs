use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;

const TOGETHER_API_URL: &str = "https://api.together.xyz/v1/chat/completions";
const MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

const SYSTEM_PROMPT: &str = "You are a helpful travel assistant for Saffarlog, a travel website focused on tourism in Pakistan. \
You help users plan their trips to Pakistan, provide information about destinations, and answer questions about travel requirements, \
local customs, and attractions. Your responses should be friendly, informative, and focused on making travel planning easier.

Key points to remember:
- Focus on Pakistan's tourism
- Provide accurate, up-to-date travel information
- Be culturally sensitive and respectful
- Suggest specific destinations based on user interests
- Include practical travel tips and safety advice
- Maintain a helpful and friendly tone";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssistantMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: AssistantMessage,
}

/// Proxies open-ended travel questions to the hosted LLM. The scripted
/// trip-expense bot (ChatService) handles cost questions without ever
/// touching the network; this covers everything else.
pub struct AssistantService;

impl AssistantService {
    pub async fn chat(messages: Vec<AssistantMessage>) -> Result<String, String> {
        let api_key = env::var("TOGETHER_API_KEY")
            .map_err(|_| "Together API key is not configured".to_string())?;

        let mut formatted = Vec::with_capacity(messages.len() + 1);
        formatted.push(AssistantMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        });
        formatted.extend(messages);

        let client = ReqwestClient::new();
        let response = client
            .post(TOGETHER_API_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&json!({
                "model": MODEL,
                "messages": formatted,
                "temperature": 0.7,
                "max_tokens": 1000
            }))
            .send()
            .await
            .map_err(|e| format!("Failed to reach Together AI: {}", e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Together AI returned error status: {}",
                response.status()
            ));
        }

        let completion = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| format!("Failed to parse completion: {}", e))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| "Completion contained no choices".to_string())
    }
}
