//! Remote classification service: settings, contract, and the
//! chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

use crate::types::RecognitionError;

/// System instruction describing the named areas and their keyword hints.
pub const SYSTEM_PROMPT: &str = "你是一名快递取件助手。请从用户输入的文本或图片中，提取所有快递码及其所属快递分区。

快递分区规则如下：
1. \"菜鸟驿站\" - 包含菜鸟、蜂鸟等字样的快递
2. \"韵达京东\" - 包含韵达、京东等字样的快递（注意：单独提到\"韵达快递\"或\"京东快递\"都属于\"韵达京东\"分区）
3. \"顺丰快递\" - 包含顺丰、圆通、中通等字样的快递

如果用户没有明确提到快递公司，请根据取件码格式和上下文推断分区。

输出格式要求如下，每行一个快递：[快递分区]（快递码）
只输出提取结果，不要输出其他内容。";

/// User instruction attached to each image request.
const IMAGE_PROMPT: &str = "请识别图片中的快递取件码及其所属区域，输出格式为[快递分区]（快递码）。";

/// Injected service configuration; never read from ambient globals.
#[derive(Debug, Clone)]
pub struct RecognitionSettings {
    /// OpenAI-style API root, e.g. `https://api.siliconflow.cn/v1`.
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub vision_model: String,
    pub max_tokens: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Running-area seed for the local fallback extractor.
    pub default_area: String,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.siliconflow.cn/v1".to_string(),
            api_key: String::new(),
            text_model: "THUDM/GLM-4-9B-0414".to_string(),
            vision_model: "Qwen/Qwen2.5-VL-32B-Instruct".to_string(),
            max_tokens: 256,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            default_area: "菜鸟驿站".to_string(),
        }
    }
}

/// The remote classification service, returning the raw response text.
#[async_trait]
pub trait RecognitionService: Send + Sync {
    async fn classify_text(&self, text: &str) -> Result<String, RecognitionError>;
    /// One call per image; detail level is reduced for bandwidth.
    async fn classify_image(&self, image_jpeg: &[u8]) -> Result<String, RecognitionError>;
}

/// Reqwest-backed chat-completions client.
pub struct ChatCompletionsClient {
    settings: RecognitionSettings,
    client: reqwest::Client,
}

impl ChatCompletionsClient {
    pub fn new(settings: RecognitionSettings) -> Result<Self, RecognitionError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_transport_error)?;
        Ok(Self { settings, client })
    }

    async fn complete(&self, body: Value) -> Result<String, RecognitionError> {
        let url = format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Transport {
                status: Some(status.as_u16()),
                message: format!("http status {status}"),
            });
        }

        let payload: Value = response.json().await.map_err(map_transport_error)?;
        // Only the first choice's content is consumed; everything else in
        // the payload is ignored.
        Ok(payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl RecognitionService for ChatCompletionsClient {
    async fn classify_text(&self, text: &str) -> Result<String, RecognitionError> {
        let body = json!({
            "model": self.settings.text_model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": text },
            ],
            "stream": false,
            "max_tokens": self.settings.max_tokens,
        });
        self.complete(body).await
    }

    async fn classify_image(&self, image_jpeg: &[u8]) -> Result<String, RecognitionError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image_jpeg);
        let body = json!({
            "model": self.settings.vision_model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": [
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:image/jpeg;base64,{encoded}"),
                            "detail": "low",
                        },
                    },
                    { "type": "text", "text": IMAGE_PROMPT },
                ] },
            ],
            "stream": false,
            "max_tokens": self.settings.max_tokens,
        });
        self.complete(body).await
    }
}

fn map_transport_error(err: reqwest::Error) -> RecognitionError {
    RecognitionError::Transport {
        status: err.status().map(|status| status.as_u16()),
        message: err.to_string(),
    }
}
