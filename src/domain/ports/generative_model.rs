/// A structured prompt: rendered text plus the JSON schema the answer must follow.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt_name: String,
    pub prompt: String,
    pub output_schema: serde_json::Value,
}

#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the model's JSON answer, not yet checked against the schema.
    async fn generate(&self, request: &GenerationRequest) -> Result<serde_json::Value, String>;
}
