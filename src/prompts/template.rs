use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::GenerationRequest;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// A named prompt with its declared output schema.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub source: &'static str,
    pub output_schema: fn() -> serde_json::Value,
}

impl PromptTemplate {
    pub fn render_text<S: Serialize>(&self, vars: &S) -> Result<String, DomainError> {
        let mut env = Environment::new();
        // a missing input is a bug in the caller, not an empty string
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.render_str(self.source, minijinja::Value::from_serialize(vars))
            .map_err(|e| DomainError::Generation(format!("Failed to render {}: {e}", self.name)))
    }

    pub fn request<S: Serialize>(&self, vars: &S) -> Result<GenerationRequest, DomainError> {
        Ok(GenerationRequest {
            prompt_name: self.name.to_string(),
            prompt: self.render_text(vars)?,
            output_schema: (self.output_schema)(),
        })
    }
}
