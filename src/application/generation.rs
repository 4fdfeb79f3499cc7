use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::{GenerationRequest, GenerativeModel};
use serde::de::DeserializeOwned;

/// Sends a prompt and parses the answer into `T`. An answer that does not
/// fit the declared shape is an error; values are taken as given.
pub async fn generate_structured<T: DeserializeOwned>(
    model: &dyn GenerativeModel,
    request: &GenerationRequest,
) -> Result<T, DomainError> {
    tracing::info!(prompt = %request.prompt_name, model = model.name(), "calling generative model");
    let answer = model.generate(request).await.map_err(|e| {
        tracing::error!(prompt = %request.prompt_name, error = %e, "generation failed");
        DomainError::Generation(e)
    })?;
    serde_json::from_value(answer).map_err(|e| {
        DomainError::Generation(format!(
            "{} answer did not match its schema: {e}",
            request.prompt_name
        ))
    })
}
