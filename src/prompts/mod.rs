//! Prompt templates sent to the generative model.
//!
//! Each template pairs MiniJinja text with the JSON schema its answer
//! must follow:
//! - `trend`: single-symbol trend narrative and price path
//! - `news`: article summary and market impact
//! - `strategy_pipeline`: multi-ticker plan with risk and position sizing

pub mod news;
pub mod strategy_pipeline;
pub mod template;
pub mod trend;

pub use template::PromptTemplate;
