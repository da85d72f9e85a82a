//! Resume Generation: one completion request per call.
//!
//! Flow: build_messages → provider.complete → GeneratedResume.
//! Nothing is cached: calling twice issues two independent requests.

use anyhow::anyhow;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompt::{build_messages, ResumeInputs};
use crate::llm_client::CompletionProvider;

/// The model's answer, assumed to be LaTeX but never parsed as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResume {
    pub content: String,
}

/// Sends the assembled prompt and returns the first completion.
///
/// Provider failures (transport, auth, rate limit) are reported as
/// `Unexpected` with the provider's own detail kept in the message.
pub async fn generate_resume(
    provider: &dyn CompletionProvider,
    inputs: &ResumeInputs,
) -> Result<GeneratedResume, AppError> {
    let messages = build_messages(inputs);
    info!("Requesting resume completion ({} messages)", messages.len());

    let content = provider
        .complete(&messages)
        .await
        .map_err(|e| AppError::Unexpected(anyhow!("Resume generation failed: {e}")))?;

    info!("Received {} bytes of generated resume", content.len());
    Ok(GeneratedResume { content })
}
