//! Prompt assembly.
//!
//! Message order is fixed: system task, profile, template, job description,
//! LaTeX-only instruction. Identical inputs always produce identical messages.

use crate::llm_client::prompts::{
    DETAILS_PREFIX, FORMAT_PREFIX, JOB_DESCRIPTION_PREFIX, LATEX_ONLY_INSTRUCTION, RESUME_SYSTEM,
};
use crate::llm_client::ChatMessage;
use crate::models::profile::Profile;

/// The three user-supplied inputs a prompt is built from.
#[derive(Debug, Clone)]
pub struct ResumeInputs {
    pub profile: Profile,
    pub resume_format: String,
    pub job_description: String,
}

pub fn build_messages(inputs: &ResumeInputs) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(RESUME_SYSTEM),
        ChatMessage::user(format!(
            "{DETAILS_PREFIX}{}",
            inputs.profile.to_prompt_string()
        )),
        ChatMessage::user(format!("{FORMAT_PREFIX}{}", inputs.resume_format)),
        ChatMessage::user(format!(
            "{JOB_DESCRIPTION_PREFIX}{}",
            inputs.job_description
        )),
        ChatMessage::user(LATEX_ONLY_INSTRUCTION),
    ]
}
