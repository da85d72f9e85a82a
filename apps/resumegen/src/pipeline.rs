//! Resume Pipeline: the whole run, strictly in order:
//!
//! resolve_data_folder → extract_api_key → load profile → print profile →
//! read template + job description → generate → write output.
//!
//! Nothing is written unless a complete completion came back.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::Config;
use crate::data_folder::{extract_api_key, load_yaml, read_text_file, resolve_data_folder};
use crate::display::print_profile;
use crate::errors::AppError;
use crate::generation::generator::generate_resume;
use crate::generation::prompt::ResumeInputs;
use crate::generation::writer::{write_resume, GENERATED_RESUME_FILE};
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::models::profile::Profile;

/// Runs against the hosted API configured in `config`.
pub async fn run(config: &Config) -> Result<PathBuf, AppError> {
    let api_url = config.groq_api_url.clone();
    run_with(&config.data_folder, move |api_key| {
        Box::new(LlmClient::new(api_url, api_key)) as Box<dyn CompletionProvider>
    })
    .await
}

/// Runs with a provider built from the validated API key.
/// Returns the path of the written resume.
pub async fn run_with<F>(data_folder: &Path, make_provider: F) -> Result<PathBuf, AppError>
where
    F: FnOnce(String) -> Box<dyn CompletionProvider>,
{
    let paths = resolve_data_folder(data_folder)?;

    let secrets = load_yaml(&paths.secrets)?;
    let api_key = extract_api_key(&secrets, &paths.secrets)?;

    let mut profile = Profile::new(load_yaml(&paths.profile)?);
    print_profile(&profile);
    profile.set_output_directory(&paths.output_dir.display().to_string());

    let resume_format = read_text_file(&paths.resume_format)?;
    println!("Read resume format");
    let job_description = read_text_file(&paths.job_description)?;
    println!("Read Job Description");

    let inputs = ResumeInputs {
        profile,
        resume_format,
        job_description,
    };
    let provider = make_provider(api_key);

    println!("Started generating Resume");
    let resume = generate_resume(provider.as_ref(), &inputs).await?;
    println!("Completed generating Resume");

    let output_path = paths.output_dir.join(GENERATED_RESUME_FILE);
    println!("started saving Resume");
    write_resume(&output_path, &resume.content)?;
    println!("completed saving Resume");

    Ok(output_path)
}

/// Top-level handler: each failure is reported once on stdout.
/// The process exits normally either way. Returns the printed line, if any.
pub fn report(result: &Result<PathBuf, AppError>) -> Option<String> {
    match result {
        Ok(path) => {
            info!("Run complete: {}", path.display());
            None
        }
        Err(e) => {
            error!("Run failed [{}]: {e}", e.kind());
            let line = e.report();
            println!("{line}");
            Some(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::llm_client::{ChatMessage, LlmError};

    struct StubProvider {
        reply: String,
        calls: Arc<AtomicUsize>,
        expected_key: String,
        key: String,
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            assert_eq!(self.key, self.expected_key);
            assert_eq!(messages.len(), 5);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    /// Keeps every message list it is asked to complete.
    struct CapturingProvider {
        seen: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    }

    #[async_trait]
    impl CompletionProvider for CapturingProvider {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            Ok("CAPTURED".to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "Invalid API Key".to_string(),
            })
        }
    }

    fn data_folder(secrets: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("secrets.yaml"), secrets).unwrap();
        fs::write(
            dir.path().join("plain_text_resume.yaml"),
            "personal_information:\n  name: Ada\ninterests:\n  - chess\n",
        )
        .unwrap();
        fs::write(dir.path().join("job_description.txt"), "Rust engineer").unwrap();
        fs::write(
            dir.path().join("resume_format.tex"),
            "\\documentclass{article}",
        )
        .unwrap();
        dir
    }

    fn stub(reply: &str, calls: &Arc<AtomicUsize>) -> impl FnOnce(String) -> Box<dyn CompletionProvider> {
        let reply = reply.to_string();
        let calls = Arc::clone(calls);
        move |key| {
            Box::new(StubProvider {
                reply,
                calls,
                expected_key: "gsk_valid".to_string(),
                key,
            }) as Box<dyn CompletionProvider>
        }
    }

    fn output_file(dir: &TempDir) -> PathBuf {
        dir.path().join("output").join(GENERATED_RESUME_FILE)
    }

    #[tokio::test]
    async fn test_scenario_a_writes_completion_verbatim() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");
        let calls = Arc::new(AtomicUsize::new(0));

        let written = run_with(dir.path(), stub("RESUME_OK", &calls)).await.unwrap();

        assert_eq!(written, output_file(&dir));
        assert_eq!(fs::read_to_string(&written).unwrap(), "RESUME_OK");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rerun_overwrites_previous_output() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");
        let calls = Arc::new(AtomicUsize::new(0));

        run_with(dir.path(), stub("first run output", &calls)).await.unwrap();
        run_with(dir.path(), stub("second", &calls)).await.unwrap();

        assert_eq!(fs::read_to_string(output_file(&dir)).unwrap(), "second");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_scenario_b_empty_key_is_config_error_and_writes_nothing() {
        let dir = data_folder("groq_ai_api_key: \"\"\n");
        let calls = Arc::new(AtomicUsize::new(0));

        let err = run_with(dir.path(), stub("RESUME_OK", &calls)).await.unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert!(err.report().starts_with("Configuration error:"));
        assert!(!output_file(&dir).exists());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_scenario_c_missing_job_description_is_not_found() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");
        fs::remove_file(dir.path().join("job_description.txt")).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let err = run_with(dir.path(), stub("RESUME_OK", &calls)).await.unwrap_err();

        match &err {
            AppError::NotFound(msg) => assert!(msg.contains("job_description.txt")),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(err.report().starts_with("File not found:"));
        assert!(!output_file(&dir).exists());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_profile_is_config_error() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");
        fs::write(dir.path().join("plain_text_resume.yaml"), "a: [b\n").unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let err = run_with(dir.path(), stub("RESUME_OK", &calls)).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_no_output() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");

        let err = run_with(dir.path(), |_key| Box::new(FailingProvider) as Box<dyn CompletionProvider>)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unexpected(_)));
        assert!(err.report().contains("Invalid API Key"));
        assert!(!output_file(&dir).exists());
    }

    #[tokio::test]
    async fn test_missing_data_folder_is_not_found() {
        let dir = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let err = run_with(&dir.path().join("data_folder"), stub("x", &calls))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_prompt_slots_and_output_directory_reach_the_provider() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("secrets.yaml"), "groq_ai_api_key: gsk_valid\n").unwrap();
        fs::write(dir.path().join("plain_text_resume.yaml"), "a: 1\n").unwrap();
        fs::write(dir.path().join("job_description.txt"), "JD_TEXT").unwrap();
        fs::write(dir.path().join("My_Resume.TEX"), "TPL_TEXT").unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let provider_seen = Arc::clone(&seen);
        run_with(dir.path(), move |_key| {
            Box::new(CapturingProvider {
                seen: provider_seen,
            }) as Box<dyn CompletionProvider>
        })
        .await
        .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let messages = &seen[0];
        let output_dir = dir.path().join("output");
        assert_eq!(
            messages[1].content,
            format!(
                "Here are the details: a: 1\noutputFileDirectory: {}\n",
                output_dir.display()
            )
        );
        assert_eq!(messages[2].content, "Here is the resume format: TPL_TEXT");
        assert_eq!(messages[3].content, "Here is the job description: JD_TEXT");
        assert_eq!(fs::read_to_string(output_file(&dir)).unwrap(), "CAPTURED");
    }

    #[tokio::test]
    async fn test_transport_failure_is_unexpected() {
        let dir = data_folder("groq_ai_api_key: gsk_valid\n");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/openai/v1/chat/completions", listener.local_addr().unwrap());
        drop(listener);

        let err = run_with(dir.path(), move |key| {
            Box::new(LlmClient::new(url, key)) as Box<dyn CompletionProvider>
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Unexpected(_)));
        assert!(err.report().starts_with("An unexpected error occurred: "));
        assert!(err.report().contains("HTTP error"));
        assert!(!output_file(&dir).exists());
    }

    #[test]
    fn test_report_prints_only_failures() {
        assert_eq!(
            report(&Ok(PathBuf::from("data_folder/output/generated_resume.tex"))),
            None
        );
        assert_eq!(
            report(&Err(AppError::Config("bad".to_string()))),
            Some("Configuration error: bad".to_string())
        );
    }
}
