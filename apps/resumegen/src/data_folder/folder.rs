//! Data folder resolution.
//!
//! Layout expected under the data folder:
//!
//! ```text
//! data_folder/
//!   secrets.yaml
//!   plain_text_resume.yaml
//!   job_description.txt
//!   <anything containing "resume">.tex   (resume_format.tex preferred)
//!   output/                              (created on demand)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::errors::AppError;

pub const SECRETS_FILE: &str = "secrets.yaml";
pub const PROFILE_FILE: &str = "plain_text_resume.yaml";
pub const JOB_DESCRIPTION_FILE: &str = "job_description.txt";
/// Preferred template name, and the name reported when no template is found.
pub const RESUME_FORMAT_FILE: &str = "resume_format.tex";
pub const OUTPUT_DIR: &str = "output";

const TEMPLATE_MARKER: &str = "resume";
const TEMPLATE_EXTENSION: &str = "tex";

/// The five locations a run works with, resolved once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsBundle {
    pub secrets: PathBuf,
    pub profile: PathBuf,
    pub output_dir: PathBuf,
    pub resume_format: PathBuf,
    pub job_description: PathBuf,
}

/// Checks that `data_folder` holds every required input and creates the
/// `output/` subdirectory.
///
/// Fails with `NotFound` when the folder is missing (or not a directory), or
/// with one `NotFound` naming every missing required file.
pub fn resolve_data_folder(data_folder: &Path) -> Result<PathsBundle, AppError> {
    if !data_folder.is_dir() {
        return Err(AppError::NotFound(format!(
            "Data folder not found: {}",
            data_folder.display()
        )));
    }

    let secrets = data_folder.join(SECRETS_FILE);
    let profile = data_folder.join(PROFILE_FILE);
    let job_description = data_folder.join(JOB_DESCRIPTION_FILE);
    let resume_format = find_resume_format(data_folder)?;

    let mut missing = Vec::new();
    for (path, name) in [
        (&secrets, SECRETS_FILE),
        (&profile, PROFILE_FILE),
        (&job_description, JOB_DESCRIPTION_FILE),
    ] {
        if !path.exists() {
            missing.push(name);
        }
    }
    if resume_format.is_none() {
        missing.push(RESUME_FORMAT_FILE);
    }

    let resume_format = match resume_format {
        Some(path) if missing.is_empty() => path,
        _ => {
            return Err(AppError::NotFound(format!(
                "Missing files in the data folder: {}",
                missing.join(", ")
            )))
        }
    };

    let output_dir = data_folder.join(OUTPUT_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output folder {}", output_dir.display()))?;
    info!("Data folder validated: {}", data_folder.display());

    Ok(PathsBundle {
        secrets,
        profile,
        output_dir,
        resume_format,
        job_description,
    })
}

/// Finds the LaTeX template: `resume_format.tex` if present, otherwise the
/// first file (by name) whose name contains "resume" and ends in `.tex`,
/// both compared case-insensitively.
fn find_resume_format(data_folder: &Path) -> Result<Option<PathBuf>, AppError> {
    let preferred = data_folder.join(RESUME_FORMAT_FILE);
    if preferred.is_file() {
        return Ok(Some(preferred));
    }

    let entries = fs::read_dir(data_folder)
        .with_context(|| format!("Failed to list data folder {}", data_folder.display()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_resume_template(path))
        .collect();
    candidates.sort();

    let found = candidates.into_iter().next();
    if let Some(path) = &found {
        debug!("Using resume template {}", path.display());
    }
    Ok(found)
}

fn is_resume_template(path: &Path) -> bool {
    let name_matches = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase().contains(TEMPLATE_MARKER))
        .unwrap_or(false);
    let extension_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(TEMPLATE_EXTENSION))
        .unwrap_or(false);
    name_matches && extension_matches
}
