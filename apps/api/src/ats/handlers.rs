//! Axum route handler for the ATS score endpoint.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::ats::extract::ResumeUpload;
use crate::ats::keywords::{score_keywords, KeywordScore};
use crate::ats::lexicon::Lexicon;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub score: f64,
}

/// Fields of the submitted form. The first occurrence of a repeated field wins.
#[derive(Debug, Default)]
struct ScoreForm {
    resume: Option<ResumeUpload>,
    job_description: Option<String>,
}

/// POST /ats-score
///
/// Multipart fields: `resume` (file) and `jobDescription` (text).
pub async fn handle_ats_score(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let request_id = Uuid::new_v4();
    score_submission(&state, multipart)
        .instrument(info_span!("ats_score", %request_id))
        .await
}

async fn score_submission(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let form = read_form(multipart).await?;

    let resume = form.resume.ok_or(AppError::MissingFile)?;
    if resume.filename.is_empty() {
        return Err(AppError::EmptyFilename);
    }
    let job_description = form
        .job_description
        .filter(|jd| !jd.is_empty())
        .ok_or(AppError::MissingJobDescription)?;

    info!(
        filename = %resume.filename,
        bytes = resume.bytes.len(),
        "Scoring resume"
    );

    let resume_text = state.extractor.extract(resume).await?;
    let result = score_off_executor(Arc::clone(&state.lexicon), resume_text, job_description).await?;

    info!(
        score = result.score,
        matched = result.matched.len(),
        job_keywords = result.job_keyword_count,
        "Resume scored"
    );

    Ok(Json(AtsScoreResponse {
        score: result.score,
    }))
}

/// Tokenizing a long PDF's text is CPU-bound, so it runs on the blocking pool.
async fn score_off_executor(
    lexicon: Arc<Lexicon>,
    resume_text: String,
    job_description: String,
) -> Result<KeywordScore, AppError> {
    tokio::task::spawn_blocking(move || score_keywords(&resume_text, &job_description, &lexicon))
        .await
        .map_err(|e| AppError::Processing(format!("Scoring aborted: {e}")))
}

/// A body that is not multipart at all reads as an empty form.
async fn read_form(multipart: Result<Multipart, MultipartRejection>) -> Result<ScoreForm, AppError> {
    let mut form = ScoreForm::default();
    let Ok(mut multipart) = multipart else {
        return Ok(form);
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedForm(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" if form.resume.is_none() => {
                // A part without a filename is a plain form value, not a file.
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MalformedForm(e.to_string()))?;
                form.resume = Some(ResumeUpload { filename, bytes });
            }
            "jobDescription" if form.job_description.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::MalformedForm(e.to_string()))?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}
