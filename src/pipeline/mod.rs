//! One submission, end to end.
//!
//! The pipeline runs strictly in sequence: each screenshot is preprocessed and
//! uploaded in turn, then the prompt is built, length-checked and sent to the
//! model. Upload failures only skip the affected screenshot; the generation
//! step is all-or-nothing. Every failure is logged here and handed back inside
//! [`GenerationOutcome`] rather than propagated.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::{AppConfig, ImagingConfig, PromptConfig};
use crate::error::{AppError, Result};
use crate::groq::GroqClient;
use crate::imaging::{preprocess, UploadedImage};
use crate::prompt::{build_prompt, Prompt};
use crate::publisher::{CloudinaryClient, PublishedImageUrl};
use crate::utils::retry::Retried;
use tracing::{error, info, warn};

/// What the user submitted through the form.
#[derive(Debug, Clone)]
pub struct Submission {
    pub app_name: String,
    pub images: Vec<UploadedImage>,
}

/// A screenshot that did not make it into the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedImage {
    pub file_name: String,
    pub reason: String,
}

/// Result of one submission, ready for display.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub files_received: usize,
    pub published: Vec<PublishedImageUrl>,
    pub skipped: Vec<SkippedImage>,
    /// Notices for the user that do not stop the request.
    pub warnings: Vec<String>,
    pub instructions: Result<String>,
}

impl GenerationOutcome {
    fn rejected(files_received: usize, err: AppError) -> Self {
        Self {
            files_received,
            published: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
            instructions: Err(err),
        }
    }
}

pub struct Pipeline {
    publisher: CloudinaryClient,
    generator: GroqClient,
    prompt: PromptConfig,
    imaging: ImagingConfig,
}

impl Pipeline {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            publisher: CloudinaryClient::new(&config.cloudinary)?,
            generator: GroqClient::new(&config.groq)?,
            prompt: config.prompt.clone(),
            imaging: config.imaging.clone(),
        })
    }

    pub fn publisher(&self) -> &CloudinaryClient {
        &self.publisher
    }

    pub fn generator(&self) -> &GroqClient {
        &self.generator
    }

    /// Process one submission. Never fails; errors land in `instructions`.
    pub async fn run(&self, submission: Submission) -> GenerationOutcome {
        let files_received = submission.images.len();
        let app_name = submission.app_name.trim().to_string();

        if app_name.is_empty() || submission.images.is_empty() {
            warn!("No files uploaded or app name missing.");
            return GenerationOutcome::rejected(
                files_received,
                AppError::InvalidRequest(
                    "Please upload screenshots and enter the app or website name to proceed."
                        .to_string(),
                ),
            );
        }

        info!("App name: {}", app_name);
        info!("Number of files uploaded: {}", files_received);

        let mut published = Vec::with_capacity(files_received);
        let mut skipped = Vec::new();

        for image in submission.images {
            let file_name = image.file_name.clone();
            match self.publish_one(image).await {
                Ok(url) => published.push(url),
                Err(e) => {
                    warn!("Skipping {}: {}", file_name, e);
                    skipped.push(SkippedImage {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let generated = if published.is_empty() {
            error!("None of the {} screenshots could be uploaded", files_received);
            Retried::not_attempted(AppError::NoImagesPublished(files_received))
        } else {
            self.generate(&app_name, &published).await
        };

        GenerationOutcome {
            files_received,
            published,
            skipped,
            warnings: rate_limit_warnings(&generated),
            instructions: generated.result,
        }
    }

    /// Build, length-check and send the prompt.
    pub async fn generate(
        &self,
        app_name: &str,
        urls: &[PublishedImageUrl],
    ) -> Retried<String, AppError> {
        let text = build_prompt(app_name, urls);
        let prompt = match Prompt::new(text, self.prompt.max_chars) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("Message content exceeds the size limit: {}", e);
                crate::metrics::record_prompt_rejection("too_large");
                return Retried::not_attempted(e);
            }
        };

        let generated = self.generator.generate_reporting(&prompt).await;
        if let Err(e) = &generated.result {
            error!("Error generating instructions: {}", e);
        }
        generated
    }

    async fn publish_one(&self, image: UploadedImage) -> Result<PublishedImageUrl> {
        let quality = self.imaging.jpeg_quality;
        // Decoding is CPU-bound; keep it off the async workers
        let encoded = tokio::task::spawn_blocking(move || preprocess(&image, quality))
            .await
            .map_err(|e| AppError::Internal(format!("Image task failed: {}", e)))?
            .inspect_err(|_| crate::metrics::record_upload_skipped())?;

        let result = self.publisher.upload(&encoded).await;
        crate::metrics::record_upload(result.is_ok());
        result
    }
}

/// One notice per rate-limit wait the model call sat through.
fn rate_limit_warnings<T, E>(generated: &Retried<T, E>) -> Vec<String> {
    generated
        .rate_limit_waits
        .iter()
        .enumerate()
        .map(|(index, wait)| {
            if generated.retried_after(index) {
                format!("Rate limit exceeded. Retried after {} seconds.", wait.as_secs())
            } else {
                format!(
                    "Rate limit exceeded. Gave up after waiting {} seconds.",
                    wait.as_secs()
                )
            }
        })
        .collect()
}
