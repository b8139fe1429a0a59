//! Careers Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::error::field::FieldErrors;
use kernel::id::JobId;
use platform::text::{char_len, sanitize_text, slugify};

use crate::domain::entities::JobPosting;
use crate::domain::repository::JobRepository;
use crate::domain::value_objects::EmploymentType;
use crate::error::{BackofficeError, BackofficeResult};

const MAX_TITLE_LEN: usize = 120;
const MAX_DESCRIPTION_LEN: usize = 10_000;

#[derive(Debug, Clone, Default)]
pub struct NewJobInput {
    pub title: String,
    /// Derived from the title when absent
    pub slug: Option<String>,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

pub struct CareersUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> CareersUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, include_inactive: bool) -> BackofficeResult<Vec<JobPosting>> {
        self.repo.list_jobs(include_inactive).await
    }

    /// Look a posting up by ID or slug. Inactive postings are hidden unless
    /// `include_inactive`.
    pub async fn get(&self, key: &str, include_inactive: bool) -> BackofficeResult<JobPosting> {
        let found = match key.parse::<JobId>() {
            Ok(id) => self.repo.find_job(id).await?,
            Err(_) => self.repo.find_job_by_slug(key).await?,
        };

        found
            .filter(|job| include_inactive || job.is_active)
            .ok_or(BackofficeError::NotFound("Job posting"))
    }

    pub async fn create(&self, input: NewJobInput) -> BackofficeResult<JobPosting> {
        let title = sanitize_text(&input.title);
        let slug = slugify(input.slug.as_deref().unwrap_or(&title));
        let department = sanitize_text(&input.department);
        let location = sanitize_text(&input.location);
        let description = sanitize_text(&input.description);
        let requirements = clean_requirements(input.requirements);

        let mut errors = FieldErrors::new();
        check_title(&mut errors, &title);
        check_slug(&mut errors, &slug);
        errors.require("department", &department);
        errors.require("location", &location);
        check_description(&mut errors, &description);
        errors.into_result().map_err(BackofficeError::Validation)?;

        let now = Utc::now();
        let job = JobPosting {
            id: JobId::new(),
            title,
            slug,
            department,
            location,
            employment_type: input.employment_type,
            description,
            requirements,
            is_active: input.is_active,
            posted_at: now,
            updated_at: now,
        };

        self.repo.insert_job(&job).await?;
        tracing::info!(job_id = %job.id, slug = %job.slug, "Job posting created");

        Ok(job)
    }

    pub async fn update(&self, id: JobId, update: JobUpdate) -> BackofficeResult<JobPosting> {
        let mut job = self
            .repo
            .find_job(id)
            .await?
            .ok_or(BackofficeError::NotFound("Job posting"))?;

        let mut errors = FieldErrors::new();
        if let Some(title) = update.title {
            job.title = sanitize_text(&title);
            check_title(&mut errors, &job.title);
        }
        if let Some(slug) = update.slug {
            job.slug = slugify(&slug);
            check_slug(&mut errors, &job.slug);
        }
        if let Some(department) = update.department {
            job.department = sanitize_text(&department);
            errors.require("department", &job.department);
        }
        if let Some(location) = update.location {
            job.location = sanitize_text(&location);
            errors.require("location", &job.location);
        }
        if let Some(description) = update.description {
            job.description = sanitize_text(&description);
            check_description(&mut errors, &job.description);
        }
        errors.into_result().map_err(BackofficeError::Validation)?;

        if let Some(employment_type) = update.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(requirements) = update.requirements {
            job.requirements = clean_requirements(requirements);
        }
        if let Some(is_active) = update.is_active {
            job.is_active = is_active;
        }
        job.touch();

        self.repo.update_job(&job).await?;
        tracing::info!(job_id = %job.id, active = job.is_active, "Job posting updated");

        Ok(job)
    }

    pub async fn delete(&self, id: JobId) -> BackofficeResult<()> {
        if !self.repo.delete_job(id).await? {
            return Err(BackofficeError::NotFound("Job posting"));
        }
        tracing::info!(job_id = %id, "Job posting deleted");
        Ok(())
    }
}

fn check_title(errors: &mut FieldErrors, title: &str) {
    if errors.require("title", title) {
        errors.check(
            char_len(title) <= MAX_TITLE_LEN,
            "title",
            format!("title must be at most {MAX_TITLE_LEN} characters"),
        );
    }
}

fn check_slug(errors: &mut FieldErrors, slug: &str) {
    // a title with no ASCII alphanumerics slugifies to nothing
    if !errors.has("title") {
        errors.check(
            !slug.is_empty(),
            "slug",
            "slug must contain letters or digits",
        );
    }
}

fn check_description(errors: &mut FieldErrors, description: &str) {
    if errors.require("description", description) {
        errors.check(
            char_len(description) <= MAX_DESCRIPTION_LEN,
            "description",
            format!("description must be at most {MAX_DESCRIPTION_LEN} characters"),
        );
    }
}

fn clean_requirements(requirements: Vec<String>) -> Vec<String> {
    requirements
        .iter()
        .map(|r| sanitize_text(r))
        .filter(|r| !r.is_empty())
        .collect()
}
