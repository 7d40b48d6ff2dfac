use validator::Validate;

use crate::{
    entities::{
        profile::{FullProfileResponse, ProfileUpdatedResponse, UpdateProfileRequest},
        project::ProjectResponse,
        search::{SearchQuery, SearchResults, SkillFilterQuery},
        skill::SkillSummary,
    },
    errors::{AppError, FieldError},
    repositories::profile::ProfileRepository,
};

pub const TOP_SKILLS_LIMIT: i64 = 5;

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
    pub profile_id: i32,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R, profile_id: i32) -> Self {
        ProfileHandler { profile_repo, profile_id }
    }

    /// Composes the profile row with all of its related records.
    ///
    /// The four related reads run concurrently; the first failure aborts the
    /// whole composition.
    pub async fn get_full_profile(&self) -> Result<FullProfileResponse, AppError> {
        let id = self.profile_id;

        let profile = self.profile_repo.get_profile(id).await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        let (skills, projects, work, links) = futures::try_join!(
            self.profile_repo.get_skills(id),
            self.profile_repo.get_projects(id),
            self.profile_repo.get_work(id),
            self.profile_repo.get_links(id),
        )?;

        Ok(FullProfileResponse::compose(
            profile,
            skills,
            projects.into_iter().map(ProjectResponse::from).collect(),
            work,
            links,
        ))
    }

    pub async fn get_top_skills(&self) -> Result<Vec<SkillSummary>, AppError> {
        self.profile_repo.get_top_skills(self.profile_id, TOP_SKILLS_LIMIT).await
    }

    pub async fn get_projects_by_skill(&self, query: SkillFilterQuery) -> Result<Vec<ProjectResponse>, AppError> {
        query.validate()?;
        let skill = required(query.skill, "skill", "Skill parameter is required")?;

        let projects = self.profile_repo
            .get_projects_by_skill_name(self.profile_id, &skill)
            .await?;

        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    /// Case-insensitive substring search over projects, skills and work history.
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults, AppError> {
        query.validate()?;
        let term = required(query.q, "q", "Query parameter is required")?;
        let id = self.profile_id;

        let (projects, skills, work) = futures::try_join!(
            self.profile_repo.search_projects(id, &term),
            self.profile_repo.search_skills(id, &term),
            self.profile_repo.search_work(id, &term),
        )?;

        tracing::debug!(
            "Search '{}' matched {} projects, {} skills, {} work entries",
            term, projects.len(), skills.len(), work.len()
        );

        Ok(SearchResults {
            projects: projects.into_iter().map(ProjectResponse::from).collect(),
            skills,
            work,
        })
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<ProfileUpdatedResponse, AppError> {
        let updated_at = self.profile_repo
            .update_profile(self.profile_id, &request)
            .await?;

        tracing::info!("Profile {} updated", self.profile_id);

        Ok(ProfileUpdatedResponse {
            message: "Profile updated successfully".to_string(),
            updated_at,
        })
    }

    pub async fn check_store(&self) -> Result<(), AppError> {
        self.profile_repo.check_connection().await
    }
}

fn required(value: Option<String>, field: &str, message: &str) -> Result<String, AppError> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| {
        AppError::ValidationError(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    })
}
