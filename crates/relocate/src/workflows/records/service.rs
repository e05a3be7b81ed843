use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    LocationSearch, LocationSearchSubmission, MovingService, MovingServiceStatus,
    MovingServiceSubmission, ProfileSubmission, UserProfile,
};
use crate::store::{
    from_document, to_document, DocumentStore, Filter, StoreError, LOCATION_SEARCHES,
    MOVING_SERVICES, USER_PROFILES,
};

/// Upper bound on records returned by a per-user listing.
pub const LIST_LIMIT: usize = 100;

/// Service persisting searches, moving requests, and profiles.
pub struct RelocationRecords<S> {
    store: Arc<S>,
}

impl<S> RelocationRecords<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create_search(
        &self,
        submission: LocationSearchSubmission,
    ) -> Result<LocationSearch, RecordsError> {
        require_user(&submission.user_id)?;
        if submission.target_cities.is_empty() {
            return Err(RecordsError::InvalidArgument(
                "target_cities must name at least one city".to_string(),
            ));
        }
        if submission.budget_range.min > submission.budget_range.max {
            return Err(RecordsError::InvalidArgument(
                "budget_range.min must not exceed budget_range.max".to_string(),
            ));
        }

        let search = LocationSearch {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: submission.user_id,
            current_location: submission.current_location,
            target_cities: submission.target_cities,
            budget_range: submission.budget_range,
            preferences: submission.preferences,
            timestamp: Utc::now(),
        };
        self.store
            .upsert(LOCATION_SEARCHES, &search.id, to_document(&search)?)
            .await?;
        info!(search_id = %search.id, user_id = %search.user_id, "location search stored");
        Ok(search)
    }

    pub async fn searches_for(&self, user_id: &str) -> Result<Vec<LocationSearch>, RecordsError> {
        self.list_for_user(LOCATION_SEARCHES, user_id).await
    }

    pub async fn create_moving_service(
        &self,
        submission: MovingServiceSubmission,
    ) -> Result<MovingService, RecordsError> {
        require_user(&submission.user_id)?;
        if !submission.estimated_cost.is_finite() || submission.estimated_cost < 0.0 {
            return Err(RecordsError::InvalidArgument(
                "estimated_cost must be a non-negative amount".to_string(),
            ));
        }

        let service = MovingService {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: submission.user_id,
            service_type: submission.service_type,
            from_location: submission.from_location,
            to_location: submission.to_location,
            moving_date: submission.moving_date,
            estimated_cost: submission.estimated_cost,
            items_count: submission.items_count,
            special_requirements: submission.special_requirements,
            status: MovingServiceStatus::Pending,
            timestamp: Utc::now(),
        };
        self.store
            .upsert(MOVING_SERVICES, &service.id, to_document(&service)?)
            .await?;
        info!(service_id = %service.id, user_id = %service.user_id, "moving service requested");
        Ok(service)
    }

    pub async fn moving_services_for(
        &self,
        user_id: &str,
    ) -> Result<Vec<MovingService>, RecordsError> {
        self.list_for_user(MOVING_SERVICES, user_id).await
    }

    /// Create a profile; one profile per user.
    pub async fn create_profile(
        &self,
        submission: ProfileSubmission,
    ) -> Result<UserProfile, RecordsError> {
        require_user(&submission.user_id)?;
        if self
            .store
            .get(USER_PROFILES, &submission.user_id)
            .await?
            .is_some()
        {
            return Err(RecordsError::Conflict(submission.user_id));
        }
        self.write_profile(uuid::Uuid::new_v4().to_string(), submission)
            .await
    }

    pub async fn profile(&self, user_id: &str) -> Result<UserProfile, RecordsError> {
        let document = self
            .store
            .get(USER_PROFILES, user_id)
            .await?
            .ok_or_else(|| RecordsError::NotFound(format!("profile for user {user_id}")))?;
        Ok(from_document(document)?)
    }

    /// Replace the user's profile, creating it when absent. The path `user_id`
    /// wins over whatever the body carries.
    pub async fn update_profile(
        &self,
        user_id: &str,
        mut submission: ProfileSubmission,
    ) -> Result<UserProfile, RecordsError> {
        require_user(user_id)?;
        submission.user_id = user_id.to_string();

        let id = match self.store.get(USER_PROFILES, user_id).await? {
            Some(document) => from_document::<UserProfile>(document)?.id,
            None => uuid::Uuid::new_v4().to_string(),
        };
        self.write_profile(id, submission).await
    }

    async fn write_profile(
        &self,
        id: String,
        submission: ProfileSubmission,
    ) -> Result<UserProfile, RecordsError> {
        let profile = UserProfile {
            id,
            user_id: submission.user_id,
            name: submission.name,
            email: submission.email,
            current_location: submission.current_location,
            work_preferences: submission.work_preferences,
            skills: submission.skills,
            experience_level: submission.experience_level,
            remote_work_preference: submission.remote_work_preference,
            relocation_status: submission.relocation_status,
            timestamp: Utc::now(),
        };
        self.store
            .upsert(USER_PROFILES, &profile.user_id, to_document(&profile)?)
            .await?;
        info!(user_id = %profile.user_id, "profile saved");
        Ok(profile)
    }

    async fn list_for_user<T>(
        &self,
        collection: &str,
        user_id: &str,
    ) -> Result<Vec<T>, RecordsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let documents = self
            .store
            .find(collection, &Filter::new().eq("user_id", user_id))
            .await?;
        documents
            .into_iter()
            .take(LIST_LIMIT)
            .map(|document| from_document(document).map_err(RecordsError::from))
            .collect()
    }
}

fn require_user(user_id: &str) -> Result<(), RecordsError> {
    if user_id.trim().is_empty() {
        return Err(RecordsError::InvalidArgument(
            "user_id must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("profile for user {0} already exists")]
    Conflict(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
