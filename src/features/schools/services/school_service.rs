use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::schools::dtos::{SchoolResponseDto, SchoolWithDistanceDto};
use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::repository::{SchoolRepository, StorageError};
use crate::shared::geo::Coordinates;

/// Service orchestrating school persistence and proximity ranking
pub struct SchoolService {
    repository: Arc<dyn SchoolRepository>,
    expose_storage_errors: bool,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn SchoolRepository>, expose_storage_errors: bool) -> Self {
        Self {
            repository,
            expose_storage_errors,
        }
    }

    /// Persist a validated school and return the stored record
    pub async fn add_school(&self, school: NewSchool) -> Result<SchoolResponseDto> {
        let created = self
            .repository
            .create(school)
            .await
            .map_err(|e| self.storage_failure("Failed to add school", e))?;

        tracing::info!("School created: id={}, name={}", created.id, created.name);

        Ok(created.into())
    }

    /// All schools, nearest to `origin` first
    pub async fn list_by_distance(&self, origin: Coordinates) -> Result<Vec<SchoolWithDistanceDto>> {
        let schools = self
            .repository
            .list_all()
            .await
            .map_err(|e| self.storage_failure("Failed to retrieve schools", e))?;

        tracing::debug!(
            "Ranking {} schools from ({}, {})",
            schools.len(),
            origin.latitude,
            origin.longitude
        );

        Ok(rank_by_distance(schools, origin))
    }

    pub async fn get_school(&self, id: i64) -> Result<SchoolResponseDto> {
        let school = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_failure("Failed to retrieve school", e))?;

        school
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("School not found".to_string()))
    }

    fn storage_failure(&self, message: &str, error: StorageError) -> AppError {
        tracing::error!("{}: {}", message, error);
        AppError::Storage {
            message: message.to_string(),
            detail: self.expose_storage_errors.then(|| error.to_string()),
        }
    }
}

/// Annotate each school with its distance from `origin` and sort ascending.
///
/// The sort is stable, so schools at equal distance keep the input order
/// (newest first, as returned by the repository).
pub fn rank_by_distance(schools: Vec<School>, origin: Coordinates) -> Vec<SchoolWithDistanceDto> {
    let mut ranked: Vec<SchoolWithDistanceDto> = schools
        .into_iter()
        .map(|school| {
            let distance = origin.distance_km_to(school.coordinates());
            SchoolWithDistanceDto::new(school, distance)
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{school_at, InMemorySchoolRepository};
    use fake::faker::company::en::CompanyName;
    use fake::Fake;

    fn service(repository: Arc<InMemorySchoolRepository>) -> SchoolService {
        SchoolService::new(repository, true)
    }

    #[test]
    fn test_rank_by_distance_nearest_first() {
        let origin = Coordinates::new(0.0, 0.0);
        // ~0.45 degrees of latitude is ~50km, ~0.045 is ~5km
        let far = school_at(1, "Far School", 0.45, 0.0);
        let near = school_at(2, "Near School", 0.045, 0.0);

        let ranked = rank_by_distance(vec![far, near], origin);

        assert_eq!(ranked[0].name, "Near School");
        assert_eq!(ranked[1].name, "Far School");
        assert!((ranked[0].distance - 5.0).abs() < 0.1);
        assert!((ranked[1].distance - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_rank_by_distance_ties_keep_input_order() {
        let origin = Coordinates::new(10.0, 10.0);
        let schools = vec![
            school_at(3, "Newest", 11.0, 10.0),
            school_at(2, "Middle", 9.0, 10.0),
            school_at(1, "Oldest", 11.0, 10.0),
        ];

        let ranked = rank_by_distance(schools, origin);
        let ids: Vec<i64> = ranked.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_rank_by_distance_empty() {
        assert!(rank_by_distance(vec![], Coordinates::new(0.0, 0.0)).is_empty());
    }

    #[tokio::test]
    async fn test_add_school_returns_generated_id() {
        let repository = Arc::new(InMemorySchoolRepository::default());
        let service = service(Arc::clone(&repository));
        let name: String = CompanyName().fake();

        let created = service
            .add_school(NewSchool {
                name: name.clone(),
                address: "1 Main St".to_string(),
                latitude: 10.0,
                longitude: 20.0,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, name);
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn test_list_by_distance_is_sorted_and_repeatable() {
        let repository = Arc::new(InMemorySchoolRepository::default());
        let service = service(Arc::clone(&repository));
        for (lat, lon) in [(48.8566, 2.3522), (51.5074, -0.1278), (40.4168, -3.7038)] {
            let name: String = CompanyName().fake();
            service
                .add_school(NewSchool {
                    name,
                    address: "Somewhere 1".to_string(),
                    latitude: lat,
                    longitude: lon,
                })
                .await
                .unwrap();
        }

        let origin = Coordinates::new(51.0, 0.0);
        let first = service.list_by_distance(origin).await.unwrap();
        let second = service.list_by_distance(origin).await.unwrap();

        assert!(first.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(first[0].latitude, 51.5074);
        let first_ids: Vec<i64> = first.iter().map(|s| s.id).collect();
        let second_ids: Vec<i64> = second.iter().map(|s| s.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_storage_failure_carries_detail_when_exposed() {
        let repository = Arc::new(InMemorySchoolRepository::failing());
        let service = SchoolService::new(repository, true);

        let err = service
            .list_by_distance(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        match err {
            AppError::Storage { message, detail } => {
                assert_eq!(message, "Failed to retrieve schools");
                assert!(detail.unwrap().starts_with("Database error:"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_failure_hides_detail_when_not_exposed() {
        let repository = Arc::new(InMemorySchoolRepository::failing());
        let service = SchoolService::new(repository, false);

        let err = service
            .add_school(NewSchool {
                name: "Hidden".to_string(),
                address: "1 Main St".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Storage { ref message, detail: None } if message == "Failed to add school"
        ));
    }

    #[tokio::test]
    async fn test_get_school_missing_is_not_found() {
        let service = service(Arc::new(InMemorySchoolRepository::default()));

        let err = service.get_school(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
