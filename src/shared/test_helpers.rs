use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};

use crate::core::config::{AppConfig, Environment, SwaggerConfig};
use crate::core::router;
use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::repository::{SchoolRepository, StorageError};
use crate::features::schools::SchoolService;

/// School fixture with a deterministic `created_at` derived from the id
pub fn school_at(id: i64, name: &str, latitude: f64, longitude: f64) -> School {
    School {
        id,
        name: name.to_string(),
        address: format!("{} Test Street", id),
        latitude,
        longitude,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id),
    }
}

/// Repository double that keeps rows in memory; `failing()` simulates an
/// unreachable database.
#[derive(Default)]
pub struct InMemorySchoolRepository {
    rows: Mutex<Vec<School>>,
    fail: bool,
}

impl InMemorySchoolRepository {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn create(&self, school: NewSchool) -> Result<School, StorageError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let stored = School {
            name: school.name,
            address: school.address,
            ..school_at(id, "", school.latitude, school.longitude)
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<School>, StorageError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<School>, StorageError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }
}

pub fn test_app_config(environment: Environment) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment,
        cors_allowed_origins: vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ],
        max_request_body_size: 64 * 1024,
    }
}

/// Full application router backed by the given repository
pub fn test_app(repository: Arc<InMemorySchoolRepository>, environment: Environment) -> Router {
    let config = test_app_config(environment);
    let service = Arc::new(SchoolService::new(
        repository,
        config.expose_storage_errors(),
    ));
    let swagger = SwaggerConfig {
        username: None,
        password: None,
        title: "School Management API".to_string(),
        version: "test".to_string(),
        description: "Test build".to_string(),
    };
    router::create_app(&config, &swagger, service)
}
