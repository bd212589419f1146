//! Business logic services

pub mod tourists;
pub mod uploads;

use crate::{config::UploadsConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub tourists: tourists::TouristsService,
    pub uploads: uploads::UploadsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, uploads_config: UploadsConfig) -> Self {
        Self {
            tourists: tourists::TouristsService::new(repository),
            uploads: uploads::UploadsService::new(uploads_config),
        }
    }
}
