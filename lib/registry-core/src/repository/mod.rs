use std::sync::Arc;

use person_repository::PersonRepository;

pub mod error;
pub mod person_repository;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DataRepository: Send + Sync {
    fn get_person_repository(&self) -> Arc<dyn PersonRepository>;
}
