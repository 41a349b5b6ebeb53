pub mod case_study_repository;
pub mod contact_repository;
pub mod settings_repository;
pub mod user_repository;

pub use case_study_repository::*;
pub use contact_repository::*;
pub use settings_repository::*;
pub use user_repository::*;
