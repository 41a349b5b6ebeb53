pub mod case_study_service;
pub mod contact_service;
pub mod email_service;
pub mod settings_service;
pub mod user_service;

pub use case_study_service::*;
pub use contact_service::*;
pub use email_service::*;
pub use settings_service::*;
pub use user_service::*;
