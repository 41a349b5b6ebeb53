// Re-export all models organized by domain
pub mod api;
pub mod case_study;
pub mod contact;
pub mod errors;
pub mod settings;
pub mod user;
pub mod validation;

pub use api::*;
pub use case_study::*;
pub use contact::*;
pub use errors::*;
pub use settings::*;
pub use user::*;
pub use validation::*;
