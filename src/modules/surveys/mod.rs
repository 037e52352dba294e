// Surveys module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Survey;
pub use repositories::MySqlSurveyRepository;
pub use services::SurveyService;
