pub mod survey_repository;

pub use survey_repository::MySqlSurveyRepository;
