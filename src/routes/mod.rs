pub mod dashboard;
pub mod export;
pub mod health;
pub mod report;
pub mod settings;
