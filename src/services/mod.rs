pub mod export_service;
pub mod notification_service;
pub mod record_provider;
pub mod report_service;
pub mod suggestion_service;
