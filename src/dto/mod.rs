pub mod report_dto;
pub mod settings_dto;
