pub mod rate_service;
pub mod conversion_service;
pub mod history_service;
