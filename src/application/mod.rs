// Application layer - Use cases and data access seams
pub mod chart_service;
pub mod dataset_repository;
