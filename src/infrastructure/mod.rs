// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_dataset;
pub mod svg_document;
