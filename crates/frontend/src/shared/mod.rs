pub mod api_utils;
pub mod components;
pub mod config;
pub mod excel_importer;
pub mod modal;
pub mod number_format;
pub mod text;
