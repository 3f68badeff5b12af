pub mod config;
pub mod resolve_file_path;
