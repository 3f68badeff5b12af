use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_ARG: &str = "--config-file=";
pub const CONFIG_ENV: &str = "SLOGGER_CHARTS_CONFIG";

fn not_found(message: String) -> Box<dyn Error> {
    Box::new(io::Error::new(io::ErrorKind::NotFound, message))
}

/// Resolves `path` against `base_dir` unless it is absolute; the result must exist.
pub fn resolve_path_from(base_dir: &Path, path_string: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(path_string);
    let resolved = if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) };
    if !resolved.exists() {
        return Err(not_found(format!("Path does not exist {}", path_string)));
    }
    Ok(resolved)
}

pub fn resolve_path(path_string: &str) -> Result<PathBuf, Box<dyn Error>> {
    resolve_path_from(&std::env::current_dir()?, path_string)
}

pub fn resolve_first_path(paths: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    paths
        .iter()
        .find_map(|path| resolve_path(path).ok())
        .ok_or_else(|| not_found(format!("No valid path found: {:#?}", paths)))
}

fn resolve_command_line_arg(args: &[String]) -> Result<PathBuf, Box<dyn Error>> {
    match args.iter().find_map(|arg| arg.strip_prefix(CONFIG_ARG)) {
        Some(path) if !path.is_empty() => resolve_path(path)
            .map_err(|_| not_found(format!("Invalid path set by \"{}\" argument", CONFIG_ARG))),
        _ => Err(not_found(format!("No \"{}\" argument provided or path is empty", CONFIG_ARG))),
    }
}

fn resolve_environment_value(env_value: Option<&str>) -> Result<PathBuf, Box<dyn Error>> {
    match env_value {
        Some(path) => resolve_path(path).map_err(|_| not_found(format!("Invalid path set by {}: {:#?}", CONFIG_ENV, path))),
        None => Err(not_found(format!("Environment variable {} is not set", CONFIG_ENV))),
    }
}

/// Config file from the command line, then the environment, then the first existing fallback.
pub fn resolve_config_file_path(cmd_args: &[String], env_value: Option<&str>, fallback_paths: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    resolve_command_line_arg(cmd_args)
        .or_else(|_| resolve_environment_value(env_value))
        .or_else(|_| resolve_first_path(fallback_paths))
}
