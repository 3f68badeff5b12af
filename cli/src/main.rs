use crate::app_context::AppContext;
use crate::endpoints::Endpoints;
use config::config::{AppConfig, ConfigError};
use config::resolve_file_path::{resolve_config_file_path, CONFIG_ENV};
use futures::future::join_all;
use log::{debug, info, warn};
use slogger_chart_loader::LoadOutcome;
use std::env;
use std::error::Error;
use std::process::ExitCode;
use url::ParseError;

mod app_context;
mod config;
mod endpoints;

fn get_app_config() -> Result<AppConfig, Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let env_value = env::var(CONFIG_ENV).ok();
    let config_path = resolve_config_file_path(&args, env_value.as_deref(), &["config.json"])?;
    debug!("Using configuration file: {:?}", config_path);

    let config = AppConfig::load(&config_path)?;
    debug!("Loaded config: {:#?}", config);
    Ok(config)
}

async fn run(config: AppConfig) -> Result<bool, Box<dyn Error>> {
    let endpoints = Endpoints::new(&config.base_url, config.child_id).map_err(ConfigError::from)?;
    let context = AppContext::new(&config);
    let loader = context.loader();
    let options = config.display_options();
    let query = config.query();

    let summary_url = endpoints.summary()?.to_string();
    let histogram_url = endpoints.histogram()?.to_string();
    let measurement_url = endpoints.measurements()?.to_string();
    let check_url = endpoints.check()?.to_string();
    let percentile_pages = config
        .percentiles
        .iter()
        .map(|measurement| -> Result<(String, String), ParseError> {
            Ok((format!("percentiles_{}", measurement), endpoints.percentiles(measurement)?.to_string()))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let percentile_loads = join_all(
        percentile_pages
            .iter()
            .map(|(element, url)| loader.load_percentile_graph(element, url, &query, Some(&options))),
    );
    let (time_graph, histogram, measurements, percentiles, check) = futures::join!(
        loader.load_time_graph("summary", &summary_url, &query, Some(&options)),
        loader.load_histogram("histogram", &histogram_url, &query, Some(&options)),
        loader.load_measurement_graph("measurements", &measurement_url, &query, Some(&options)),
        percentile_loads,
        loader.load_check(&check_url, &query),
    );

    if let Some(check) = check {
        for line in check.lines() {
            println!("{}", line);
        }
    }

    let outcomes: Vec<LoadOutcome> = [time_graph, histogram, measurements].into_iter().chain(percentiles).collect();
    let rendered = outcomes.iter().filter(|outcome| **outcome == LoadOutcome::Rendered).count();
    info!("Rendered {} of {} charts into {:?}", rendered, outcomes.len(), context.renderer.output_dir());
    if context.completion.is_all_done() {
        info!("All {} loads done", context.completion.expected());
    } else {
        warn!("{} loads never reported completion", context.completion.remaining());
    }
    Ok(rendered == outcomes.len())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match get_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
