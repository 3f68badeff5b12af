use crate::config::config::AppConfig;
use slogger_chart_loader::{ChartLoader, CompletionTracker, HtmlFileRenderer, HttpFetcher, LogNotifier};

/// Collaborators shared by every load of one run.
pub struct AppContext {
    pub fetcher: HttpFetcher,
    pub renderer: HtmlFileRenderer,
    pub notifier: LogNotifier,
    pub completion: CompletionTracker,
}

impl AppContext {
    /// Expects one completion per chart page plus one for the check status.
    pub fn new(config: &AppConfig) -> Self {
        let renderer = HtmlFileRenderer::new(&config.output_dir);
        let renderer = match &config.plotly_src {
            Some(src) => renderer.with_plotly_src(src),
            None => renderer,
        };
        AppContext {
            fetcher: HttpFetcher::new(),
            renderer,
            notifier: LogNotifier,
            completion: CompletionTracker::new(Self::expected_loads(config)),
        }
    }

    pub fn expected_loads(config: &AppConfig) -> usize {
        3 + config.percentiles.len() + 1
    }

    pub fn loader(&self) -> ChartLoader<'_> {
        ChartLoader::new(&self.fetcher, &self.renderer, &self.notifier, &self.completion)
    }
}
