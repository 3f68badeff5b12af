pub mod check;
pub mod completion;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod notify;
pub mod query;
pub mod render;

pub use completion::{CompletionSink, CompletionTracker};
pub use fetch::http_fetcher::HttpFetcher;
pub use fetch::FetchTransport;
pub use loader::{ChartLoader, LoadOutcome};
pub use notify::{ErrorNotifier, LogNotifier};
pub use query::QueryParams;
pub use render::html_renderer::HtmlFileRenderer;
pub use render::Renderer;
