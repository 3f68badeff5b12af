use crate::check::CheckPayload;
use crate::completion::CompletionSink;
use crate::error::LoadError;
use crate::fetch::FetchTransport;
use crate::notify::{ErrorNotifier, FETCH_ERROR_MESSAGE};
use crate::query::QueryParams;
use crate::render::Renderer;
use log::{error, info, warn};
use slogger_plotly_processor::payloads::{
    ChartPayload, HistogramPayload, MeasurementPayload, PercentilePayload, SummaryPayload,
};
use slogger_plotly_processor::{
    build_histogram, build_measurement_graph, build_percentile_graph, build_time_graph,
    DisplayOptions, Figure,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    /// Data arrived but the renderer refused it.
    RenderFailed,
    /// The user was alerted; nothing was rendered.
    Failed,
}

/// Fetches chart data and draws it, reporting through injected collaborators.
///
/// Every load sends one request, then either renders once or alerts once,
/// and always tells the completion sink exactly once. Errors are never
/// returned to the caller.
pub struct ChartLoader<'a> {
    transport: &'a dyn FetchTransport,
    renderer: &'a dyn Renderer,
    notifier: &'a dyn ErrorNotifier,
    completion: &'a dyn CompletionSink,
}

impl<'a> ChartLoader<'a> {
    pub fn new(
        transport: &'a dyn FetchTransport,
        renderer: &'a dyn Renderer,
        notifier: &'a dyn ErrorNotifier,
        completion: &'a dyn CompletionSink,
    ) -> Self {
        Self { transport, renderer, notifier, completion }
    }

    async fn fetch_payload<P: ChartPayload>(&self, url: &str, query: &QueryParams) -> Result<P, LoadError> {
        let value = self.transport.get_json(url, query).await?;
        Ok(P::from_value(value)?)
    }

    fn render(&self, element: &str, figure: &Figure) -> LoadOutcome {
        match self.renderer.new_plot(element, figure) {
            Ok(()) => LoadOutcome::Rendered,
            Err(e) => {
                error!("Rendering {} failed: {}", element, e);
                LoadOutcome::RenderFailed
            }
        }
    }

    /// fetch -> build -> render, then notify completion whatever happened.
    pub async fn load_chart<P, F>(&self, element: &str, url: &str, query: &QueryParams, build: F) -> LoadOutcome
    where
        P: ChartPayload,
        F: FnOnce(P) -> Figure,
    {
        let outcome = match self.fetch_payload::<P>(url, query).await {
            Ok(payload) => self.render(element, &build(payload)),
            Err(e) => {
                warn!("Loading {} from {} failed: {}", element, url, e);
                self.notifier.alert(FETCH_ERROR_MESSAGE);
                LoadOutcome::Failed
            }
        };
        self.completion.update_done();
        outcome
    }

    pub async fn load_time_graph(
        &self,
        element: &str,
        url: &str,
        query: &QueryParams,
        options: Option<&DisplayOptions>,
    ) -> LoadOutcome {
        self.load_chart(element, url, query, |payload: SummaryPayload| build_time_graph(payload, options))
            .await
    }

    pub async fn load_histogram(
        &self,
        element: &str,
        url: &str,
        query: &QueryParams,
        options: Option<&DisplayOptions>,
    ) -> LoadOutcome {
        self.load_chart(element, url, query, |payload: HistogramPayload| build_histogram(payload, options))
            .await
    }

    pub async fn load_percentile_graph(
        &self,
        element: &str,
        url: &str,
        query: &QueryParams,
        options: Option<&DisplayOptions>,
    ) -> LoadOutcome {
        self.load_chart(element, url, query, |payload: PercentilePayload| {
            build_percentile_graph(payload, options)
        })
        .await
    }

    pub async fn load_measurement_graph(
        &self,
        element: &str,
        url: &str,
        query: &QueryParams,
        options: Option<&DisplayOptions>,
    ) -> LoadOutcome {
        self.load_chart(element, url, query, |payload: MeasurementPayload| {
            build_measurement_graph(payload, options)
        })
        .await
    }

    /// Same contract as the chart loads, but hands the status back instead of rendering.
    pub async fn load_check(&self, url: &str, query: &QueryParams) -> Option<CheckPayload> {
        let result: Result<CheckPayload, LoadError> = match self.transport.get_json(url, query).await {
            Ok(value) => serde_json::from_value(value).map_err(LoadError::from),
            Err(e) => Err(e.into()),
        };
        let check = match result {
            Ok(check) => {
                info!("Check status loaded from {}", url);
                Some(check)
            }
            Err(e) => {
                warn!("Loading check status from {} failed: {}", url, e);
                self.notifier.alert(FETCH_ERROR_MESSAGE);
                None
            }
        };
        self.completion.update_done();
        check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionTracker;
    use crate::fetch::FetchError;
    use crate::render::RenderError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct StubTransport {
        response: Option<Value>,
        requests: Mutex<Vec<(String, QueryParams)>>,
    }

    impl StubTransport {
        fn answering(value: Value) -> Self {
            Self { response: Some(value), requests: Mutex::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { response: None, requests: Mutex::new(Vec::new()) }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FetchTransport for StubTransport {
        async fn get_json(&self, url: &str, query: &QueryParams) -> Result<Value, FetchError> {
            self.requests.lock().unwrap().push((url.to_owned(), query.clone()));
            match &self.response {
                Some(value) => Ok(value.clone()),
                None => Err(FetchError::InvalidBody("simulated failure".to_owned())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        plots: Mutex<Vec<(String, Figure)>>,
        refuse: bool,
    }

    impl Renderer for RecordingRenderer {
        fn new_plot(&self, element: &str, figure: &Figure) -> Result<(), RenderError> {
            if self.refuse {
                return Err(RenderError::InvalidElement(element.to_owned()));
            }
            self.plots.lock().unwrap().push((element.to_owned(), figure.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: Mutex<Vec<String>>,
    }

    impl ErrorNotifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_owned());
        }
    }

    struct Harness {
        transport: StubTransport,
        renderer: RecordingRenderer,
        notifier: RecordingNotifier,
        tracker: CompletionTracker,
    }

    impl Harness {
        fn new(transport: StubTransport) -> Self {
            Self {
                transport,
                renderer: RecordingRenderer::default(),
                notifier: RecordingNotifier::default(),
                tracker: CompletionTracker::new(1),
            }
        }

        fn loader(&self) -> ChartLoader<'_> {
            ChartLoader::new(&self.transport, &self.renderer, &self.notifier, &self.tracker)
        }

        fn render_count(&self) -> usize {
            self.renderer.plots.lock().unwrap().len()
        }

        fn alerts(&self) -> Vec<String> {
            self.notifier.alerts.lock().unwrap().clone()
        }
    }

    fn summary_json() -> Value {
        json!({
            "day": ["2020-05-01", "2020-05-02", "2020-05-03"],
            "night_h": [9.0, 9.5, 10.0], "night_cnt": [2, 2, 1],
            "day_h": [3.0, 2.5, 2.0], "day_cnt": [3, 3, 2],
            "sum_h": [12.0, 12.0, 12.0], "sum_cnt": [5, 5, 3],
            "diapers": [6, 7, 5], "meals": [8, 8, 7],
        })
    }

    fn histogram_json() -> Value {
        json!({"time": ["00:00", "00:10"], "sleep": [3, 4], "meals": [0, 1], "diapers": [1, 0]})
    }

    fn percentile_json() -> Value {
        json!({
            "day": [0, 14], "value": [3.4, 3.9],
            "p5": [2.5, 2.9], "p10": [2.7, 3.1], "p25": [3.0, 3.4], "p50": [3.3, 3.7],
            "p75": [3.7, 4.1], "p90": [4.0, 4.4], "p95": [4.2, 4.6],
        })
    }

    fn measurement_json() -> Value {
        json!({"age_weeks": [1, 2], "height": [50, null], "weight": [3.4, 3.7], "nr_events": [0, 2]})
    }

    async fn load_each(harness: &Harness, chart: &str, options: &DisplayOptions) -> LoadOutcome {
        let loader = harness.loader();
        let query = QueryParams::new();
        match chart {
            "summary" => loader.load_time_graph(chart, "/1/data/summary/graph/", &query, Some(options)).await,
            "histogram" => loader.load_histogram(chart, "/1/data/histogram/", &query, Some(options)).await,
            "percentile" => loader.load_percentile_graph(chart, "/1/data/percentiles/weight/", &query, Some(options)).await,
            "measurement" => loader.load_measurement_graph(chart, "/1/data/measurements/", &query, Some(options)).await,
            other => panic!("unknown chart {}", other),
        }
    }

    const CHARTS: [&str; 4] = ["summary", "histogram", "percentile", "measurement"];

    #[tokio::test]
    async fn fetch_failure_alerts_once_and_completes_once() {
        for chart in CHARTS {
            let harness = Harness::new(StubTransport::failing());
            let outcome = load_each(&harness, chart, &DisplayOptions::default()).await;

            assert_eq!(outcome, LoadOutcome::Failed, "{}", chart);
            assert_eq!(harness.alerts(), vec![FETCH_ERROR_MESSAGE.to_owned()], "{}", chart);
            assert_eq!(harness.tracker.done_count(), 1, "{}", chart);
            assert_eq!(harness.render_count(), 0, "{}", chart);
            assert_eq!(harness.transport.request_count(), 1, "{}", chart);
        }
    }

    #[tokio::test]
    async fn success_renders_once_and_completes_once() {
        let payloads = [summary_json(), histogram_json(), percentile_json(), measurement_json()];
        for (chart, payload) in CHARTS.into_iter().zip(payloads) {
            let harness = Harness::new(StubTransport::answering(payload));
            let outcome = load_each(&harness, chart, &DisplayOptions::default()).await;

            assert_eq!(outcome, LoadOutcome::Rendered, "{}", chart);
            assert!(harness.alerts().is_empty(), "{}", chart);
            assert_eq!(harness.tracker.done_count(), 1, "{}", chart);
            assert_eq!(harness.render_count(), 1, "{}", chart);
            assert_eq!(harness.renderer.plots.lock().unwrap()[0].0, chart);
        }
    }

    #[tokio::test]
    async fn request_passes_url_and_query_through() {
        let harness = Harness::new(StubTransport::answering(histogram_json()));
        let query = QueryParams::new().with("from", "2020-05-01").with("to", "2020-05-31");
        harness.loader().load_histogram("histogram", "/1/data/histogram/", &query, None).await;

        let requests = harness.transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "/1/data/histogram/");
        assert_eq!(requests[0].1, query);
    }

    #[tokio::test]
    async fn sleep_toggle_reaches_rendered_figures() {
        let options = DisplayOptions::new(false, true, true);
        for (chart, payload) in [("summary", summary_json()), ("histogram", histogram_json())] {
            let harness = Harness::new(StubTransport::answering(payload));
            load_each(&harness, chart, &options).await;

            let plots = harness.renderer.plots.lock().unwrap();
            let figure = &plots[0].1;
            for trace in &figure.data {
                let is_sleep = !matches!(trace.name.as_str(), "Diapers" | "Meals");
                assert_eq!(trace.visible, Some(!is_sleep), "{} {}", chart, trace.name);
            }
        }
    }

    #[tokio::test]
    async fn time_graph_traces_share_day_column() {
        let harness = Harness::new(StubTransport::answering(summary_json()));
        harness.loader().load_time_graph("summary", "/1/data/summary/graph/", &QueryParams::new(), None).await;

        let plots = harness.renderer.plots.lock().unwrap();
        let figure = &plots[0].1;
        assert_eq!(figure.data.len(), 5);
        let days = serde_json::to_value(&figure.data[0].x).unwrap();
        assert_eq!(days, json!(["2020-05-01", "2020-05-02", "2020-05-03"]));
        for trace in &figure.data {
            assert_eq!(serde_json::to_value(&trace.x).unwrap(), days);
            assert_eq!(trace.y.len(), 3);
        }
    }

    #[tokio::test]
    async fn misaligned_payload_is_treated_as_fetch_failure() {
        let mut payload = summary_json();
        payload["sum_h"] = json!([12.0]);
        let harness = Harness::new(StubTransport::answering(payload));
        let outcome = harness.loader().load_time_graph("summary", "/x", &QueryParams::new(), None).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(harness.alerts().len(), 1);
        assert_eq!(harness.render_count(), 0);
        assert!(harness.tracker.is_all_done());
    }

    #[tokio::test]
    async fn render_failure_is_logged_not_alerted() {
        let mut harness = Harness::new(StubTransport::answering(histogram_json()));
        harness.renderer.refuse = true;
        let outcome = harness.loader().load_histogram("histogram", "/x", &QueryParams::new(), None).await;

        assert_eq!(outcome, LoadOutcome::RenderFailed);
        assert!(harness.alerts().is_empty());
        assert_eq!(harness.tracker.done_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_loads_settle_the_tracker() {
        let transport = StubTransport::answering(histogram_json());
        let renderer = RecordingRenderer::default();
        let notifier = RecordingNotifier::default();
        let tracker = CompletionTracker::new(3);
        let loader = ChartLoader::new(&transport, &renderer, &notifier, &tracker);
        let query = QueryParams::new();

        let (a, b, c) = tokio::join!(
            loader.load_histogram("first", "/a", &query, None),
            loader.load_histogram("second", "/b", &query, None),
            loader.load_time_graph("third", "/c", &query, None),
        );

        assert_eq!((a, b), (LoadOutcome::Rendered, LoadOutcome::Rendered));
        // a histogram payload is not a summary payload
        assert_eq!(c, LoadOutcome::Failed);
        assert!(tracker.is_all_done());
        assert_eq!(notifier.alerts.lock().unwrap().len(), 1);
        assert_eq!(renderer.plots.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn check_status_success_and_failure() {
        let harness = Harness::new(StubTransport::answering(json!({
            "eat": {"state": 1, "since_d": "0", "since_h": "2", "since_m": "0"},
            "sleep": {"state": 1, "since_d": "0", "since_h": "0", "since_m": "30"},
            "diaper": {"state": 0},
        })));
        let check = harness.loader().load_check("/1/data/check/", &QueryParams::new()).await.unwrap();
        assert_eq!(check.describe_meal(), "Last meal 2 hours ago");
        assert!(harness.alerts().is_empty());
        assert!(harness.tracker.is_all_done());

        let harness = Harness::new(StubTransport::failing());
        assert!(harness.loader().load_check("/1/data/check/", &QueryParams::new()).await.is_none());
        assert_eq!(harness.alerts(), vec![FETCH_ERROR_MESSAGE.to_owned()]);
        assert_eq!(harness.tracker.done_count(), 1);
        assert_eq!(harness.render_count(), 0);
    }
}
