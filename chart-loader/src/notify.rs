use log::error;

/// The one message a failed load shows the user, whatever went wrong.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data!";

pub trait ErrorNotifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Logs the alert and prints it on stderr.
pub struct LogNotifier;

impl ErrorNotifier for LogNotifier {
    fn alert(&self, message: &str) {
        error!("{}", message);
        eprintln!("{}", message);
    }
}
