use std::fmt::Display;
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Spinner printed on stderr while a model call is in flight.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    /// Spins until `call` resolves, then prints `done` or the call's error.
    pub async fn track<T, E, F>(message: impl Into<String>, done: &str, call: F) -> Result<T, E>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let mut logger = Self::new(message);
        logger.start();

        let result = call.await;
        match &result {
            Ok(_) => logger.stop(done).await,
            Err(e) => logger.error(&e.to_string()).await,
        }
        result
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.is_some()
    }

    /// Starting twice keeps the first spinner.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(FRAME_INTERVAL);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("{}", frame_line(&message, frame));
                        let _ = std::io::stderr().flush();
                        frame += 1;
                    }
                    _ = stop_rx.recv() => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish(&format!("✅  {}", final_message)).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish(&format!("❌ {}", error_message)).await;
    }

    async fn finish(&mut self, line: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            if let Err(e) = handle.await {
                log::debug!("Spinner task ended abnormally: {}", e);
            }
        }

        eprint!("\r\x1b[K{}\n", line);
        let _ = std::io::stderr().flush();
    }
}

fn frame_line(message: &str, frame: usize) -> String {
    format!("\r{} {} ", message, FRAMES[frame % FRAMES.len()])
}
