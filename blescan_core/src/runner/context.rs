use std::future::Future;

use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::Config;
#[derive(Default, Debug, Clone)]
pub struct Context {
    pub config: Config,
    cancel: CancellationToken,
    tasks: TaskTracker,
}
impl Context {
    pub fn new(config: Config) -> Self {
        Self {
            cancel: CancellationToken::default(),
            tasks: TaskTracker::default(),
            config,
        }
    }
    pub fn spawn<F: Future<Output = ()> + Send + 'static>(&self, task: F) {
        self.tasks.spawn(task);
    }
    pub fn child_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }
    /// Waits for every task to finish on its own, without cancelling them.
    pub async fn shutdown_when_idle(self) {
        self.tasks.close();
        self.tasks.wait().await;
    }
    pub async fn shutdown(self) {
        self.cancel.cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }
}
impl From<Config> for Context {
    fn from(value: Config) -> Self {
        Self::new(value)
    }
}
