use std::time::Duration;

use async_trait::async_trait;
use zenith_core::timing::Delay;

#[derive(Debug, Clone, Copy, Default)]
/// `setTimeout` через `gloo-timers`.
pub(crate) struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
