use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use landing_core::constants::SIMULATED_SUBMIT_DELAY;
use landing_core::{timer_millis, ContactPayload, SubmitError, SubmitHandler};

/// Stand-in handler used when the page is not wired to a backend:
/// waits a fixed delay, logs the payload and succeeds. No network I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSubmit;

impl SubmitHandler for LoggingSubmit {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        async move {
            TimeoutFuture::new(timer_millis(SIMULATED_SUBMIT_DELAY)).await;
            log::info!(
                "[contact] submitted name={:?} email={:?} message_len={}",
                payload.name,
                payload.email,
                payload.message.chars().count()
            );
            Ok(())
        }
        .boxed_local()
    }
}
