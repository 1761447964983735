use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Runs a function only after calls have stopped arriving for `delay`.
///
/// Every [`call`](Debouncer::call) restarts the quiet period. When it finally
/// elapses the function runs once, with the arguments of the latest call, and
/// only that call's handle yields `Some(result)`; superseded calls yield
/// `None`. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<A, R> {
    func: Arc<dyn Fn(A) -> R + Send + Sync>,
    delay: Duration,
    generation: watch::Sender<u64>,
}

impl<A, R> Debouncer<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    pub fn new<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let (generation, _) = watch::channel(0);
        Self {
            func: Arc::new(func),
            delay,
            generation,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `args` and returns a handle resolving once this call is either
    /// executed or superseded. Must be called inside a Tokio runtime.
    pub fn call(&self, args: A) -> JoinHandle<Option<R>> {
        let mut ticket = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            ticket = *generation;
        });
        let mut latest = self.generation.subscribe();
        let func = Arc::clone(&self.func);
        let deadline = Instant::now() + self.delay;

        tokio::spawn(async move {
            let timer = tokio::time::sleep_until(deadline);
            tokio::pin!(timer);
            loop {
                tokio::select! {
                    _ = &mut timer => break,
                    changed = latest.changed() => {
                        if changed.is_err() {
                            tracing::debug!("debouncer dropped, cancelling call #{}", ticket);
                            return None;
                        }
                        if *latest.borrow_and_update() != ticket {
                            tracing::debug!("debounced call #{} superseded", ticket);
                            return None;
                        }
                    }
                }
            }
            // a call may have landed between the timer firing and this point
            if *latest.borrow() != ticket {
                tracing::debug!("debounced call #{} superseded at deadline", ticket);
                return None;
            }
            Some(func(args))
        })
    }
}

/// Shorthand for [`Debouncer::new`].
pub fn debounce<A, R, F>(func: F, delay: Duration) -> Debouncer<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Debouncer::new(func, delay)
}

/// Suspends the current task for `duration`.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub async fn sleep_ms(millis: u64) {
    sleep(Duration::from_millis(millis)).await;
}
