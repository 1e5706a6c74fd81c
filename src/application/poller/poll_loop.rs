use super::config::DEFAULT_POLL_INTERVAL;
use super::types::{Cycle, FeedError, LetterFeed, Pacer, PollError, WordSink};
use crate::application::letters::{LetterObserver, Observation};
use crate::application::ranking::Ranker;
use crate::application::words::WordIndex;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

pub struct PollLoop<F, S, P> {
    feed: F,
    sink: S,
    pacer: P,
    index: WordIndex,
    ranker: Ranker,
    observer: LetterObserver,
    interval: Duration,
}

impl<F, S, P> PollLoop<F, S, P>
where
    F: LetterFeed,
    S: WordSink,
    P: Pacer,
{
    pub fn new(feed: F, sink: S, pacer: P, index: WordIndex) -> Self {
        PollLoop {
            feed,
            sink,
            pacer,
            index,
            ranker: Ranker::default(),
            observer: LetterObserver::new(),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs one extract/observe/dispatch cycle without pausing.
    pub async fn poll_once(&mut self) -> Result<Cycle, PollError> {
        let candidate = match self.feed.extract_current_token().await {
            Ok(token) => token,
            Err(FeedError::Extraction(reason)) => {
                log::debug!("poll.extract_failed reason={}", reason);
                None
            }
            Err(FeedError::Disconnected(reason)) => return Err(PollError::Unrecognized(reason)),
        };

        let token = match (self.observer.observe(candidate.clone()), candidate) {
            (Observation::Changed, Some(token)) => token,
            (Observation::Unchanged, _) => {
                log::trace!("poll.unchanged token={:?}", self.observer.current());
                return Ok(Cycle::Unchanged);
            }
            _ => return Ok(Cycle::Ignored),
        };

        log::info!("poll.changed token={}", token);
        self.sink.announce(&token);

        let t0 = Instant::now();
        let matches = self.index.find(&token);
        log::debug!(
            "perf.search_us={} matches={} token={}",
            t0.elapsed().as_micros(),
            matches.len(),
            token
        );

        let Some(selection) = self.ranker.select(&matches) else {
            self.sink.display(&self.ranker.preview(&matches));
            log::info!("poll.no_selection token={}", token);
            return Ok(Cycle::NoSelection);
        };

        self.sink.display(&selection.preview);
        match self.sink.publish(&selection.word) {
            Ok(()) => {
                log::info!("poll.selected word={} token={}", selection.word, token);
                Ok(Cycle::Selected(selection.word))
            }
            Err(e) => {
                log::warn!("poll.dispatch_failed word={} err={}", selection.word, e);
                Ok(Cycle::DispatchFailed(selection.word))
            }
        }
    }

    /// Polls until `shutdown` resolves or a cycle fails in a way the loop does
    /// not know how to recover from, panics included. The feed is closed
    /// either way.
    pub async fn run<Sd>(&mut self, shutdown: Sd) -> Result<(), PollError>
    where
        Sd: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        log::info!("poll: started interval_ms={}", self.interval.as_millis());

        let result = loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    log::info!("poll: interrupt received, stopping");
                    break Ok(());
                }
                step = AssertUnwindSafe(self.step()).catch_unwind() => {
                    let step = step.unwrap_or_else(|panic| {
                        Err(PollError::Unrecognized(panic_message(panic.as_ref())))
                    });
                    if let Err(e) = step {
                        log::error!("poll: {} - shutting down", e);
                        break Err(e);
                    }
                }
            }
        };

        self.feed.close().await;
        log::info!("poll: feed closed");
        result
    }

    async fn step(&mut self) -> Result<(), PollError> {
        self.poll_once().await?;
        self.pacer.pause(self.interval).await;
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("cycle panicked: {}", detail)
}
