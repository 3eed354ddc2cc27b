use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::domain::live::LiveStatus;
use crate::domain::process::{ProcessArea, ProcessSpecification};
use crate::services::live_status::{get_live_process_status, get_live_process_status_with_sampler};
use crate::services::sampler::KpiSampler;

pub const LIVE_TICK_PERIOD: Duration = Duration::from_secs(2);

/// Handle on a running live-status task.
///
/// Only the newest snapshot is kept. After [`LiveFeed::cancel`] (or drop) the
/// task is aborted and [`LiveFeed::next`] yields nothing.
#[derive(Debug)]
pub struct LiveFeed {
    area: ProcessArea,
    receiver: watch::Receiver<Option<LiveStatus>>,
    task: JoinHandle<()>,
    cancelled: bool,
}

/// Spawns the ticker on the current tokio runtime. The first snapshot arrives
/// one full `period` after the call.
pub fn start_live_feed<S>(
    area: ProcessArea,
    spec: ProcessSpecification,
    period: Duration,
    mut sampler: S,
) -> LiveFeed
where
    S: KpiSampler + Send + 'static,
{
    spawn_feed(area, period, move || {
        get_live_process_status_with_sampler(area, &spec, &mut sampler)
    })
}

/// Like [`start_live_feed`], drawing every snapshot from the thread-local rng.
pub fn start_unseeded_live_feed(
    area: ProcessArea,
    spec: ProcessSpecification,
    period: Duration,
) -> LiveFeed {
    spawn_feed(area, period, move || get_live_process_status(area, &spec))
}

fn spawn_feed<F>(area: ProcessArea, period: Duration, mut snapshot: F) -> LiveFeed
where
    F: FnMut() -> LiveStatus + Send + 'static,
{
    let (sender, receiver) = watch::channel(None);
    info!(area = area.key(), period_ms = period.as_millis() as u64, "live feed started");

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let status = snapshot();
            debug!(area = area.key(), state = ?status.state, "live tick");
            if sender.send(Some(status)).is_err() {
                break;
            }
        }
    });

    LiveFeed {
        area,
        receiver,
        task,
        cancelled: false,
    }
}

impl LiveFeed {
    pub fn area(&self) -> ProcessArea {
        self.area
    }

    /// Waits for the next tick. `None` once the feed is cancelled.
    pub async fn next(&mut self) -> Option<LiveStatus> {
        if self.cancelled {
            return None;
        }
        self.receiver.changed().await.ok()?;
        self.receiver.borrow_and_update().clone()
    }

    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            self.task.abort();
            info!(area = self.area.key(), "live feed cancelled");
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}
