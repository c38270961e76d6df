use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::ApplyFilterRequest, step_id_struct::StepId,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Clone)]
struct PendingUpdate {
    generation: u64,
    request: ApplyFilterRequest,
}

/// Single-flight, latest-wins queue of filter updates for one panel.
///
/// At most one apply-filter call is in flight. Updates submitted meanwhile
/// overwrite each other, and only the newest one is sent once the running
/// call returns, tagged with the step id that call produced. A failed call
/// keeps the previous step id and is not retried.
pub struct FilterUpdateDispatcher {
    pending_tx: watch::Sender<Option<PendingUpdate>>,
    step_rx: watch::Receiver<Option<StepId>>,
    completed_rx: watch::Receiver<u64>,
    submitted: u64,
    worker: JoinHandle<()>,
}

impl FilterUpdateDispatcher {
    /// Starts the worker task. Must be called from within a tokio runtime.
    pub fn spawn<A>(applier: A) -> Self
    where
        A: FilterApplier + 'static,
    {
        let (pending_tx, pending_rx) = watch::channel(None);
        let (step_tx, step_rx) = watch::channel(None);
        let (completed_tx, completed_rx) = watch::channel(0);

        let worker = tokio::spawn(run_worker(applier, pending_rx, step_tx, completed_tx));

        Self {
            pending_tx,
            step_rx,
            completed_rx,
            submitted: 0,
            worker,
        }
    }

    /// Queue a request. Never waits for the backend.
    pub fn submit(&mut self, request: ApplyFilterRequest) {
        self.submitted += 1;
        debug!(
            "Update #{} queued with {} filters",
            self.submitted,
            request.filters.len()
        );
        self.pending_tx.send_replace(Some(PendingUpdate {
            generation: self.submitted,
            request,
        }));
    }

    /// Step id returned by the last successful call.
    pub fn step_id(&self) -> Option<StepId> {
        self.step_rx.borrow().clone()
    }

    /// Wait until every submitted update has been sent or superseded.
    pub async fn flush(&self) {
        let target = self.submitted;
        let mut completed_rx = self.completed_rx.clone();
        // Errs only if the worker is gone, in which case nothing is left to wait for.
        _ = completed_rx.wait_for(|completed| *completed >= target).await;
    }

    /// Flush, then stop the worker.
    pub async fn shutdown(self) {
        self.flush().await;

        let Self {
            pending_tx, worker, ..
        } = self;
        drop(pending_tx);

        if let Err(e) = worker.await {
            error!("Filter update worker ended abnormally: {e}");
        }
    }
}

async fn run_worker<A: FilterApplier>(
    applier: A,
    mut pending_rx: watch::Receiver<Option<PendingUpdate>>,
    step_tx: watch::Sender<Option<StepId>>,
    completed_tx: watch::Sender<u64>,
) {
    while pending_rx.changed().await.is_ok() {
        let Some(update) = pending_rx.borrow_and_update().clone() else {
            continue;
        };

        let step_id = step_tx.borrow().clone();
        let request = update.request.with_step_id(step_id);

        match applier.apply_filter(&request).await {
            Ok(step_id) => {
                debug!("Update #{} applied as step {step_id}", update.generation);
                step_tx.send_replace(Some(step_id));
            }
            Err(e) => {
                error!(
                    "Failed to apply filters on column {}: {e:#}",
                    request.column_id
                );
            }
        }

        completed_tx.send_replace(update.generation);
    }
}
