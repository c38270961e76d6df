
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::ApplyFilterRequest, step_id_struct::StepId,
};
use tokio::sync::Semaphore;

/// Records every request and answers `step-<n>` for the n-th call.
///
/// With `gated()` each call blocks until the test releases it, which keeps a
/// call in flight for as long as a test needs.
pub(crate) struct RecordingApplier {
    requests: Mutex<Vec<ApplyFilterRequest>>,
    failures: Mutex<VecDeque<bool>>,
    gate: Option<Semaphore>,
}

impl RecordingApplier {
    pub(crate) fn open() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            gate: None,
        }
    }

    pub(crate) fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::open()
        }
    }

    /// Outcome of upcoming calls in order, `true` meaning the call fails.
    pub(crate) fn script_failures(&self, failures: impl IntoIterator<Item = bool>) {
        self.failures.lock().unwrap().extend(failures);
    }

    pub(crate) fn release(&self, calls: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(calls);
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApplyFilterRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) async fn wait_for_calls(&self, calls: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.requests.lock().unwrap().len() < calls {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("applier was not called in time");
    }
}

#[async_trait]
impl FilterApplier for RecordingApplier {
    async fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<StepId> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        let fails = self.failures.lock().unwrap().pop_front().unwrap_or(false);
        if fails {
            bail!("backend unavailable");
        }
        Ok(StepId::new(format!("step-{call}")))
    }
}
