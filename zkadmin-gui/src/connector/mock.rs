use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Connector, ConnectorError, ConnectorState, ProviderInfo};

/// Connector returning scripted outcomes, in order. Once the script is
/// exhausted every call succeeds.
#[derive(Debug, Default)]
pub struct MockConnector {
    account: String,
    state: Mutex<ConnectorState>,
    activations: Mutex<VecDeque<Result<(), ConnectorError>>>,
    deactivations: Mutex<VecDeque<Result<(), ConnectorError>>>,
    activate_calls: AtomicUsize,
    deactivate_calls: AtomicUsize,
}

impl MockConnector {
    pub fn new(account: &str) -> Self {
        Self {
            account: account.to_string(),
            ..Default::default()
        }
    }

    pub fn with_activation(self, res: Result<(), ConnectorError>) -> Self {
        self.activations.lock().unwrap().push_back(res);
        self
    }

    pub fn with_deactivation(self, res: Result<(), ConnectorError>) -> Self {
        self.deactivations.lock().unwrap().push_back(res);
        self
    }

    pub fn activate_calls(&self) -> usize {
        self.activate_calls.load(Ordering::SeqCst)
    }

    pub fn deactivate_calls(&self) -> usize {
        self.deactivate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn name(&self) -> &str {
        "mock"
    }

    fn state(&self) -> ConnectorState {
        self.state.lock().unwrap().clone()
    }

    async fn activate(&self) -> Result<(), ConnectorError> {
        self.activate_calls.fetch_add(1, Ordering::SeqCst);
        let res = self.activations.lock().unwrap().pop_front().unwrap_or(Ok(()));
        if res.is_ok() {
            *self.state.lock().unwrap() = ConnectorState::connected(
                self.account.clone(),
                ProviderInfo {
                    endpoint: "mock://".to_string(),
                    chain_id: 1,
                },
            );
        }
        res
    }

    async fn deactivate(&self) -> Result<(), ConnectorError> {
        self.deactivate_calls.fetch_add(1, Ordering::SeqCst);
        let res = self
            .deactivations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()));
        if res.is_ok() {
            *self.state.lock().unwrap() = ConnectorState::default();
        }
        res
    }
}
