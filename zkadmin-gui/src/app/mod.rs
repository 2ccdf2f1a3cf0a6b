//! Wallet status panel: connection control, asset table and proof input.

pub mod asset;
pub mod message;
pub mod proof;
pub mod selection;
pub mod view;

use std::sync::Arc;

use iced::Task;
use tracing::{error, info};
use zkadmin_ui::widget::Element;

use crate::connector::{Connector, ConnectorError, ConnectorState};

pub use message::Message;

use asset::Asset;
use proof::ChosenFile;
use selection::Selection;

pub const CONNECT_PROMPT: &str = "Connect wallet";
/// Shown in place of the wallet address until an account is connected.
pub const PLACEHOLDER_ADDRESS: &str = "0x1234...5678";

/// `0xabcdef0123...1234` -> `0xabcd...1234`
pub fn truncate_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

async fn activate(
    connector: Arc<dyn Connector + Send + Sync>,
) -> Result<ConnectorState, ConnectorError> {
    connector.activate().await?;
    Ok(connector.state())
}

async fn deactivate(
    connector: Arc<dyn Connector + Send + Sync>,
) -> Result<ConnectorState, ConnectorError> {
    connector.deactivate().await?;
    Ok(connector.state())
}

pub struct WalletStatus {
    connector: Arc<dyn Connector + Send + Sync>,
    assets: Vec<Asset>,
    selection: Selection,
    chosen_file: ChosenFile,
    connection: ConnectorState,
}

impl WalletStatus {
    pub fn new(connector: Arc<dyn Connector + Send + Sync>) -> Self {
        Self::with_assets(connector, asset::mock_assets())
    }

    pub fn with_assets(connector: Arc<dyn Connector + Send + Sync>, assets: Vec<Asset>) -> Self {
        let connection = connector.state();
        Self {
            connector,
            assets,
            selection: Selection::default(),
            chosen_file: ChosenFile::default(),
            connection,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn chosen_file(&self) -> &ChosenFile {
        &self.chosen_file
    }

    pub fn connection(&self) -> &ConnectorState {
        &self.connection
    }

    /// Computed from the whole asset list on each call.
    pub fn total_value(&self) -> u64 {
        asset::total_value(&self.assets)
    }

    pub fn button_label(&self) -> String {
        match &self.connection.account {
            Some(account) => truncate_account(account),
            None => CONNECT_PROMPT.to_string(),
        }
    }

    pub fn wallet_address(&self) -> &str {
        self.connection
            .account
            .as_deref()
            .unwrap_or(PLACEHOLDER_ADDRESS)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Connect => {
                info!("Requesting {} activation", self.connector.name());
                Task::perform(activate(self.connector.clone()), Message::Activated)
            }
            Message::Disconnect => {
                info!("Requesting {} deactivation", self.connector.name());
                Task::perform(deactivate(self.connector.clone()), Message::Deactivated)
            }
            Message::Activated(res) => {
                match res {
                    Ok(state) => self.connection = state,
                    Err(e) => error!("Failed to connect wallet: {}", e),
                }
                Task::none()
            }
            Message::Deactivated(res) => {
                match res {
                    Ok(state) => self.connection = state,
                    Err(e) => error!("Failed to disconnect wallet: {}", e),
                }
                Task::none()
            }
            Message::SelectAsset(i) => {
                if i < self.assets.len() {
                    self.selection.toggle(i);
                }
                Task::none()
            }
            Message::SelectAll => {
                self.selection.toggle_all(self.assets.len());
                Task::none()
            }
            Message::ChooseProofFile => {
                Task::perform(proof::pick_proof_file(), Message::ProofFileChosen)
            }
            Message::ProofFileChosen(name) => {
                if let Some(name) = &name {
                    info!("Selected file: {}", name);
                }
                self.chosen_file = ChosenFile::from(name);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::wallet_status_view(
            &self.button_label(),
            self.connection.is_active,
            self.total_value(),
            self.wallet_address(),
            &self.assets,
            &self.selection,
            &self.chosen_file,
        )
    }
}
