use crate::connector::{ConnectorError, ConnectorState};

#[derive(Debug, Clone)]
pub enum Message {
    Connect,
    Disconnect,
    Activated(Result<ConnectorState, ConnectorError>),
    Deactivated(Result<ConnectorState, ConnectorError>),
    SelectAsset(usize),
    SelectAll,
    ChooseProofFile,
    ProofFileChosen(Option<String>),
}
