//! Connector speaking the EIP-1193 JSON-RPC methods to a wallet over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{Connector, ConnectorError, ConnectorState, ProviderInfo};

#[derive(Debug, Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct Response<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug)]
pub struct JsonRpcConnector {
    endpoint: String,
    client: reqwest::Client,
    next_id: AtomicU64,
    state: RwLock<ConnectorState>,
}

impl JsonRpcConnector {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ConnectorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectorError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
            next_id: AtomicU64::new(1),
            state: RwLock::new(ConnectorState::default()),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ConnectorError> {
        let request = Request {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!("wallet request {} (id {})", method, request.id);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ConnectorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectorError::Http(
                status.as_u16(),
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            ));
        }

        let response: Response<T> = response
            .json()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;
        match response {
            Response {
                error: Some(RpcError { code, message }),
                ..
            } => Err(ConnectorError::Rejected(code, message)),
            Response {
                result: Some(result),
                ..
            } => Ok(result),
            _ => Err(ConnectorError::InvalidResponse(format!(
                "{} returned neither result nor error",
                method
            ))),
        }
    }

    fn set_state(&self, state: ConnectorState) {
        match self.state.write() {
            Ok(mut guard) => *guard = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }
}

fn parse_chain_id(s: &str) -> Result<u64, ConnectorError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| ConnectorError::InvalidResponse(format!("chain id '{}' is not hex", s)))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| ConnectorError::InvalidResponse(format!("chain id '{}': {}", s, e)))
}

#[async_trait]
impl Connector for JsonRpcConnector {
    fn name(&self) -> &str {
        "JSON-RPC wallet"
    }

    fn state(&self) -> ConnectorState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn activate(&self) -> Result<(), ConnectorError> {
        let accounts: Vec<String> = self
            .call("eth_requestAccounts", Value::Array(Vec::new()))
            .await?;
        let account = accounts.into_iter().next().ok_or(ConnectorError::NoAccount)?;
        let chain_id: String = self.call("eth_chainId", Value::Array(Vec::new())).await?;
        let chain_id = parse_chain_id(&chain_id)?;

        info!("Wallet authorized account {} on chain {}", account, chain_id);
        self.set_state(ConnectorState::connected(
            account,
            ProviderInfo {
                endpoint: self.endpoint.clone(),
                chain_id,
            },
        ));
        Ok(())
    }

    /// The wallet keeps its permission grant, only the session is forgotten.
    async fn deactivate(&self) -> Result<(), ConnectorError> {
        self.set_state(ConnectorState::default());
        info!("Wallet session reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves JSON-RPC answers, one request per connection, picking the body
    /// with `answer(method)`.
    async fn serve(answer: fn(&str) -> (u16, String)) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                let body = loop {
                    let n = stream.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break None;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                    let raw = String::from_utf8_lossy(&buf).to_string();
                    if let Some(pos) = raw.find("\r\n\r\n") {
                        let len = raw[..pos]
                            .lines()
                            .find_map(|l| {
                                let l = l.to_lowercase();
                                l.strip_prefix("content-length:")
                                    .map(|v| v.trim().parse::<usize>().unwrap())
                            })
                            .unwrap_or(0);
                        if buf.len() >= pos + 4 + len {
                            break Some(raw[pos + 4..pos + 4 + len].to_string());
                        }
                    }
                };
                let Some(body) = body else { continue };
                let request: serde_json::Value = serde_json::from_str(&body).unwrap();
                let (status, payload) = answer(request["method"].as_str().unwrap());
                let response = format!(
                    "HTTP/1.1 {} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    payload.len(),
                    payload
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
        });
        format!("http://{}", addr)
    }

    fn connector(endpoint: String) -> JsonRpcConnector {
        JsonRpcConnector::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1").unwrap(), 1);
        assert_eq!(parse_chain_id("0xaa36a7").unwrap(), 11155111);
        assert!(parse_chain_id("1").is_err());
        assert!(parse_chain_id("0xzz").is_err());
    }

    #[tokio::test]
    async fn activate_then_deactivate() {
        let endpoint = serve(|method| match method {
            "eth_requestAccounts" => (
                200,
                r#"{"jsonrpc":"2.0","id":1,"result":["0xabcdef0123456789abcdef0123456789abcd1234"]}"#
                    .to_string(),
            ),
            "eth_chainId" => (200, r#"{"jsonrpc":"2.0","id":2,"result":"0x1"}"#.to_string()),
            _ => (404, String::new()),
        })
        .await;
        let connector = connector(endpoint.clone());
        assert_eq!(connector.state(), ConnectorState::default());

        connector.activate().await.unwrap();
        let state = connector.state();
        assert!(state.is_active);
        assert_eq!(
            state.account.as_deref(),
            Some("0xabcdef0123456789abcdef0123456789abcd1234")
        );
        assert_eq!(
            state.provider,
            Some(ProviderInfo {
                endpoint,
                chain_id: 1
            })
        );
        assert_eq!(state.ens_name, None);

        connector.deactivate().await.unwrap();
        assert_eq!(connector.state(), ConnectorState::default());
    }

    #[tokio::test]
    async fn user_rejection_keeps_state() {
        let endpoint = serve(|_| {
            (
                200,
                r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#
                    .to_string(),
            )
        })
        .await;
        let connector = connector(endpoint);
        assert_eq!(
            connector.activate().await,
            Err(ConnectorError::Rejected(
                4001,
                "User rejected the request.".to_string()
            ))
        );
        assert_eq!(connector.state(), ConnectorState::default());
    }

    #[tokio::test]
    async fn empty_account_list() {
        let endpoint =
            serve(|_| (200, r#"{"jsonrpc":"2.0","id":1,"result":[]}"#.to_string())).await;
        let connector = connector(endpoint);
        assert_eq!(connector.activate().await, Err(ConnectorError::NoAccount));
        assert!(!connector.state().is_active);
    }

    #[tokio::test]
    async fn http_error_status() {
        let endpoint = serve(|_| (500, "boom".to_string())).await;
        let connector = connector(endpoint);
        assert_eq!(
            connector.activate().await,
            Err(ConnectorError::Http(500, "boom".to_string()))
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let connector = connector(format!("http://{}", addr));
        assert!(matches!(
            connector.activate().await,
            Err(ConnectorError::Transport(_))
        ));
        assert!(!connector.state().is_active);
    }
}
