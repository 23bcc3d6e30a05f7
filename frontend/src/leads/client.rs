use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

/// Which stage of the round trip failed. Only used for logging; the form
/// shows the same notice for all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    ServerStatus,
    Parse,
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("could not encode request body: {0}")]
    RequestBuild(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    ServerStatus(u16),
    #[error("response body is not JSON: {0}")]
    Parse(String),
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::RequestBuild(_) | SubmissionError::Network(_) => ErrorKind::Network,
            SubmissionError::ServerStatus(_) => ErrorKind::ServerStatus,
            SubmissionError::Parse(_) => ErrorKind::Parse,
        }
    }
}

/// One JSON POST. Implementations must make exactly one request per call
/// and never retry.
#[async_trait(?Send)]
pub trait LeadTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<Value, SubmissionError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl LeadTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<Value, SubmissionError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| SubmissionError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SubmissionError::ServerStatus(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SubmissionError::Parse(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionClient<T> {
    transport: T,
    endpoint: String,
}

impl SubmissionClient<GlooTransport> {
    pub fn browser() -> Self {
        Self::new(GlooTransport, config::get_submission_endpoint())
    }
}

impl<T: LeadTransport> SubmissionClient<T> {
    pub fn new(transport: T, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit<E: Serialize>(&self, envelope: &E) -> Result<Value, SubmissionError> {
        let body = serde_json::to_value(envelope)
            .map_err(|e| SubmissionError::RequestBuild(e.to_string()))?;
        let source = body
            .get("source")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        match self.transport.post_json(&self.endpoint, body).await {
            Ok(result) => {
                info!("Lead from {} accepted: {}", source, result);
                Ok(result)
            }
            Err(e) => {
                error!("Lead from {} failed ({:?}): {}", source, e.kind(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every body it is handed and answers from a script.
    /// Runs out of script → answers `{"status":"ok"}`.
    #[derive(Default)]
    pub struct FakeTransport {
        pub sent: RefCell<Vec<(String, Value)>>,
        replies: RefCell<VecDeque<Result<Value, SubmissionError>>>,
    }

    impl FakeTransport {
        pub fn replying(replies: Vec<Result<Value, SubmissionError>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into()),
            }
        }

        pub fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl LeadTransport for FakeTransport {
        async fn post_json(&self, url: &str, body: Value) -> Result<Value, SubmissionError> {
            self.sent.borrow_mut().push((url.to_string(), body));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(serde_json::json!({ "status": "ok" })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Serialize)]
    struct Probe {
        source: &'static str,
        value: u8,
    }

    #[test]
    fn posts_once_to_the_endpoint() {
        let client = SubmissionClient::new(FakeTransport::default(), config::SUBMISSION_ENDPOINT);
        let result = block_on(client.submit(&Probe { source: "contact_modal", value: 7 }));

        assert_eq!(result.unwrap(), json!({ "status": "ok" }));
        let sent = client.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://appslabs.store/db/pushdata.php");
        assert_eq!(sent[0].1, json!({ "source": "contact_modal", "value": 7 }));
    }

    #[test]
    fn failures_are_not_retried() {
        let transport = FakeTransport::replying(vec![Err(SubmissionError::ServerStatus(502))]);
        let client = SubmissionClient::new(transport, config::SUBMISSION_ENDPOINT);
        let err = block_on(client.submit(&Probe { source: "request_demo", value: 1 })).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ServerStatus);
        assert_eq!(client.transport().calls(), 1);
    }

    #[test]
    fn error_kinds() {
        assert_eq!(SubmissionError::Network("reset".into()).kind(), ErrorKind::Network);
        assert_eq!(SubmissionError::RequestBuild("bad".into()).kind(), ErrorKind::Network);
        assert_eq!(SubmissionError::ServerStatus(500).kind(), ErrorKind::ServerStatus);
        assert_eq!(SubmissionError::Parse("eof".into()).kind(), ErrorKind::Parse);
        assert_eq!(
            SubmissionError::ServerStatus(404).to_string(),
            "server responded with status 404"
        );
    }
}
