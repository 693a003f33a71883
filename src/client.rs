use thiserror::Error;

use crate::jsonrpc::{JrpcRequest, JrpcResponse, RpcService, RpcTransport};
use crate::protocol::{CalculateRequest, CalculateResponse};

/// Errors a calculator call can fail with on the client side.
///
/// Division by zero is not among them: the server reports it in-band via
/// the response status, so it surfaces as a successful call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport failed to deliver the call.
    #[error("transport error: {0}")]
    Transport(anyhow::Error),

    /// The server does not expose the requested method.
    #[error("method not found on server")]
    MethodNotFound,

    /// The server rejected the call at the wire level.
    #[error("server error {code}: {message}")]
    Server { code: u32, message: String },

    /// The server's result did not decode as a [`CalculateResponse`].
    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Typed client for the calculator protocol, generic over the transport.
pub struct CalculatorClient<T: RpcTransport>(pub T);

impl<T: RpcTransport> CalculatorClient<T>
where
    T::Error: Into<anyhow::Error>,
{
    pub async fn add(&self, a: i64, b: i64) -> Result<CalculateResponse, ClientError> {
        self.invoke("add", a, b).await
    }

    pub async fn subtract(&self, a: i64, b: i64) -> Result<CalculateResponse, ClientError> {
        self.invoke("subtract", a, b).await
    }

    pub async fn multiply(&self, a: i64, b: i64) -> Result<CalculateResponse, ClientError> {
        self.invoke("multiply", a, b).await
    }

    pub async fn divide(&self, a: i64, b: i64) -> Result<CalculateResponse, ClientError> {
        self.invoke("divide", a, b).await
    }

    async fn invoke(&self, method: &str, a: i64, b: i64) -> Result<CalculateResponse, ClientError> {
        let params = [serde_json::to_value(CalculateRequest { a, b })?];
        let result = self
            .0
            .call(method, &params)
            .await
            .map_err(|e| ClientError::Transport(e.into()))?;
        match result {
            None => Err(ClientError::MethodNotFound),
            Some(Err(err)) => Err(ClientError::Server {
                code: err.code,
                message: err.message,
            }),
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
        }
    }
}

/// A transport that answers calls in-process against a local [`RpcService`].
pub struct LoopbackTransport<S: RpcService>(pub S);

impl<S: RpcService> RpcTransport for LoopbackTransport<S> {
    type Error = std::convert::Infallible;

    async fn call_raw(&self, req: JrpcRequest) -> Result<JrpcResponse, Self::Error> {
        Ok(self.0.respond_raw(req).await)
    }
}
