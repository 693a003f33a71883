use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(untagged)]
/// A raw JSON-RPC request ID.
///
/// JSON-RPC allows numeric or string IDs. [`RpcTransport::call`] generates
/// string IDs for you; only implement transports with `call_raw`.
pub enum JrpcId {
    Number(i64),
    String(String),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// A raw JSON-RPC request envelope.
pub struct JrpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<serde_json::Value>,
    pub id: JrpcId,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// A raw JSON-RPC response envelope.
///
/// Both `result` and `error` may be `None`, which represents a successful
/// response whose result is JSON `null`.
pub struct JrpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<JrpcError>,
    pub id: JrpcId,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// A raw JSON-RPC error object, as defined by the JSON-RPC 2.0 spec.
pub struct JrpcError {
    pub code: i64,
    pub message: String,
    pub data: serde_json::Value,
}

/// A server-returned error.
///
/// Returned from [`RpcService::respond`] when the method exists but failed
/// to execute. Note that the calculator reports division by zero in-band
/// through its response status, not through this type; `ServerError` is
/// reserved for wire-level failures such as undecodable parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerError {
    pub code: u32,
    pub message: String,
    pub details: serde_json::Value,
}

/// Server-side RPC dispatch.
///
/// Implementors map a method name plus positional JSON arguments into a JSON
/// value (success), a [`ServerError`] (method failed), or `None` (no such
/// method). Transports decode a [`JrpcRequest`] off the wire and feed it to
/// [`RpcService::respond_raw`], which handles version checks, method lookup,
/// and error mapping.
pub trait RpcService: Sync + Send + 'static {
    /// Responds to an RPC call with method name and positional arguments.
    ///
    /// Return `None` to indicate the method does not exist. Returning
    /// `Some(Err(_))` indicates the method exists but failed at runtime.
    fn respond(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> impl std::future::Future<Output = Option<Result<serde_json::Value, ServerError>>> + Send;

    /// Responds to a raw JSON-RPC request, returning a raw JSON-RPC response.
    fn respond_raw(
        &self,
        jrpc_req: JrpcRequest,
    ) -> impl std::future::Future<Output = JrpcResponse> + Send {
        async move {
        if jrpc_req.jsonrpc != "2.0" {
            JrpcResponse {
                id: jrpc_req.id,
                jsonrpc: "2.0".into(),
                result: None,
                error: Some(JrpcError {
                    code: -32600,
                    message: "JSON-RPC version wrong".into(),
                    data: serde_json::Value::Null,
                }),
            }
        } else if let Some(response) = self.respond(&jrpc_req.method, jrpc_req.params).await {
            match response {
                Ok(response) => JrpcResponse {
                    id: jrpc_req.id,
                    jsonrpc: "2.0".into(),
                    result: Some(response),
                    error: None,
                },
                Err(err) => JrpcResponse {
                    id: jrpc_req.id,
                    jsonrpc: "2.0".into(),
                    result: None,
                    error: Some(JrpcError {
                        code: err.code as i64,
                        message: err.message,
                        data: err.details,
                    }),
                },
            }
        } else {
            JrpcResponse {
                id: jrpc_req.id,
                jsonrpc: "2.0".into(),
                result: None,
                error: Some(JrpcError {
                    code: -32601,
                    message: "Method not found".into(),
                    data: serde_json::Value::Null,
                }),
            }
        }
        }
    }
}

impl<T: RpcService + ?Sized> RpcService for Arc<T> {
    async fn respond(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Option<Result<serde_json::Value, ServerError>> {
        self.as_ref().respond(method, params).await
    }
}

/// Client-side transport for sending JSON-RPC requests.
///
/// Implement [`RpcTransport::call_raw`] to define how raw requests reach the
/// server (HTTP, in-process, etc.). Callers should use
/// [`RpcTransport::call`], which handles request IDs and error unwrapping.
pub trait RpcTransport: Sync + Send + 'static {
    /// Transport-level errors: connection failures and the like.
    type Error: Sync + Send + 'static;

    /// Sends an RPC call to the remote side, returning the result.
    ///
    /// `Ok(None)` means the transport worked but the method does not exist.
    /// This generally does not need a manual implementation.
    async fn call(
        &self,
        method: &str,
        params: &[serde_json::Value],
    ) -> Result<Option<Result<serde_json::Value, ServerError>>, Self::Error> {
        let reqid = format!("req-{}", fastrand::u64(..));
        let req = JrpcRequest {
            jsonrpc: "2.0".into(),
            id: JrpcId::String(reqid),
            method: method.into(),
            params: params.to_vec(),
        };
        let result = self.call_raw(req).await?;
        if let Some(res) = result.result {
            Ok(Some(Ok(res)))
        } else if let Some(res) = result.error {
            if res.code == -32601 {
                Ok(None)
            } else {
                Ok(Some(Err(ServerError {
                    code: res.code as u32,
                    message: res.message,
                    details: res.data,
                })))
            }
        } else {
            // both result and error absent: the result is a genuine null
            Ok(Some(Ok(serde_json::Value::Null)))
        }
    }

    /// Sends an RPC call to the remote side as a raw JSON-RPC request.
    async fn call_raw(&self, req: JrpcRequest) -> Result<JrpcResponse, Self::Error>;
}

impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    type Error = T::Error;

    async fn call_raw(&self, req: JrpcRequest) -> Result<JrpcResponse, Self::Error> {
        self.as_ref().call_raw(req).await
    }
}

impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
    type Error = T::Error;

    async fn call_raw(&self, req: JrpcRequest) -> Result<JrpcResponse, Self::Error> {
        self.as_ref().call_raw(req).await
    }
}
