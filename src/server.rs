use std::sync::Arc;

use warp::Filter;

use crate::jsonrpc::{JrpcRequest, RpcService};

/// The fixed port the calculator server listens on.
pub const DEFAULT_PORT: u16 = 50052;

/// A warp route serving any [`RpcService`] at `POST /rpc`.
///
/// The request body is a raw JSON-RPC envelope; the reply is the serialized
/// JSON-RPC response. Every call, including division by zero, produces an
/// HTTP 200 with the outcome carried in the body.
pub fn rpc_route<S: RpcService>(
    service: Arc<S>,
) -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::path("rpc")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |item: JrpcRequest| {
            let service = service.clone();
            async move {
                Ok::<_, warp::Rejection>(
                    serde_json::to_string(&service.respond_raw(item).await).unwrap(),
                )
            }
        })
}
