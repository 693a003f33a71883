use log::debug;

use crate::jsonrpc::{RpcService, ServerError};
use crate::protocol::{CalculateRequest, CalculatorProtocol};

/// Bridges a [`CalculatorProtocol`] implementation onto the wire.
///
/// Dispatches by method name, decodes the typed request from the first
/// positional parameter, and serializes the typed response back. Unknown
/// methods fall through to the wire layer's method-not-found handling.
pub struct CalculatorService<T: CalculatorProtocol>(pub T);

impl<T: CalculatorProtocol> RpcService for CalculatorService<T> {
    async fn respond(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Option<Result<serde_json::Value, ServerError>> {
        debug!("dispatching method {:?}", method);
        let req: CalculateRequest = match decode_request(&params) {
            Ok(req) => req,
            Err(err) => {
                // only for known methods; unknown ones must stay None
                return match method {
                    "add" | "subtract" | "multiply" | "divide" => Some(Err(err)),
                    _ => None,
                };
            }
        };
        let resp = match method {
            "add" => self.0.add(req).await,
            "subtract" => self.0.subtract(req).await,
            "multiply" => self.0.multiply(req).await,
            "divide" => self.0.divide(req).await,
            _ => return None,
        };
        Some(Ok(
            serde_json::to_value(resp).expect("serialization failed")
        ))
    }
}

fn decode_request(params: &[serde_json::Value]) -> Result<CalculateRequest, ServerError> {
    let raw = params.first().ok_or_else(|| invalid_params("missing request parameter"))?;
    serde_json::from_value(raw.clone()).map_err(|e| invalid_params(&e.to_string()))
}

fn invalid_params(detail: &str) -> ServerError {
    ServerError {
        code: 1,
        message: format!("invalid parameters: {detail}"),
        details: serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonrpc::RpcService;
    use crate::protocol::Arithmetic;

    fn params(a: i64, b: i64) -> Vec<serde_json::Value> {
        vec![serde_json::json!({"a": a, "b": b})]
    }

    #[test]
    fn dispatches_all_four_methods() {
        smol::future::block_on(async move {
            let service = CalculatorService(Arithmetic);
            for (method, expected) in [("add", 5), ("subtract", -1), ("multiply", 6), ("divide", 0)]
            {
                let result = service
                    .respond(method, params(2, 3))
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(result["result"], serde_json::json!(expected));
                assert_eq!(result["status"], serde_json::json!("OK"));
            }
        });
    }

    #[test]
    fn divide_by_zero_is_in_band() {
        smol::future::block_on(async move {
            let service = CalculatorService(Arithmetic);
            // a wire-level success carrying an ERROR status
            let result = service
                .respond("divide", params(7, 0))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(result["result"], serde_json::json!(0));
            assert_eq!(result["status"], serde_json::json!("ERROR"));
            assert_eq!(
                result["message"],
                serde_json::json!("Division by zero is not allowed")
            );
        });
    }

    #[test]
    fn unknown_method_is_none() {
        smol::future::block_on(async move {
            let service = CalculatorService(Arithmetic);
            assert!(service.respond("modulo", params(7, 3)).await.is_none());
            assert!(service.respond("modulo", vec![]).await.is_none());
        });
    }

    #[test]
    fn malformed_params_are_a_server_error() {
        smol::future::block_on(async move {
            let service = CalculatorService(Arithmetic);
            let err = service
                .respond("add", vec![serde_json::json!("two")])
                .await
                .unwrap()
                .unwrap_err();
            assert!(err.message.starts_with("invalid parameters"));

            let err = service.respond("add", vec![]).await.unwrap().unwrap_err();
            assert!(err.message.contains("missing request parameter"));
        });
    }
}
