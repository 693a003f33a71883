use log::info;
use serde::{Deserialize, Serialize};

/// Outcome of a calculation, reported in-band rather than as a wire fault.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Error,
}

/// The two operands of a calculation. Constructed by the caller, consumed
/// once; the operation itself is selected by the method invoked.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculateRequest {
    pub a: i64,
    pub b: i64,
}

/// Result of a calculation. Every response carries a [`Status`]; `ERROR` is
/// produced exactly when the operation is mathematically undefined for the
/// given operands (division by zero).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CalculateResponse {
    pub result: i64,
    pub status: Status,
    pub message: String,
}

impl CalculateResponse {
    pub fn ok(result: i64, message: &str) -> Self {
        Self {
            result,
            status: Status::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            result: 0,
            status: Status::Error,
            message: message.into(),
        }
    }
}

/// The calculator protocol: four unary RPC methods of identical shape.
///
/// Handlers are pure functions of their input and always return a response
/// value; they never fail at the wire level for well-formed operands.
pub trait CalculatorProtocol: Sync + Send + 'static {
    fn add(
        &self,
        req: CalculateRequest,
    ) -> impl std::future::Future<Output = CalculateResponse> + Send;
    fn subtract(
        &self,
        req: CalculateRequest,
    ) -> impl std::future::Future<Output = CalculateResponse> + Send;
    fn multiply(
        &self,
        req: CalculateRequest,
    ) -> impl std::future::Future<Output = CalculateResponse> + Send;
    fn divide(
        &self,
        req: CalculateRequest,
    ) -> impl std::future::Future<Output = CalculateResponse> + Send;
}

/// Stateless implementation of [`CalculatorProtocol`].
///
/// Arithmetic wraps on overflow (two's complement), and division truncates
/// toward zero. Division by zero yields `result = 0` with `Status::Error`.
pub struct Arithmetic;

impl CalculatorProtocol for Arithmetic {
    async fn add(&self, req: CalculateRequest) -> CalculateResponse {
        info!("received add request: {} + {}", req.a, req.b);
        CalculateResponse::ok(req.a.wrapping_add(req.b), "Addition completed successfully")
    }

    async fn subtract(&self, req: CalculateRequest) -> CalculateResponse {
        info!("received subtract request: {} - {}", req.a, req.b);
        CalculateResponse::ok(
            req.a.wrapping_sub(req.b),
            "Subtraction completed successfully",
        )
    }

    async fn multiply(&self, req: CalculateRequest) -> CalculateResponse {
        info!("received multiply request: {} * {}", req.a, req.b);
        CalculateResponse::ok(
            req.a.wrapping_mul(req.b),
            "Multiplication completed successfully",
        )
    }

    async fn divide(&self, req: CalculateRequest) -> CalculateResponse {
        info!("received divide request: {} / {}", req.a, req.b);
        if req.b == 0 {
            return CalculateResponse::error("Division by zero is not allowed");
        }
        CalculateResponse::ok(
            req.a.wrapping_div(req.b),
            "Division completed successfully",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(a: i64, b: i64) -> CalculateRequest {
        CalculateRequest { a, b }
    }

    #[test]
    fn add_scenario() {
        smol::future::block_on(async move {
            let resp = Arithmetic.add(req(2, 3)).await;
            assert_eq!(resp.result, 5);
            assert_eq!(resp.status, Status::Ok);
            assert_eq!(resp.message, "Addition completed successfully");
        });
    }

    #[test]
    fn subtract_scenario() {
        smol::future::block_on(async move {
            let resp = Arithmetic.subtract(req(5, 3)).await;
            assert_eq!(resp.result, 2);
            assert_eq!(resp.status, Status::Ok);
            assert_eq!(resp.message, "Subtraction completed successfully");
        });
    }

    #[test]
    fn multiply_scenario() {
        smol::future::block_on(async move {
            let resp = Arithmetic.multiply(req(4, 3)).await;
            assert_eq!(resp.result, 12);
            assert_eq!(resp.status, Status::Ok);
            assert_eq!(resp.message, "Multiplication completed successfully");
        });
    }

    #[test]
    fn divide_scenario() {
        smol::future::block_on(async move {
            let resp = Arithmetic.divide(req(10, 2)).await;
            assert_eq!(resp.result, 5);
            assert_eq!(resp.status, Status::Ok);
            assert_eq!(resp.message, "Division completed successfully");
        });
    }

    #[test]
    fn divide_by_zero() {
        smol::future::block_on(async move {
            let resp = Arithmetic.divide(req(7, 0)).await;
            assert_eq!(resp.result, 0);
            assert_eq!(resp.status, Status::Error);
            assert_eq!(resp.message, "Division by zero is not allowed");
        });
    }

    #[test]
    fn division_truncates_toward_zero() {
        smol::future::block_on(async move {
            assert_eq!(Arithmetic.divide(req(-7, 2)).await.result, -3);
            assert_eq!(Arithmetic.divide(req(7, -2)).await.result, -3);
            assert_eq!(Arithmetic.divide(req(-7, -2)).await.result, 3);
        });
    }

    #[test]
    fn negative_operands_are_valid() {
        smol::future::block_on(async move {
            assert_eq!(Arithmetic.add(req(-2, -3)).await.result, -5);
            assert_eq!(Arithmetic.subtract(req(-5, 3)).await.result, -8);
            assert_eq!(Arithmetic.multiply(req(-4, 3)).await.result, -12);
        });
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        smol::future::block_on(async move {
            let resp = Arithmetic.add(req(i64::MAX, 1)).await;
            assert_eq!(resp.result, i64::MIN);
            assert_eq!(resp.status, Status::Ok);
            // the one division that overflows in two's complement
            assert_eq!(Arithmetic.divide(req(i64::MIN, -1)).await.result, i64::MIN);
        });
    }

    #[test]
    fn handlers_are_pure() {
        smol::future::block_on(async move {
            let first = Arithmetic.multiply(req(123, -456)).await;
            let second = Arithmetic.multiply(req(123, -456)).await;
            assert_eq!(first, second);
        });
    }

    #[test]
    fn status_wire_form() {
        assert_eq!(serde_json::to_value(Status::Ok).unwrap(), "OK");
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), "ERROR");
    }
}
