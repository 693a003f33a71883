#![allow(async_fn_in_trait)]
//! A four-function calculator service over a subset of JSON-RPC 2.0.
//!
//! The wire layer ([`jsonrpc`]) carries requests and responses; the
//! [`CalculatorProtocol`] trait defines the four methods; [`Arithmetic`]
//! implements them statelessly; [`CalculatorService`] puts an
//! implementation on the wire and [`CalculatorClient`] calls one through
//! any [`RpcTransport`]. Division by zero is reported through the response
//! [`Status`], never as a wire-level fault.

mod client;
mod jsonrpc;
mod protocol;
mod server;
mod service;

pub use client::{CalculatorClient, ClientError, LoopbackTransport};
pub use jsonrpc::{
    JrpcError, JrpcId, JrpcRequest, JrpcResponse, RpcService, RpcTransport, ServerError,
};
pub use protocol::{Arithmetic, CalculateRequest, CalculateResponse, CalculatorProtocol, Status};
pub use server::{rpc_route, DEFAULT_PORT};
pub use service::CalculatorService;
