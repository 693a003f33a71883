//! The calculator RPC server.
//!
//! Listens on a fixed port and serves the four arithmetic methods over
//! JSON-RPC. No flags, no configuration beyond `RUST_LOG`; a failure to
//! bind the listener is fatal.

use std::net::SocketAddr;
use std::sync::Arc;

use calc_rpc::{rpc_route, Arithmetic, CalculatorService, DEFAULT_PORT};
use log::info;

#[tokio::main]
async fn main() {
    env_logger::init();

    let service = Arc::new(CalculatorService(Arithmetic));
    let addr = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));

    info!("calculator server listening at {}", addr);
    warp::serve(rpc_route(service)).run(addr).await;
}
