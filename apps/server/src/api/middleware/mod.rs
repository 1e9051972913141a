//! Middleware stack for the API

pub mod layers;
pub mod request_id;

pub use layers::{compression, cors, trace};
pub use request_id::{request_id_middleware, RequestId};
