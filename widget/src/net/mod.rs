//! Network access to the relay endpoint.

pub mod relay;
