//! Service layer: request handling independent of HTTP routing.

pub mod relay;
