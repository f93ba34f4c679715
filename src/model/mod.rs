//! Types shared between the HTTP layer and its clients.

pub mod api;
