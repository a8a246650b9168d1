//! # Shared wire types
//!
//! Everything the server and the client agree on: the response envelope,
//! the typed payload shapes behind each endpoint, and the closed set of
//! view kinds the renderer dispatches on.
//!
//! Keeping these in one crate is what removes the classic demo failure
//! mode of the server sending `results` while the client reads
//! `innerJoin` off the same response.

pub mod envelope;
pub mod kind;
pub mod payloads;
