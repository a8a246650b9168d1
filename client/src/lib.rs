//! # Dashboard client
//!
//! The browser side of the demo, modeled as a library: named user
//! actions map to at most one HTTP call each, responses are rendered
//! into addressable output regions as HTML fragments. The network sits
//! behind the [`api::Api`] trait so the whole flow runs against a
//! scripted fake in tests.

pub mod api;
pub mod dispatch;
pub mod regions;
pub mod render;
pub mod reports;
