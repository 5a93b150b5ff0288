//! Test helpers para github-keys-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod fakes;

pub use client::{TestClient, TestResponse};
pub use fakes::{FakeSource, client_with};
