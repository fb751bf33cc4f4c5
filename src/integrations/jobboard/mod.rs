// src/integrations/jobboard/mod.rs
//
// Job-board backend integration

pub mod api;
pub mod client;
pub mod download;
pub mod errors;

pub use api::{AuthResponse, CredentialProvider, JobBoardApi};
pub use client::JobBoardClient;

#[cfg(test)]
pub use api::MockJobBoardApi;
