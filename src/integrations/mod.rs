// src/integrations/mod.rs
//
// External Integrations Module
//
// Clients for systems outside the process. They translate between the
// wire and domain types and never mutate application state.

pub mod jobboard;

pub use jobboard::{AuthResponse, CredentialProvider, JobBoardApi, JobBoardClient};
