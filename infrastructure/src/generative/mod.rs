//! Generative backends
//!
//! Adapters implementing
//! [`GenerativeBackend`](tastetrip_application::GenerativeBackend).

mod openai;

pub use openai::OpenAiCompatibleBackend;
