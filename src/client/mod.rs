//! Clients for external generative-language services

pub mod gemini;

pub use gemini::GeminiClient;
