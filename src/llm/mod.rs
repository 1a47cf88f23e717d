pub mod gemini;
pub mod types;

pub use gemini::{GeminiClient, GeminiError};
