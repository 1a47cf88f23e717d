pub mod gemini;

pub use gemini::GeminiSearchClient;
