pub mod gemini;
pub mod mock;

pub use gemini::GeminiModel;
pub use mock::MockModel;
