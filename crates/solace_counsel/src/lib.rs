//! The mood intelligence pipeline.
//!
//! Layers, bottom up: [`model`] defines the vendor-neutral generative-model
//! contract and its failure taxonomy; [`schema`] the constrained-output
//! descriptors; [`providers`] the Gemini REST implementation and a scripted
//! mock. On top sit the three operations the application calls:
//! [`classifier`] (text/image mood readings), [`recommender`] (the
//! personalized bundle), and [`companion`] (the support conversation).
//! Every public operation on that top layer is total: failures degrade to
//! deterministic fallback content and are only logged.

pub mod classifier;
pub mod companion;
pub mod model;
pub mod prompts;
pub mod providers;
pub mod recommender;
pub mod schema;

pub use model::{ChatRole, ChatTurn, GenerativeModel, ImagePayload, ModelError, StructuredRequest};
pub use providers::{GeminiModel, MockModel};
pub use schema::ResponseSchema;
