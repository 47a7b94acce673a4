//! Text analysis for Revdex.
//!
//! The pipeline is deliberately small:
//!
//! ```text
//! Text → whitespace split → normalize → drop empty → drop stop words → Tokens
//! ```
//!
//! # Modules
//!
//! - [`normalize`](mod@normalize): canonical form of a single word
//! - [`stop_words`]: the immutable stop word set
//! - [`analyzer`]: the [`Analyzer`] trait and [`StandardAnalyzer`]

pub mod analyzer;
pub mod normalize;
pub mod stop_words;

// Re-exports
pub use analyzer::{Analyzer, StandardAnalyzer, TokenStream};
pub use normalize::{is_token, normalize};
pub use stop_words::StopWords;
