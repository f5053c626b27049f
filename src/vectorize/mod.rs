//! Document vectorizers: text to document-term matrices.
//!
//! Both vectorizers share the same contract: `fit` builds an immutable
//! vocabulary from the stop-filtered token stream, `transform` maps
//! documents onto that vocabulary, and `fit_transform` does both against
//! the same input. Tokens unknown to a fitted vocabulary contribute
//! nothing at transform time.
//!
//! Column order is deterministic: vocabulary indices follow the sorted
//! order of the surviving tokens.

pub mod count;
pub mod tfidf;

pub use count::CountVectorizer;
pub use tfidf::{TfidfConfig, TfidfVectorizer};
