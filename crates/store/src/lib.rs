//! Persistence behind an injected key-value interface.
//!
//! The engine never touches storage. The host opens a backend, hands it to
//! [`HighScores`] and closes it on exit.
//!
//! ```
//! use blockfall_store::{HighScores, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let mut scores = HighScores::load(&store);
//! assert_eq!(scores.record(450, 3), Some(1));
//! scores.save(&mut store).unwrap();
//!
//! assert_eq!(HighScores::load(&store).best(), Some(450));
//! ```

mod error;
pub mod kv;
pub mod scores;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use scores::{HighScores, ScoreEntry, HIGH_SCORES_KEY, MAX_ENTRIES};
