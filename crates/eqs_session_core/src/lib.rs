//! Recent-problem history shared by the solver frontends.
//!
//! The solver never touches this crate; the orchestrating layer saves solved
//! problems through a [`HistoryStore`] it owns.

pub mod error;
pub mod file;
pub mod store;
pub mod types;

pub use error::HistoryError;
pub use file::JsonFileHistory;
pub use store::{HistoryStore, MemoryHistory};
pub use types::{EntryId, HistoryConfig, HistoryItem, MathProblem, ProblemKind};
