//! # canvass-store
//!
//! Storage and identity seams for canvass.
//!
//! The aggregation engine only ever sees already-fetched snapshots; this
//! crate owns the boundary that produces them. [`SurveyStore`] is the
//! storage seam (fetch a survey, fetch its responses, append one response,
//! plus the lifecycle operations around them), [`Identity`] the
//! current-user seam. [`MemoryStore`] is the in-process reference
//! implementation used by tests and demos; a real deployment puts a
//! database client behind the same trait.
//!
//! ## Usage
//!
//! ```rust
//! use canvass::{Question, Response, Survey, summarize_survey};
//! use canvass_store::{MemoryStore, SurveyStore};
//!
//! # fn main() -> Result<(), canvass_store::StoreError> {
//! let store = MemoryStore::new();
//! store.save_survey(
//!     "lunch",
//!     Survey::new("Lunch", vec![Question::text("Favourite dish?")]),
//! )?;
//! store.append_response("lunch", Response::new().with_answer(0, "Ramen"))?;
//!
//! let survey = store.fetch_survey("lunch")?.ok_or_else(|| {
//!     canvass_store::StoreError::NotFound { id: "lunch".into() }
//! })?;
//! let responses = store.fetch_responses("lunch")?;
//! let summary = summarize_survey(&survey, &responses);
//! assert_eq!(summary.respondent_count, 1);
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::StoreError;

mod store;
pub use store::SurveyStore;

mod memory;
pub use memory::MemoryStore;

mod identity;
pub use identity::{Identity, StaticIdentity, User};
