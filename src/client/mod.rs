//! Client-side state: preference storage, the search backend seam, and the
//! controller that owns the debounced query / filtered-view lifecycle.

pub mod backend;
pub mod controller;
pub mod display;
pub mod store;

pub use backend::{BackendError, HttpSearchBackend, SearchBackend};
pub use controller::ResultFilterController;
pub use display::{display_state, DisplayState, Phase};
pub use store::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, STORAGE_KEY};
