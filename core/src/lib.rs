//! Behavior behind the Ogbomoso Ignite conference site.
//!
//! Everything here is free of browser types so it can be exercised with plain
//! unit tests. The wasm frontend measures the page and feeds snapshots in; the
//! backend reuses the form schemas to validate real submissions.

pub mod error;
pub mod forms;
pub mod reveal;
pub mod scroll;

pub use error::{SubmitError, ValidationError};
pub use forms::{
    catalog, FieldValue, FormKind, FormPayload, FormSchema, FormValues, SubmissionResult,
};
pub use scroll::{compute_scroll_state, LayoutSnapshot, ScrollConfig, ScrollState};
