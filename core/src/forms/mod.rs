//! Form schemas, validation and the submit cycle.

pub mod catalog;
pub mod cycle;
pub mod notice;
pub mod payload;
pub mod phase;
pub mod schema;
pub mod selection;
pub mod validate;
pub mod values;

pub use cycle::{on_completion, on_submit, Completion, SubmitOutcome, SubmitStep};
pub use notice::{Notice, NoticeId, NoticeKind, NoticeSlot};
pub use payload::FormPayload;
pub use phase::{FormEvent, FormPhase};
pub use schema::{Choice, FieldKind, FieldSpec, FormKind, FormSchema, GroupRule, MarkerTarget};
pub use selection::{cap_message, toggle_selection};
pub use validate::{describe, is_valid_email, marker_target, validate, SubmissionResult};
pub use values::{FieldValue, FormValues};
