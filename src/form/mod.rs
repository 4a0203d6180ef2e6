//! The assessment form: field registry, rules, records, validation and
//! payload coercion.

pub mod field;
pub mod payload;
pub mod record;
pub mod rules;
pub mod state;
#[doc(hidden)]
pub mod testdata;
pub mod validator;

pub use field::{describe, descriptor, Field, FieldDescriptor, Section, WidgetKind};
pub use payload::{PayloadValue, SubmissionPayload};
pub use record::{ErrorRecord, FormRecord};
pub use rules::{rule_for, FieldRule};
pub use state::{FormAction, FormState, SubmissionStatus};
pub use validator::{is_valid, validate, validate_field};
