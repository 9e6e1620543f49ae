//! Form domain layer
//!
//! Steps, validators and the state machine behind the waitlist form.
//! Rendering lives in `ui::forms`.

mod field;
mod form_state;
mod step;
mod validation;

pub use field::{FieldValue, FormField};
pub use form_state::{Advance, Retreat, WaitlistForm};
pub use step::{FormVariant, StepId};
pub use validation::normalize_phone;
