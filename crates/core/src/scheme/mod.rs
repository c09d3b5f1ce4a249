mod error;
mod operations;
mod seed;
mod sorting;
mod types;

pub use error::SchemeError;
pub use operations::{validate_changes, validate_new_scheme, MAX_SCHEME_NAME_LEN};
pub use seed::{demo_schemes, SeedScheme};
pub use sorting::{project_steps, sort_steps};
pub use types::{NewScheme, NewStep, Scheme, SchemeChanges, SchemeId, SchemeStep, Step, StepId};
