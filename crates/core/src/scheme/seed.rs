//! Demo data for seeding a fresh store.
//!
//! Pure data: loading it into a repository happens in the service crate.

use super::types::{NewScheme, NewStep};

/// A scheme together with the steps to insert for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedScheme {
    pub scheme: NewScheme,
    pub steps: Vec<NewStep>,
}

impl SeedScheme {
    fn new(scheme_name: &str, steps: &[(i64, &str)]) -> Self {
        Self {
            scheme: NewScheme::new(scheme_name),
            steps: steps
                .iter()
                .map(|(number, instructions)| NewStep::new(*number, *instructions))
                .collect(),
        }
    }
}

/// Returns the demo schemes.
///
/// Steps are listed out of order on purpose for some schemes; readers must
/// rely on `step_number`, not insertion order.
///
/// # Example
///
/// ```
/// use schemes_core::scheme::demo_schemes;
///
/// let schemes = demo_schemes();
/// assert!(schemes
///     .iter()
///     .any(|s| s.scheme.scheme_name == "Find the Holy Grail"));
/// ```
pub fn demo_schemes() -> Vec<SeedScheme> {
    vec![
        SeedScheme::new(
            "World Domination",
            &[
                (1, "solve prime number theory"),
                (2, "crack cyber security"),
                (3, "blackmail world leaders"),
            ],
        ),
        SeedScheme::new(
            "Get Rich Quick",
            &[
                (1, "collect all the sheep in Scotland"),
                (2, "profit"),
            ],
        ),
        SeedScheme::new(
            "Revenge!",
            &[
                (2, "track down the six-fingered man"),
                (1, "learn to fence"),
                (3, "prepare to die"),
            ],
        ),
        SeedScheme::new(
            "Find the Holy Grail",
            &[
                (1, "quest"),
                (2, "...and quest"),
                (3, "...and quest"),
                (4, "find a shrubbery"),
            ],
        ),
        SeedScheme::new("Steal the Crown Jewels", &[]),
    ]
}
