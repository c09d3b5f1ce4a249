use super::types::{Scheme, SchemeStep, Step};

/// Sorts steps for display: by step number, ties broken by step ID.
pub fn sort_steps(steps: &mut [SchemeStep]) {
    steps.sort_by(|a, b| {
        a.step_number
            .cmp(&b.step_number)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Projects the steps owned by `scheme` into display order.
///
/// Steps belonging to other schemes are dropped.
pub fn project_steps<I>(scheme: &Scheme, steps: I) -> Vec<SchemeStep>
where
    I: IntoIterator<Item = Step>,
{
    let mut projected: Vec<SchemeStep> = steps
        .into_iter()
        .filter(|step| step.scheme_id == scheme.id)
        .map(|step| SchemeStep::project(step, scheme.scheme_name.as_str()))
        .collect();

    sort_steps(&mut projected);
    projected
}
