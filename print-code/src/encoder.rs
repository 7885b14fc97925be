//! Print code encoder
//!
//! Turns an ordered recipe into the compact code printed on kitchen tickets:
//!
//! ```text
//! milk 200, sugar 1, blender 2 (containing milk + sugar)  =>  "bl(mk200 sg1)2"
//! ```
//!
//! Missing data never fails the encoding: unresolvable step types and
//! dangling references are left out. Only a containment cycle is an error.

use shared::models::{RecipeStep, StepType};
use tracing::{debug, instrument, warn};

use crate::containment::{ContainmentIndex, ensure_acyclic};
use crate::error::PrintCodeResult;
use crate::lookup::StepTypeLookup;

/// Flat code of a single step: step type code followed by the instruction
pub fn encode_step(step: &RecipeStep, step_type: &StepType) -> String {
    let instruction = step.instruction.as_deref().unwrap_or_default();
    let mut code = String::with_capacity(step_type.code.len() + instruction.len());
    code.push_str(&step_type.code);
    code.push_str(instruction);
    code
}

/// Encode a whole recipe into one print code string
///
/// Top-level segments are joined by a single space; an empty recipe gives
/// an empty string.
pub fn encode_recipe<L>(steps: &[RecipeStep], lookup: &L) -> PrintCodeResult<String>
where
    L: StepTypeLookup + ?Sized,
{
    Ok(encode_recipe_segments(steps, lookup)?.join(" "))
}

/// Top-level segments of the print code, in recipe order
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn encode_recipe_segments<L>(steps: &[RecipeStep], lookup: &L) -> PrintCodeResult<Vec<String>>
where
    L: StepTypeLookup + ?Sized,
{
    ensure_acyclic(steps)?;

    let containment = ContainmentIndex::build(steps);
    let shared = containment.shared_references();
    if !shared.is_empty() {
        warn!(ids = ?shared, "Steps listed by several containers are printed in each of them");
    }

    let mut segments = Vec::with_capacity(steps.len());
    for step in steps {
        if let Some(id) = step.id.as_deref()
            && containment.is_contained(id)
        {
            continue;
        }

        let Some(step_type) = lookup.step_type(&step.step_type_id) else {
            debug!(step_type_id = %step.step_type_id, "Step type not found, step skipped");
            continue;
        };

        let code = render_step(step, step_type, steps, lookup);
        if !code.is_empty() {
            segments.push(code);
        }
    }

    debug!(segments = segments.len(), "Recipe encoded");
    Ok(segments)
}

/// Code of one resolved step
///
/// Containers print `code(sub1 sub2)instruction`, sub-codes in the order the
/// container lists them. Other steps print the flat [`encode_step`] form.
pub(crate) fn render_step<L>(
    step: &RecipeStep,
    step_type: &StepType,
    steps: &[RecipeStep],
    lookup: &L,
) -> String
where
    L: StepTypeLookup + ?Sized,
{
    if !step.is_container() {
        return encode_step(step, step_type);
    }

    let inner: Vec<String> = step
        .contained_steps
        .iter()
        .filter_map(|id| {
            let Some(contained) = steps.iter().find(|s| s.id.as_deref() == Some(id.as_str()))
            else {
                debug!(%id, "Contained step not found, reference dropped");
                return None;
            };
            let Some(contained_type) = lookup.step_type(&contained.step_type_id) else {
                debug!(%id, step_type_id = %contained.step_type_id, "Contained step type not found, reference dropped");
                return None;
            };
            Some(encode_step(contained, contained_type))
        })
        .collect();

    format!(
        "{}({}){}",
        step_type.code,
        inner.join(" "),
        step.instruction.as_deref().unwrap_or_default()
    )
}
