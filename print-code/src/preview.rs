//! Live previews for the recipe editor
//!
//! Unsaved editor rows have no id yet and point at each other by row index.
//! They are adapted to id-based [`RecipeStep`]s (row `i` gets id `"i"`) so
//! previews go through the same containment and code rendering as
//! [`encode_recipe`](crate::encode_recipe).

use shared::models::{PreviewStepInput, RecipeStep, StepPreview, StepType};
use tracing::{debug, instrument};

use crate::containment::{ContainmentIndex, ensure_acyclic};
use crate::encoder::render_step;
use crate::error::PrintCodeResult;
use crate::lookup::StepTypeLookup;

/// Code shown for rows whose step type cannot be resolved
pub const UNKNOWN_CODE: &str = "?";

/// Convert index-based editor rows into id-based recipe steps
pub fn index_steps_to_recipe(inputs: &[PreviewStepInput]) -> Vec<RecipeStep> {
    inputs
        .iter()
        .enumerate()
        .map(|(pos, input)| RecipeStep {
            id: Some(pos.to_string()),
            step_type_id: input.step_type_id.clone(),
            instruction: input.instruction.clone(),
            contained_steps: input.contained_steps.iter().map(usize::to_string).collect(),
        })
        .collect()
}

/// One preview per input row, in input order
///
/// Unlike the recipe encoder nothing is omitted: contained rows are flagged
/// with `is_contained` and rows with an unknown step type get the
/// placeholder type and code `"?"`.
#[instrument(skip_all, fields(rows = inputs.len()))]
pub fn generate_previews<L>(inputs: &[PreviewStepInput], lookup: &L) -> PrintCodeResult<Vec<StepPreview>>
where
    L: StepTypeLookup + ?Sized,
{
    let steps = index_steps_to_recipe(inputs);
    ensure_acyclic(&steps)?;

    let containment = ContainmentIndex::build(&steps);
    let previews = steps
        .iter()
        .map(|step| {
            let is_contained = step
                .id
                .as_deref()
                .is_some_and(|id| containment.is_contained(id));

            match lookup.step_type(&step.step_type_id) {
                Some(step_type) => StepPreview {
                    step_type: step_type.clone(),
                    generated_code: render_step(step, step_type, &steps, lookup),
                    is_contained,
                },
                None => {
                    debug!(step_type_id = %step.step_type_id, "Step type not found, placeholder used");
                    StepPreview {
                        step_type: StepType::unknown(),
                        generated_code: UNKNOWN_CODE.to_string(),
                        is_contained,
                    }
                }
            }
        })
        .collect();

    Ok(previews)
}
