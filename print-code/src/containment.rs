//! Containment relation between recipe steps
//!
//! A step id listed in any `contained_steps` is suppressed from top-level
//! output. This module indexes who contains whom and checks the relation
//! for cycles before anything is encoded.

use std::collections::HashMap;

use shared::models::RecipeStep;
use tracing::warn;

use crate::error::{PrintCodeError, PrintCodeResult};

/// Index of contained step ids and the containers that list them
#[derive(Debug, Default)]
pub struct ContainmentIndex<'a> {
    /// contained id -> positions of the containers listing it
    containers: HashMap<&'a str, Vec<usize>>,
    /// contained ids in first-seen order
    order: Vec<&'a str>,
}

impl<'a> ContainmentIndex<'a> {
    /// Scan every step's `contained_steps` once
    pub fn build(steps: &'a [RecipeStep]) -> Self {
        let mut index = Self::default();
        for (pos, step) in steps.iter().enumerate() {
            for id in &step.contained_steps {
                let positions = index.containers.entry(id.as_str()).or_insert_with(|| {
                    index.order.push(id.as_str());
                    Vec::new()
                });
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }
        index
    }

    /// Whether the id is listed by at least one container
    pub fn is_contained(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Ids listed by more than one container, in first-seen order
    pub fn shared_references(&self) -> Vec<&'a str> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.containers.get(id).is_some_and(|c| c.len() > 1))
            .collect()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Active,
    Done,
}

/// Find a containment cycle, if any.
///
/// Returns the cycle as a path that starts and ends on the same id
/// (`["1", "2", "1"]`; a step containing itself gives `["1", "1"]`).
/// References to ids that no step carries are not edges. When ids repeat,
/// the first step with the id owns its edges, matching how the encoder
/// resolves references.
pub fn detect_cycle(steps: &[RecipeStep]) -> Option<Vec<String>> {
    let mut graph: HashMap<&str, &[String]> = HashMap::new();
    let mut nodes = Vec::new();
    for step in steps {
        if let Some(id) = step.id.as_deref()
            && !graph.contains_key(id)
        {
            graph.insert(id, &step.contained_steps);
            nodes.push(id);
        }
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack = Vec::new();
    nodes
        .into_iter()
        .find_map(|id| visit(id, &graph, &mut marks, &mut stack))
}

/// Fail with [`PrintCodeError::CyclicContainment`] when a cycle exists
pub fn ensure_acyclic(steps: &[RecipeStep]) -> PrintCodeResult<()> {
    match detect_cycle(steps) {
        Some(path) => {
            warn!(cycle = ?path, "Recipe steps contain each other");
            Err(PrintCodeError::CyclicContainment { path })
        }
        None => Ok(()),
    }
}

fn visit<'a>(
    id: &'a str,
    graph: &HashMap<&'a str, &'a [String]>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    match marks.get(id) {
        Some(Mark::Done) => return None,
        Some(Mark::Active) => {
            let start = stack.iter().position(|s| *s == id)?;
            let mut path: Vec<String> = stack[start..].iter().map(|s| s.to_string()).collect();
            path.push(id.to_string());
            return Some(path);
        }
        None => {}
    }

    marks.insert(id, Mark::Active);
    stack.push(id);

    if let Some(children) = graph.get(id) {
        for child in children.iter() {
            if let Some((&child, _)) = graph.get_key_value(child.as_str())
                && let Some(cycle) = visit(child, graph, marks, stack)
            {
                return Some(cycle);
            }
        }
    }

    stack.pop();
    marks.insert(id, Mark::Done);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_marks_contained() {
        let steps = vec![
            RecipeStep::new("1", "milk"),
            RecipeStep::new("2", "sugar"),
            RecipeStep::new("3", "blender").containing(["1", "2"]),
        ];
        let index = ContainmentIndex::build(&steps);

        assert!(index.is_contained("1"));
        assert!(index.is_contained("2"));
        assert!(!index.is_contained("3"));
        assert!(index.shared_references().is_empty());
    }

    #[test]
    fn test_shared_references() {
        let steps = vec![
            RecipeStep::new("1", "milk"),
            RecipeStep::new("2", "sugar"),
            RecipeStep::new("3", "blender").containing(["1", "2"]),
            RecipeStep::new("4", "shaker").containing(["2", "2"]),
        ];
        let index = ContainmentIndex::build(&steps);

        assert_eq!(index.shared_references(), vec!["2"]);
    }

    #[test]
    fn test_no_cycle() {
        let steps = vec![
            RecipeStep::new("1", "milk"),
            RecipeStep::new("2", "blender").containing(["1"]),
            RecipeStep::new("3", "cup").containing(["2", "missing"]),
        ];
        assert_eq!(detect_cycle(&steps), None);
    }

    #[test]
    fn test_two_step_cycle() {
        let steps = vec![
            RecipeStep::new("1", "milk").containing(["2"]),
            RecipeStep::new("2", "blender").containing(["1"]),
        ];
        assert_eq!(
            detect_cycle(&steps),
            Some(vec!["1".to_string(), "2".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_self_containment() {
        let steps = vec![RecipeStep::new("7", "blender").containing(["7"])];
        assert_eq!(
            detect_cycle(&steps),
            Some(vec!["7".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn test_cycle_behind_acyclic_prefix() {
        let steps = vec![
            RecipeStep::new("a", "cup").containing(["b"]),
            RecipeStep::new("b", "blender").containing(["c"]),
            RecipeStep::new("c", "shaker").containing(["b"]),
        ];
        assert_eq!(
            detect_cycle(&steps),
            Some(vec!["b".to_string(), "c".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_ensure_acyclic() {
        let ok = vec![RecipeStep::new("1", "milk")];
        assert!(ensure_acyclic(&ok).is_ok());

        let bad = vec![RecipeStep::new("1", "milk").containing(["1"])];
        assert!(matches!(
            ensure_acyclic(&bad),
            Err(PrintCodeError::CyclicContainment { path }) if path == ["1", "1"]
        ));
    }

    #[test]
    fn test_duplicate_id_first_step_owns_edges() {
        // the second "1" would close a cycle, but only the first is a node
        let steps = vec![
            RecipeStep::new("1", "milk"),
            RecipeStep::new("2", "blender").containing(["1"]),
            RecipeStep::new("1", "shaker").containing(["2"]),
        ];
        assert_eq!(detect_cycle(&steps), None);

        let steps = vec![
            RecipeStep::new("1", "shaker").containing(["2"]),
            RecipeStep::new("2", "blender").containing(["1"]),
            RecipeStep::new("1", "milk"),
        ];
        assert_eq!(
            detect_cycle(&steps),
            Some(vec!["1".to_string(), "2".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_steps_without_id_are_not_nodes() {
        let steps = vec![RecipeStep {
            id: None,
            step_type_id: "milk".to_string(),
            instruction: None,
            contained_steps: vec!["x".to_string()],
        }];
        assert_eq!(detect_cycle(&steps), None);
    }
}
