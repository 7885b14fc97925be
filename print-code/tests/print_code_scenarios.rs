use std::collections::HashMap;

use print_code::{
    PrintCodeError, StepTypeCatalog, encode_recipe, encode_recipe_segments, encode_step,
    generate_previews,
};
use shared::models::{PreviewStepInput, RecipeStep, StepCategory, StepType};

fn step_type(id: &str, code: &str, category: StepCategory) -> StepType {
    StepType {
        id: id.to_string(),
        code: code.to_string(),
        name: id.to_string(),
        category,
    }
}

fn catalog() -> StepTypeCatalog {
    StepTypeCatalog::from_types(vec![
        step_type("milk", "mk", StepCategory::Ingredient),
        step_type("sugar", "sg", StepCategory::Ingredient),
        step_type("blender", "bl", StepCategory::Equipment),
        step_type("shake", "sh", StepCategory::Manual),
        step_type("wait", "wt", StepCategory::Timing),
    ])
    .expect("valid catalog")
}

fn milkshake() -> Vec<RecipeStep> {
    vec![
        RecipeStep::new("1", "milk").with_instruction("200"),
        RecipeStep::new("2", "sugar").with_instruction("1"),
        RecipeStep::new("3", "blender")
            .with_instruction("2")
            .containing(["1", "2"]),
    ]
}

#[test]
fn test_single_step_recipe() {
    let steps = vec![RecipeStep::new("1", "milk").with_instruction("200")];
    assert_eq!(encode_recipe(&steps, &catalog()).unwrap(), "mk200");
}

#[test]
fn test_blender_contains_ingredients() {
    assert_eq!(
        encode_recipe(&milkshake(), &catalog()).unwrap(),
        "bl(mk200 sg1)2"
    );
}

#[test]
fn test_unknown_step_type_omitted_but_previewed() {
    let steps = vec![
        RecipeStep::new("1", "milk").with_instruction("200"),
        RecipeStep::new("2", "vanilla").with_instruction("5"),
    ];
    assert_eq!(encode_recipe(&steps, &catalog()).unwrap(), "mk200");

    let rows = vec![
        PreviewStepInput {
            step_type_id: "milk".to_string(),
            instruction: Some("200".to_string()),
            contained_steps: vec![],
        },
        PreviewStepInput {
            step_type_id: "vanilla".to_string(),
            instruction: Some("5".to_string()),
            contained_steps: vec![],
        },
    ];
    let previews = generate_previews(&rows, &catalog()).unwrap();
    assert_eq!(previews.len(), 2);
    assert_eq!(previews[1].generated_code, "?");
    assert_eq!(previews[1].step_type.name, "Unknown");
    assert_eq!(previews[1].step_type.category, StepCategory::Action);
}

#[test]
fn test_empty_recipe() {
    assert_eq!(encode_recipe(&[], &catalog()).unwrap(), "");
    assert!(generate_previews(&[], &catalog()).unwrap().is_empty());
}

#[test]
fn test_flat_steps_match_code_plus_instruction() {
    let catalog = catalog();
    for (type_id, instruction) in [("milk", Some("200")), ("wait", None), ("shake", Some("x3"))] {
        let step = RecipeStep {
            id: Some("1".to_string()),
            step_type_id: type_id.to_string(),
            instruction: instruction.map(str::to_string),
            contained_steps: vec![],
        };
        let st = catalog.get(type_id).unwrap();
        assert_eq!(
            encode_step(&step, st),
            format!("{}{}", st.code, instruction.unwrap_or(""))
        );
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let catalog = catalog();
    let steps = milkshake();
    let first = encode_recipe(&steps, &catalog).unwrap();
    let second = encode_recipe(&steps, &catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_contained_steps_never_top_level() {
    let steps = vec![
        RecipeStep::new("1", "milk").with_instruction("200"),
        RecipeStep::new("2", "sugar").with_instruction("1"),
        RecipeStep::new("3", "blender").containing(["1"]),
        RecipeStep::new("4", "shake").containing(["2"]),
        RecipeStep::new("5", "wait").with_instruction("30"),
    ];
    let segments = encode_recipe_segments(&steps, &catalog()).unwrap();
    assert_eq!(segments, vec!["bl(mk200)", "sh(sg1)", "wt30"]);
    assert!(!segments.iter().any(|s| s == "mk200" || s == "sg1"));
}

#[test]
fn test_previews_match_recipe_codes() {
    let rows: Vec<PreviewStepInput> = vec![
        PreviewStepInput {
            step_type_id: "milk".to_string(),
            instruction: Some("200".to_string()),
            contained_steps: vec![],
        },
        PreviewStepInput {
            step_type_id: "sugar".to_string(),
            instruction: Some("1".to_string()),
            contained_steps: vec![],
        },
        PreviewStepInput {
            step_type_id: "blender".to_string(),
            instruction: Some("2".to_string()),
            contained_steps: vec![0, 1],
        },
    ];
    let previews = generate_previews(&rows, &catalog()).unwrap();
    let flags: Vec<bool> = previews.iter().map(|p| p.is_contained).collect();
    assert_eq!(flags, vec![true, true, false]);
    assert_eq!(
        previews[2].generated_code,
        encode_recipe(&milkshake(), &catalog()).unwrap()
    );
}

#[test]
fn test_cycles_rejected_everywhere() {
    let steps = vec![
        RecipeStep::new("1", "blender").containing(["2"]),
        RecipeStep::new("2", "shake").containing(["3"]),
        RecipeStep::new("3", "milk").containing(["1"]),
    ];
    match encode_recipe(&steps, &catalog()) {
        Err(PrintCodeError::CyclicContainment { path }) => {
            assert_eq!(path, ["1", "2", "3", "1"]);
        }
        other => panic!("expected cycle error, got {other:?}"),
    }

    let rows = vec![PreviewStepInput {
        step_type_id: "blender".to_string(),
        instruction: None,
        contained_steps: vec![0],
    }];
    assert!(matches!(
        generate_previews(&rows, &catalog()),
        Err(PrintCodeError::CyclicContainment { .. })
    ));
}

#[test]
fn test_plain_map_lookup() {
    let lookup: HashMap<String, StepType> = catalog()
        .iter()
        .map(|t| (t.id.clone(), t.clone()))
        .collect();
    assert_eq!(
        encode_recipe(&milkshake(), &lookup).unwrap(),
        "bl(mk200 sg1)2"
    );
}
