//! # print-code
//!
//! Recipe print codes for kitchen and receipt printers.
//!
//! A recipe is an ordered list of steps. Each step references a step type
//! (print token such as `mk`) and may carry an instruction (`200`). A step
//! can contain other steps, which are then printed inside its parentheses:
//!
//! ```
//! use std::collections::HashMap;
//! use print_code::encode_recipe;
//! use shared::models::{RecipeStep, StepCategory, StepType};
//!
//! let lookup: HashMap<String, StepType> = [("milk", "mk"), ("sugar", "sg"), ("blender", "bl")]
//!     .into_iter()
//!     .map(|(id, code)| {
//!         let step_type = StepType {
//!             id: id.to_string(),
//!             code: code.to_string(),
//!             name: id.to_string(),
//!             category: StepCategory::Ingredient,
//!         };
//!         (id.to_string(), step_type)
//!     })
//!     .collect();
//!
//! let steps = vec![
//!     RecipeStep::new("1", "milk").with_instruction("200"),
//!     RecipeStep::new("2", "sugar").with_instruction("1"),
//!     RecipeStep::new("3", "blender").with_instruction("2").containing(["1", "2"]),
//! ];
//!
//! assert_eq!(encode_recipe(&steps, &lookup).unwrap(), "bl(mk200 sg1)2");
//! ```

pub mod config;
pub mod containment;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod logger;
pub mod lookup;
pub mod preview;
pub mod ticket;
pub mod width;

// Re-exports
pub use config::Config;
pub use containment::{ContainmentIndex, detect_cycle};
pub use encoder::{encode_recipe, encode_recipe_segments, encode_step};
pub use error::{PrintCodeError, PrintCodeResult};
pub use loader::{load_preview_steps, load_recipe, load_step_types};
pub use lookup::{StepTypeCatalog, StepTypeLookup};
pub use preview::{generate_previews, index_steps_to_recipe};
pub use ticket::{RecipeTicket, RecipeTicketRenderer};
