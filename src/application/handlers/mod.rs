//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod append_structure;
mod export_readme;
mod generate_description;
mod save_readme;

pub use append_structure::{
    AppendStructureCommand, AppendStructureHandler, AppendStructureResult,
};
pub use export_readme::ExportReadmeHandler;
pub use generate_description::{
    GenerateDescriptionCommand, GenerateDescriptionHandler, GenerateDescriptionResult,
};
pub use save_readme::SaveReadmeHandler;
