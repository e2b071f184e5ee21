//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers own no state of their own; they borrow the store and the ports
//! they are constructed with.

pub mod handlers;

pub use handlers::{
    AppendStructureCommand, AppendStructureHandler, AppendStructureResult,
    ExportReadmeHandler,
    GenerateDescriptionCommand, GenerateDescriptionHandler, GenerateDescriptionResult,
    SaveReadmeHandler,
};
