pub mod evaluation;
pub mod regime;
pub mod snapshot;
