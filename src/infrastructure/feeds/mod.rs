pub mod twse;
pub mod yahoo;
