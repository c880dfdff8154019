pub mod dispatch;
pub mod evaluate;
pub mod overnight;
pub mod run;
pub mod select;
