//! Postfix stage: infix-to-postfix conversion and stack evaluation
pub mod evaluator;
pub mod shunting;

pub use evaluator::evaluate;
pub use shunting::{to_postfix, ShuntingError};
