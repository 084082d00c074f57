pub mod change_type;
pub mod form_field;
pub mod selector_strategy;
pub mod commands;
