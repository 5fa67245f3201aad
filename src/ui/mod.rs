pub mod prompter;
pub mod wizard;
