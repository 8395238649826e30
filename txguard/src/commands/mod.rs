// txguard/src/commands/mod.rs

pub mod rules;
pub mod serve;
pub mod validate;
