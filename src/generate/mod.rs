pub mod classify;
pub mod client;
pub mod pipeline;
pub mod rules;
