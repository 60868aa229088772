pub mod depad;
pub mod greedy;
