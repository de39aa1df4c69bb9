pub mod errors;
pub mod funnel;
