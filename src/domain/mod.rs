pub mod dtos;
pub mod entities;
pub mod find_all_funnels;
pub mod find_funnel;
pub mod theme;
pub mod timezone;

#[cfg(test)]
pub mod mocks;
