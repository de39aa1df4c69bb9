mod helpers;
mod state;
mod templates;

mod api;
mod pages;
mod server;

use helpers::*;
use state::*;

pub use server::*;
