pub mod env;
pub mod theme;
pub mod utils;
