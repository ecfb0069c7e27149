pub mod cli_args;
pub mod config;
pub mod db;
pub mod error;
mod extractor;
mod middleware;
mod route;
pub mod server;
pub mod state;
mod traits;
pub mod types;

#[cfg(test)]
mod test;
