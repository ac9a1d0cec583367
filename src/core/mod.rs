pub mod calculator;
pub mod config;
pub mod import;
pub mod presenter;
pub mod session;
pub mod store;
pub mod validator;
