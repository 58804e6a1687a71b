pub mod common;

mod config_validation;
mod jwt_assertion;
mod secrets_replace;
