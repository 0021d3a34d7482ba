pub mod datastore;
pub mod datastore_types;
pub mod messages;
pub mod trivia_api;
pub mod trivia_config;
pub mod trivia_error;

pub(crate) mod internal;
