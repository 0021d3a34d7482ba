pub use datastore_network::{DataStoreNetwork, DS_GET_PATH, DS_INSERT_PATH};

pub mod data_types;
pub mod helpers;

mod datastore_network;
