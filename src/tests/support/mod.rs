pub mod app_state_builder;
pub mod contact_store;
pub mod fixtures;
pub mod store;
pub mod stubs;
