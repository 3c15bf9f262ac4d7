pub mod activation;
pub mod batch;
pub mod cost;
pub mod layout;
pub mod network;
pub mod params;
