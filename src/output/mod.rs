//! Output module for forwarding chunked lessons downstream.

mod delivery_client;

pub use delivery_client::{DeliveryClient, DeliveryError, API_KEY_HEADER};
