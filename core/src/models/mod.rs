// core/src/models/mod.rs

//! Data structures for orders and their embedded documents.

pub mod address;
pub mod draft;
pub mod item;
pub mod order;
pub mod return_request;

// Re-export the model structs for convenient access
pub use address::ShippingAddress;
pub use draft::OrderDraft;
pub use item::LineItem;
pub use order::{Order, OrderStatus, PaymentStatus};
pub use return_request::{ReturnRequest, ReturnStatus};
