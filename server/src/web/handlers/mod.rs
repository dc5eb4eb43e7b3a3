// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod order_handlers;
pub mod return_handlers;

// routes.rs reaches these via their module path
// (e.g., order_handlers::place_order_handler).
