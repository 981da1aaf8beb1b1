pub mod chat_routes;
pub mod fleet_routes;
