//! API-facing facade (route paths shared by server and client).

pub mod routes;
