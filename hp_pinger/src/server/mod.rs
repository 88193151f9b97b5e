pub mod greeting;
pub mod http_server;
