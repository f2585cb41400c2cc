//! demos/basic.rs
//! One client and one server logger in production mode.

fn main() {
    let debug = std::env::args().any(|arg| arg == "--debug");

    // CLI applications
    let client = simplog::new_client_logger(debug);
    client.info("You're awesome!");
    client.warn("Coffee is almost empty!");
    client.error("Unable to operate, caffeine levels too low.");

    let server = simplog::new_server_logger(debug);
    server.info("You're awesome!");
    server.warn("Coffee is almost empty!");
    server.error("Unable to operate, caffeine levels too low.");
}
