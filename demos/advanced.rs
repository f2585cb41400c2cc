//! demos/advanced.rs
//! Custom symbols, a named child logger and context propagation.

use simplog::{Context, Options, Severity, from_context, with_logger};

fn handle_request(ctx: &Context, id: u32) {
    let logger = from_context(Some(ctx));
    logger.infof(format_args!("handling request {id}"));
    if !logger.enabled(Severity::Debug) {
        logger.warnln(&[&"debug output disabled for request", &id]);
    }
}

fn main() {
    // Stack traces stay off so another error-reporting layer can own them.
    let logger = simplog::new_with_options(Some(&Options {
        debug: false,
        server: false,
        disable_stacktrace: true,
    }));

    simplog::set_debug_symbol("[DEBUG]");
    simplog::set_info_symbol("[INFO]");
    simplog::set_warn_symbol("[WARN]");
    simplog::set_error_symbol("[ERROR]");
    simplog::set_fatal_symbol("[FATAL]");
    simplog::set_panic_symbol("[PANIC]");
    simplog::set_dpanic_symbol("[DPANIC]");

    let ctx = with_logger(&Context::background(), logger.named("requests"));
    from_context(Some(&ctx)).info("You're awesome!");

    for id in 1..=2 {
        handle_request(&ctx, id);
    }

    let legacy = simplog::tag::TagLogger::new(std::io::stderr(), simplog::tag::Level::Info);
    legacy.infoln(&[&"legacy tag logger", &"still works"]);
}
