use std::panic::{self, PanicHookInfo};

/// Registers a panic hook so panic information is logged in addition to the
/// default panic printer.
pub fn install() {
    let default_hook = panic::take_hook();
    let hook = move |info: &PanicHookInfo| {
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("<unnamed>");
        // A custom hook cannot print a full backtrace on stable rust. To not
        // lose that information the previously installed hook runs afterwards
        // and prints it.
        tracing::error!("thread '{}' {}:", thread_name, info);
        default_hook(info);
    };
    panic::set_hook(Box::new(hook));
}
