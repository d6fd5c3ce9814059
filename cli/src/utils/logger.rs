/// Log filter used when RUST_LOG is unset. Verbose runs trace the explorer
/// crates at debug level without turning on debug output everywhere else.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,explorer_common=debug,country_explorer=debug,cexp=debug"
    } else {
        "info"
    }
}

pub fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", default_filter(verbose));
    }
    pretty_env_logger::init();
}
