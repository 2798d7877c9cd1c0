#![forbid(unsafe_code)]

fn main() {
    gridsplit_cli::init_tracing();
    if let Err(error) = gridsplit_cli::run_from_env() {
        eprintln!("gridsplit: {error}");
        std::process::exit(error.exit_code());
    }
}
