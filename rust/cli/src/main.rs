use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = ante_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
