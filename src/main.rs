use clap::Parser;
use multi_string_search::{run, Arguments};

fn main() {
    // logs go to stderr so the search results on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,multi_string_search=info".into()),
        )
        .init();

    let args = Arguments::parse();
    if let Err(error) = run(args) {
        eprintln!("{}", error);
        std::process::exit(1);
    };
}
