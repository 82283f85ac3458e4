use std::env;

use cardfit::app::{self, CardsApp};
use tracing_subscriber::EnvFilter;

fn main() {
    // Frames go to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cardfit=info")),
        )
        .init();

    let code = match app::parse_args(env::args().skip(1)) {
        Ok(Some(args)) => CardsApp::new(args).run(),
        Ok(None) => {
            print!("{}", app::USAGE);
            0
        }
        Err(err) => {
            eprintln!("cardfit: {:#}\n\n{}", err, app::USAGE);
            2
        }
    };
    std::process::exit(code);
}
