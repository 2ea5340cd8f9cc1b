use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use paydesk::employee::Registry;
use paydesk::prompt::Session;

fn main() {
    // Diagnostics go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("starting payroll session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    let mut registry = Registry::new();
    match session.run(&mut registry) {
        Ok(()) => {
            info!(employees = registry.len(), "session ended");
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            std::process::exit(1);
        }
    }
}
