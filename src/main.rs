use taskdesk::commands::Cli;
use taskdesk::libs::messages::macros::is_debug_mode;
use taskdesk::msg_error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdesk=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
