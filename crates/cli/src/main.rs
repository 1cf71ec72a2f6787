use clap::Parser;

use storefront_cli::config::Config;

fn main() {
    let config = Config::parse();
    storefront_observability::init_with(config.log_format.into());

    let stdout = std::io::stdout();
    if let Err(err) = storefront_cli::run(&config, &mut stdout.lock()) {
        tracing::error!(error = %format!("{err:#}"), "grouping failed");
        eprintln!("storefront-groups: {err:#}");
        std::process::exit(1);
    }
}
