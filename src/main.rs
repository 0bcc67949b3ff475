use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chef_tools::config::Settings;
use chef_tools::menu::{MenuOptions, Navigator};
use chef_tools::{db, error, loader};

fn main() -> ExitCode {
  // Logs go to stderr so they never land in the middle of a menu
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chef_tools=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{}", e);
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn run() -> error::Result<()> {
  let settings = Settings::load();

  let conn = db::open_store(&settings.db_path)?;
  db::build_categories(&conn)?;

  let reports = loader::fill_all(&conn, &settings.data_dir)?;
  let inserted: usize = reports.iter().map(|(_, report)| report.inserted).sum();
  tracing::info!("Initial fill complete: {} new ingredients", inserted);

  let options = MenuOptions {
    clear_screen: settings.clear_screen,
    yield_model: settings.yield_model,
  };
  let stdin = io::stdin();
  let stdout = io::stdout();
  Navigator::new(&conn, stdin.lock(), stdout.lock(), options).run()
}
