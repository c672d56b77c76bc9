use std::io;

use anyhow::Result;
use dotenvy::dotenv;

mod config;
mod form;
mod model;
mod terminal;

use config::Config;
use form::controller::FormController;
use terminal::Session;

use tracing::info;
use tracing_appender::rolling;

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log; stdout belongs to the form.
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Employee form starting...");

    let form = FormController::new(config.success_message.clone());
    let mut session = Session::new(form, config.prompt.clone());

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;

    info!(mode = ?session.form().mode(), "Employee form closed");
    Ok(())
}
