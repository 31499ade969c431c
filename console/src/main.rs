mod command;
mod prompt;
mod render;
mod settings;
mod transport;

use std::sync::Arc;

use anyhow::Context;
use jobpost_core::{App, Confirm, JobPostApi, Notifier, Transport};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, CommandError};
use crate::prompt::{Input, TerminalConfirm};
use crate::settings::Settings;
use crate::transport::UreqTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr so they never interleave with the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::new().context("invalid JOBPOST_* configuration")?;
    tracing::info!(api_url = %settings.api_url, "starting");

    let input = Input::stdin();
    let api = JobPostApi::new(&settings.api_url, UreqTransport::new());
    let mut app = App::new(api, TerminalConfirm::new(Arc::clone(&input)))
        .with_notifier(Notifier::new(settings.notification_timeout()));

    println!("Job posts at {} (type `help` for commands)", settings.api_url);
    app.mount().await;
    print!("{}", render::render(&app.view()));

    while let Some(line) = input.read_line("> ").await? {
        let cmd = match command::parse(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }
        run(&mut app, cmd).await;
        print!("{}", render::render(&app.view()));
    }
    Ok(())
}

async fn run<T: Transport, C: Confirm>(app: &mut App<T, C>, cmd: Command) {
    match cmd {
        Command::List => app.load_job_posts().await,
        Command::New => app.open_create_form(),
        Command::Edit(id) => {
            if !app.edit_by_id(&id) {
                println!("no listed job post with id {id}");
            }
        }
        Command::Set(field, value) => {
            if !app.state().show_add_form {
                println!("no form open; use `new` or `edit <id>` first");
            } else {
                app.handle_input(field, value);
            }
        }
        Command::Show => {}
        Command::Save => app.save_job().await,
        Command::Cancel => app.cancel_form(),
        Command::Delete(id) => app.delete_job(&id).await,
        Command::Dismiss => app.dismiss_notification(),
        Command::Help => println!("{}", command::HELP),
        Command::Quit => {}
    }
}
