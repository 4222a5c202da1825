mod prompts;

use anyhow::Result;
use clap::Parser;
use devinit_core::{Bootstrap, EmbeddedTemplates, Outcome, ProcessRunner};

/// devinit takes no flags: one interactive run per invocation.
#[derive(Parser, Debug)]
#[command(name = "devinit")]
#[command(about = "Wire lint and git-hook tooling into an existing package repository")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully. SIGINT exits with the conventional 130;
    // cancelling at a prompt (Esc) instead flows through the
    // cancellation path and exits 0 with a message.
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();

    let root = std::env::current_dir()?;
    let bootstrap = Bootstrap::new(
        ProcessRunner,
        prompts::CliclackPrompts,
        EmbeddedTemplates,
        root,
    );

    cliclack::intro("devinit")?;
    let result = bootstrap.run().await;
    let _ = console::Term::stderr().show_cursor();

    // Aborts already printed their message and exit cleanly; only an
    // unexpected fault escapes with a non-zero code.
    match result? {
        Outcome::Done => {
            cliclack::outro("All set")?;
            Ok(())
        }
        Outcome::Aborted(_) => Ok(()),
    }
}
