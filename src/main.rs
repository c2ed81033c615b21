use setdict::config::Config;
use setdict::interface::{ReadlineEditor, Session};
use setdict::output::{self, Prompts};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with replies.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = Config::load()?;

    // The output strategy is picked exactly once, before the loop starts.
    let stylized = output::stylized_from_environment();
    let sink = output::sink(stylized);
    let prompts = Prompts::new(stylized);

    let reader = ReadlineEditor::new(config.repl.history_path(), config.repl.max_history)?;
    let mut session = Session::new(reader, sink, prompts).with_hint(config.repl.show_hint);
    session.run();
    Ok(())
}
