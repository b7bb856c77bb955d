use chime::{app, roster, trace_init};

#[tokio::main]
async fn main() -> chime::Outcome<()> {
    trace_init();
    let items = roster();
    app::run(items)?;
    Ok(())
}
