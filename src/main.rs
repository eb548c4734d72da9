use anyhow::Context;
use launchlist::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is the form itself.
    let subscriber = get_subscriber("launchlist".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration")?;

    let app = Application::build(config)?;
    app.run_until_stopped(tokio::io::stdin()).await
}
