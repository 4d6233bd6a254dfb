use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::domain::ports::{AuthorizerBox, PaymentStoreBox};
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::infrastructure::simulator::SimulatorClient;
use payment_gateway::interfaces::http::create_router;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to serve the payment API on
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Endpoint of the acquirer simulator
    #[arg(long, default_value = "http://localhost:8080/payments")]
    simulator_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let authorizer: AuthorizerBox = Box::new(SimulatorClient::new(cli.simulator_url));
    let gateway = Arc::new(PaymentGateway::new(store, authorizer));

    let app = create_router(gateway);
    let listener = tokio::net::TcpListener::bind(&cli.listen)
        .await
        .into_diagnostic()?;
    info!(addr = %cli.listen, "payment gateway listening");
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
