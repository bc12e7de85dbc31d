use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip_planner_devtools::cli::TestPaymentArgs;
use trip_planner_devtools::gateways::http_api::HttpPaymentApi;
use trip_planner_devtools::report::SMOKE_BANNER;
use trip_planner_devtools::service::smoke_test::SmokeTester;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = TestPaymentArgs::parse();

    println!("{SMOKE_BANNER}\n");
    let tester = SmokeTester::new(HttpPaymentApi::new(&args.api_url)).with_order(args.amount, &args.currency);
    tester.run_with(|event| println!("{event}")).await;

    // A failed smoke run is reported, not turned into a failing exit code.
    Ok(())
}
