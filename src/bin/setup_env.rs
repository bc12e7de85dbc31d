use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip_planner_devtools::cli::SetupEnvArgs;
use trip_planner_devtools::report::{render_next_steps, render_write_outcome, SETUP_BANNER};
use trip_planner_devtools::service::env_bootstrapper::EnvBootstrapper;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = SetupEnvArgs::parse();

    println!("{SETUP_BANNER}\n");
    for outcome in EnvBootstrapper::with_defaults(args.root).run() {
        println!("{}", render_write_outcome(&outcome));
    }
    println!("\n{}", render_next_steps());
    Ok(())
}
