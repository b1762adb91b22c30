use anyhow::Result;
use clap::Parser;
use nodereg::cli::Cli;
use nodereg::commands::generate::generate;
use nodereg::io::SystemClock;

fn main() -> Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let root = std::env::current_dir()?;
    let summary = generate(&root, &SystemClock)?;
    println!(
        "Registered {} nodes across {} namespaces",
        summary.node_count, summary.namespace_count
    );
    Ok(())
}
