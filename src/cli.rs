use clap::Parser;

/// Zero-argument invocation: the manifest and output locations are
/// conventional, so clap contributes only `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "nodereg")]
#[command(about = "Generate the node metadata registry from exported node declarations", long_about = None)]
#[command(version)]
pub struct Cli {}
