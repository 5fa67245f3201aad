use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive mode: pick files and settings step by step
    Analyze,
    /// Write a default .rn-ai-optimize.json in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[clap(short, long)]
        force: bool,
    },
}
