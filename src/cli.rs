use clap::{CommandFactory, Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  port 3000              Check port 3000 and offer to kill its process
  port free 3000         Kill whatever listens on 3000
  port free 3000-3010    Free a whole range
  port free 3000 8080    Free several ports
  port list              List every listening port";

#[derive(Parser, Debug)]
#[command(
    name = "port",
    about = "See which process holds a TCP port and free it",
    version,
    args_conflicts_with_subcommands = true,
    subcommand_help_heading = "Commands",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(help = "Port number to check", allow_negative_numbers = true)]
    pub port: Option<i64>,

    #[arg(short, long, global = true, help = "Suppress output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(short = 'v', long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Kill processes on ports or ranges without asking")]
    Free {
        #[arg(help = "Ports or ranges, e.g. 3000 8080 3000-3010")]
        ports: Vec<String>,
    },

    #[command(visible_alias = "ls", about = "List all listening ports")]
    List,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}
