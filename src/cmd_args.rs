use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    #[command(subcommand)]
    command: ClapCommand,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Run the Bible proxy server
    Serve {
        /// Listener port; overrides the PORT environment variable
        #[clap(short = 'p', long, help = "listener port")]
        port: Option<u16>,
    },
    /// Render the Bible page in the terminal
    View {
        /// Client route to render. Only /bible is defined.
        #[clap(long, default_value = "/bible", help = "client route to render")]
        path: String,

        /// Translation version to fetch
        #[clap(long, default_value = "NVI", help = "translation version")]
        version: String,
    },
}

/// Parsed subcommand, decoupled from the clap types
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Serve { port: Option<u16> },
    View { path: String, version: String },
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    fn from_clap(args: ClapArgs) -> Self {
        let command = match args.command {
            ClapCommand::Serve { port } => Command::Serve { port },
            ClapCommand::View { path, version } => Command::View { path, version },
        };
        Self { command }
    }
}
