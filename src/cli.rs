use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "richbar")]
#[command(version = "0.1.0")]
#[command(about = "A configurable rich-text editor toolbar for the terminal")]
pub struct CliArgs {
    /// Options file (TOML, or JSON with a .json extension)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Locale for button tooltips (en or zh)
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// UI theme to use (dark or light)
    #[arg(long, short = 'T')]
    pub theme: Option<String>,

    /// Print the registered toolbar tags and exit
    #[arg(long)]
    pub list_keys: bool,

    /// Print the resolved toolbar and exit
    #[arg(long)]
    pub dump: bool,
}

impl CliArgs {
    /// Config file to load: the explicit flag, else the default location
    /// when a file exists there
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            crate::config::default_config_path().filter(|path| path.is_file())
        })
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
