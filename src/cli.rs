mod generate;
mod run;

use {
    crate::barren::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, value_parser},
    clap_complete::Shell,
    log::Level,
    std::path::PathBuf,
};

/// Computes the connected areas that remain of a field after rectangles have been
/// removed from it.
#[derive(Parser, Debug)]
pub struct Barren {
    #[clap(flatten)]
    global: GlobalArgs,
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// The log level.
    #[clap(value_enum, long, default_value_t)]
    pub log_level: CliLogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Remove rectangles from the field and print the areas of the connected regions.
    Run(RunArgs),
    /// Generate shell completion scripts for barren.
    GenerateCompletion(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// The width of the field in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = value_parser!(i32).range(1..))]
    pub width: i32,
    /// The height of the field in cells.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = value_parser!(i32).range(1..))]
    pub height: i32,
    /// The file containing the rectangles to remove.
    ///
    /// The rectangles must be given as `{"x1 y1 x2 y2","x1 y1 x2 y2",...}` where
    /// `x1 y1` is the lower left and `x2 y2` the upper right corner. Both corners
    /// are part of the rectangle.
    ///
    /// If no file or `-` is given, the first line of stdin is read.
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash)]
pub enum CliLogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Trace => Level::Trace,
            CliLogLevel::Debug => Level::Debug,
            CliLogLevel::Info => Level::Info,
            CliLogLevel::Warn => Level::Warn,
            CliLogLevel::Error => Level::Error,
        }
    }
}

impl Default for CliLogLevel {
    fn default() -> Self {
        Self::Info
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The shell to generate completions for
    #[clap(value_enum)]
    shell: Shell,
}

pub fn main() {
    let cli = Barren::parse();
    match cli.command {
        Cmd::Run(a) => run::main(cli.global, a),
        Cmd::GenerateCompletion(g) => generate::main(g),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Barren, Cmd},
        clap::{CommandFactory, Parser},
    };

    #[test]
    fn verify() {
        Barren::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let cli = Barren::try_parse_from(["barren", "run"]).unwrap();
        let Cmd::Run(args) = cli.command else {
            panic!("expected the run command");
        };
        assert_eq!(args.width, 400);
        assert_eq!(args.height, 600);
        assert!(args.input.is_none());
    }

    #[test]
    fn run_rejects_empty_field() {
        assert!(Barren::try_parse_from(["barren", "run", "--width", "0"]).is_err());
    }
}
