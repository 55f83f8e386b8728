use {
    crate::{
        barren::{self, FieldDimensions, ProcessError},
        cli::{GlobalArgs, RunArgs},
        logger::Logger,
        utils::errorfmt::ErrorFmt,
    },
    std::{
        fs,
        io::{self, BufRead, stdin},
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Could not read {}", .0.display())]
    ReadFile(PathBuf, #[source] io::Error),
    #[error("Could not read from stdin")]
    ReadStdin(#[source] io::Error),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

pub fn main(global: GlobalArgs, args: RunArgs) {
    Logger::install(global.log_level.into());
    match run(&args) {
        Ok(areas) => println!("{}", areas),
        Err(e) => fatal!("Could not compute the areas: {}", ErrorFmt(e)),
    }
}

fn run(args: &RunArgs) -> Result<String, RunError> {
    let input = read_input(args.input.as_deref())?;
    let dims = FieldDimensions {
        width: args.width,
        height: args.height,
    };
    Ok(barren::process(&input, dims)?)
}

fn read_input(path: Option<&Path>) -> Result<String, RunError> {
    match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading rectangles from {}", path.display());
            fs::read_to_string(path).map_err(|e| RunError::ReadFile(path.to_path_buf(), e))
        }
        _ => {
            let mut line = String::new();
            stdin()
                .lock()
                .read_line(&mut line)
                .map_err(RunError::ReadStdin)?;
            Ok(line)
        }
    }
}
