#[macro_use]
mod macros;
mod barren;
mod cli;
mod input;
mod logger;
mod utils;

fn main() {
    cli::main();
}
