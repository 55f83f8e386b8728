use {
    crate::cli::{Barren, GenerateArgs},
    clap::CommandFactory,
    std::io::stdout,
};

pub fn main(args: GenerateArgs) {
    let mut stdout = stdout().lock();
    clap_complete::generate(args.shell, &mut Barren::command(), "barren", &mut stdout);
}
