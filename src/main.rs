use multi_dropdown::cli::Cli;
use multi_dropdown::handles::run;
fn main() {
    let cli = Cli::parse_args();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
