use std::process::ExitCode;

fn main() -> ExitCode {
    let scenario = std::env::args().nth(1);
    example::run(scenario.as_deref())
}
