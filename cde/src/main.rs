use std::process::ExitCode;

fn main() -> ExitCode { cde_driver::run_with_args(std::env::args_os()).into() }
