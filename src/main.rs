use std::env;
use std::process;

fn main() {
    setup_logging();

    if let Err(err) = calsift::run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "calsift=warn");
    }

    pretty_env_logger::init_custom_env("LOG");
}
