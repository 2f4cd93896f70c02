fn main() {
    if let Err(err) = fibbench_cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
