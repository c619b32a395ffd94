mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Erro: {}", e);
        std::process::exit(1);
    }
}
