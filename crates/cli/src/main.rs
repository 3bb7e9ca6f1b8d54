fn main() {
    if let Err(e) = assetmap_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
