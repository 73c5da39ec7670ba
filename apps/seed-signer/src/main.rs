//! Seed signer binary

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    seed_signer::logging::init();

    let code = seed_signer::run(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
