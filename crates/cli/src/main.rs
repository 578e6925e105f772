//! `stockroom` entry point: run the demonstration sequence.

use stockroom_store::JsonFileStore;

fn main() {
    stockroom_observability::init();

    let path = stockroom_cli::store_path_from_env();
    tracing::info!(%path, "using inventory file");
    let store = JsonFileStore::new(path);

    let mut stdout = std::io::stdout();
    // Recoverable conditions are reported inside run(); the process always
    // finishes the sequence and exits 0.
    if let Err(e) = stockroom_cli::run(&store, &mut stdout) {
        tracing::error!(error = %e, "could not write output");
    }
}
