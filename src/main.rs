use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use formbox::config::Config;
use formbox::schema::FormSchema;
use formbox::state::AppState;
use formbox::store::NullStore;

#[tokio::main]
async fn main() {
    // Begin logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    // Load configuration, aborting start-up if the config file is unreadable
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return;
        }
    };

    let upload_dir = config.upload_dir();
    if let Err(e) = std::fs::create_dir_all(&upload_dir) {
        tracing::error!("Could not create upload directory {}: {e}", upload_dir.display());
        return;
    }

    // The schema is built once here and shared immutably with every request
    let state = AppState {
        schema: FormSchema::new(),
        store: Arc::new(NullStore),
        upload_dir,
    };

    let app = formbox::app(state);

    let addr = config.bind_addr().parse::<SocketAddr>().unwrap();

    // Serve with TLS when certificate paths are configured, plain HTTP otherwise
    match config.tls {
        Some(tls) => {
            let rustls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .unwrap();

            info!("Serving on {addr} with TLS");
            axum_server::bind_rustls(addr, rustls_config)
                .serve(app.into_make_service())
                .await
                .unwrap();
        }
        None => {
            info!("Serving on {addr}");
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
                .unwrap();
        }
    }
}
