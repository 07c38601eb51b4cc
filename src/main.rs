use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::EnvFilter;

use lapkeu_be::config::{self, Config};
use lapkeu_be::gemini::GeminiClient;
use lapkeu_be::routes::laporan::generate_laporan;
use lapkeu_be::routes::AppState;

#[tokio::main]
async fn main() {
    // Load environment dari .env file dan baca konfigurasi proses
    let Config {
        api_key,
        model,
        port,
    } = config::from_env();

    // Logging level info kecuali dioverride lewat RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Tanpa API key server tetap jalan; error baru muncul saat request
    if api_key.is_none() {
        tracing::error!("GEMINI_API_KEY tidak ditemukan. Pastikan file .env sudah diatur.");
    }

    let generator = GeminiClient::new(api_key, model.clone());
    let state = AppState {
        generator: Arc::new(generator),
    };

    // Static file untuk halaman input (dari folder static)
    let serve_dir =
        ServeDir::new("static").not_found_service(ServeFile::new("static/index.html"));

    // Middleware CORS untuk izinkan request dari frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Definisikan route backend API
    let app = Router::new()
        .route("/generate", post(generate_laporan))

        // Inject state generator dan middleware CORS
        .with_state(state)
        .layer(cors)

        // Serve halaman input untuk path lainnya
        .fallback_service(serve_dir);

    // Jalankan server
    let addr = format!("127.0.0.1:{}", port);
    println!("🚀 Server running at http://{}", addr);
    println!("✅ Model Gemini: {}", model);
    println!("🔗 Generator laporan siap di http://{}/generate", addr);

    // Binding listener
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    // Serve aplikasi
    axum::serve(listener, app).await.unwrap();
}
