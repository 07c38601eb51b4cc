use std::env;

use crate::gemini::DEFAULT_MODEL;

// Konfigurasi proses: dibaca sekali saat startup, tidak berubah setelahnya
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub port: u16,
}

// Muat file .env lalu baca variabel lingkungan yang dipakai server
pub fn from_env() -> Config {
    dotenvy::dotenv().ok();

    // API key kosong diperlakukan sama dengan tidak ada
    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8080);

    Config {
        api_key,
        model,
        port,
    }
}
