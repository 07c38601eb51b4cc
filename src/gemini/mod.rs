pub mod client;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;

/// Model bawaan untuk pembuatan konten teks
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Kegagalan pada batas layanan Gemini.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY tidak ditemukan di environment")]
    MissingApiKey,

    #[error("gagal menghubungi Gemini API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API menolak permintaan (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("respons Gemini tidak memuat teks")]
    EmptyResponse,
}

/// Batas kemampuan minimal yang dibutuhkan handler laporan: prompt masuk,
/// teks keluar. Implementasi nyata memanggil Gemini; test memakai
/// [`mock::MockGenerator`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
