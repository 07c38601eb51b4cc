//! Backend generator Laporan Laba Rugi: normalisasi data transaksi,
//! perakitan prompt, dan pemanggilan Gemini API lewat endpoint HTTP.

pub mod config;
pub mod gemini;
pub mod models;
pub mod normalizer;
pub mod prompt;
pub mod routes;
