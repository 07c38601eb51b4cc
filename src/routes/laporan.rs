use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::models::laporan::{GenerateLaporanRequest, Laporan};
use crate::normalizer::normalize_transaksi;
use crate::prompt::build_prompt;
use crate::routes::AppState;

// Terima data transaksi mentah, rakit prompt, lalu minta Gemini membuat
// fragmen HTML Laporan Laba Rugi
pub async fn generate_laporan(
    State(state): State<AppState>,
    payload: Result<Json<GenerateLaporanRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Body harus JSON dengan struktur yang dikenal
    let Json(payload) = payload.map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Permintaan JSON tidak valid."
            })),
        )
    })?;

    // Identitas laporan boleh kosong, pakai nilai default
    let perusahaan = payload
        .perusahaan
        .unwrap_or_else(|| "Nama Perusahaan Default".to_string());
    let periode = payload
        .periode
        .unwrap_or_else(|| "Periode Tidak Diketahui".to_string());

    let transaksi = normalize_transaksi(&payload.kategori, &payload.keterangan, &payload.jumlah);

    if transaksi.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Tidak ada transaksi valid yang ditemukan untuk diproses."
            })),
        ));
    }

    let laporan = Laporan {
        perusahaan,
        periode,
        transaksi,
    };
    let prompt = build_prompt(&laporan);

    tracing::info!("Mencoba menghasilkan laporan untuk {}", laporan.perusahaan);

    match state.generator.generate(&prompt).await {
        Ok(html) => Ok(Json(json!({
            "html_report": html
        }))),
        Err(err) => {
            tracing::error!("Kesalahan dalam memanggil Gemini API: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Gagal menghasilkan laporan. Detail: {}", err)
                })),
            ))
        }
    }
}
