use serde::Deserialize;
use serde_json::Value;

// Payload mentah dari form input. Tiga kolom transaksi dikirim sebagai
// array terpisah yang berpasangan per index.
#[derive(Debug, Deserialize)]
pub struct GenerateLaporanRequest {
    pub perusahaan: Option<String>,
    pub periode: Option<String>,
    #[serde(default)]
    pub kategori: Vec<String>,
    #[serde(default)]
    pub keterangan: Vec<String>,
    #[serde(default)]
    pub jumlah: Vec<Value>, // angka atau string berisi angka
}

// Satu baris transaksi yang sudah lolos validasi
#[derive(Debug, Clone, PartialEq)]
pub struct Transaksi {
    pub kategori: String,
    pub keterangan: String,
    pub jumlah: i64,
}

// Data laporan lengkap yang siap dirender menjadi prompt
#[derive(Debug, Clone)]
pub struct Laporan {
    pub perusahaan: String,
    pub periode: String,
    pub transaksi: Vec<Transaksi>,
}
