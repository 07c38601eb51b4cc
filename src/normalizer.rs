use serde_json::Value;
use tracing::warn;

use crate::models::laporan::Transaksi;

// Saring tiga kolom input yang berpasangan per index menjadi daftar
// transaksi valid. Baris dengan jumlah tak terbaca dilewati; kolom yang
// tidak sama panjang dipotong ke kolom terpendek.
pub fn normalize_transaksi(
    kategori: &[String],
    keterangan: &[String],
    jumlah: &[Value],
) -> Vec<Transaksi> {
    let mut hasil = Vec::new();

    for ((kategori, keterangan), jumlah) in kategori.iter().zip(keterangan).zip(jumlah) {
        let angka = match parse_jumlah(jumlah) {
            Some(angka) => angka,
            None => {
                warn!("Nilai jumlah tidak valid, dilewati: {}", jumlah);
                continue;
            }
        };

        // Baris hanya ikut jika keterangan terisi dan jumlahnya bukan nol
        if !keterangan.is_empty() && angka != 0.0 {
            hasil.push(Transaksi {
                kategori: kategori.clone(),
                keterangan: keterangan.clone(),
                jumlah: angka as i64, // pecahan dibuang, bukan dibulatkan
            });
        }
    }

    hasil
}

// Jumlah boleh berupa angka JSON atau string angka; nilai kosong dianggap nol.
// Nilai non-finit atau di luar jangkauan i64 dianggap tidak valid.
fn parse_jumlah(value: &Value) -> Option<f64> {
    let angka = match value {
        Value::Number(angka) => angka.as_f64(),
        Value::String(teks) => {
            let teks = teks.trim();
            if teks.is_empty() {
                Some(0.0)
            } else {
                teks.parse::<f64>().ok()
            }
        }
        Value::Null => Some(0.0),
        _ => None,
    }?;

    if dalam_jangkauan_i64(angka) {
        Some(angka)
    } else {
        None
    }
}

// Pemotongan `as i64` menjepit nilai di luar jangkauan ke batas jangkauan,
// jadi nilai seperti itu ditolak sejak parsing. Batas atas perbandingan
// adalah 2^63 karena i64::MAX membulat ke atas saat dikonversi ke f64.
fn dalam_jangkauan_i64(angka: f64) -> bool {
    angka >= i64::MIN as f64 && angka < i64::MAX as f64
}
