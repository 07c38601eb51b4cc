use crate::models::laporan::{Laporan, Transaksi};

// Instruksi tetap untuk model AI: peran, gaya, dan batasan output fragmen
const SYSTEM_PROMPT: &str = "Anda adalah asisten AI yang ahli dalam akuntansi dan pemformatan HTML. \
    Tugas Anda adalah membuat fragmen HTML yang elegan dan responsif untuk Laporan Laba Rugi. \
    GUNAKAN KELAS TAILWIND CSS LENGKAP untuk semua styling, termasuk tata letak, warna, tipografi, dan responsivitas. \
    JANGAN SERTAKAN tag <html>, <head>, atau <body>, hanya fragmen konten laporan.";

// Rakit prompt lengkap: instruksi tetap + data laporan + aturan pembuatan.
// Pengelompokan Pendapatan/Beban dan semua perhitungan subtotal diserahkan
// ke model lewat aturan di bawah, bukan dihitung di sini.
pub fn build_prompt(laporan: &Laporan) -> String {
    format!(
        r#"{system}

--- MULAI LAPORAN ---

Buatlah fragmen HTML Laporan Laba Rugi berdasarkan data transaksi berikut:

Perusahaan: {perusahaan}
Periode: {periode}

Data Transaksi (Kategori - Keterangan : Jumlah):
{transaksi}

Aturan Pembuatan Laporan:
1. **HEADER**: Tampilkan Nama Perusahaan, Judul Laporan ("LAPORAN LABA RUGI"), Periode, dan Catatan "Dalam Rupiah (Rp)". Gunakan tipografi yang menonjol dan rata tengah.
2. **TABEL**: Gunakan elemen <table>, <thead>, dan <tbody>. Pastikan tabel **responsif penuh** (`w-full`) dengan padding dan batas yang bagus (menggunakan kelas Tailwind seperti `border-collapse`, `shadow-lg`, `rounded-lg`).
3. **KOLOM**: "Keterangan" (Rata Kiri, Lebar 70%) dan "Jumlah (Rp)" (Rata Kanan, Lebar 30%).
4. **PENGELOMPOKAN**: Kategorikan transaksi menjadi **Pendapatan** (dengan subtotal **Total Pendapatan**) dan **Beban** (dengan subtotal **Total Beban**).
5. **LABA BERSIH**: Hitung **LABA BERSIH (RUGI BERSIH)** sebagai Total Pendapatan dikurangi Total Beban. Nilai akhir ini harus **DIBOLD dan menonjol** dengan gaya khas Tailwind (misalnya, font tebal ekstra dan latar belakang hijau muda/merah muda).
6. **FORMAT ANGKA**: Semua nilai mata uang (Jumlah) harus diformat sebagai angka tanpa pemisah desimal, contoh: 1,000,000."#,
        system = SYSTEM_PROMPT,
        perusahaan = laporan.perusahaan,
        periode = laporan.periode,
        transaksi = format_transaksi(&laporan.transaksi),
    )
}

// Satu baris per transaksi, urutan input dipertahankan
fn format_transaksi(transaksi: &[Transaksi]) -> String {
    transaksi
        .iter()
        .map(|t| format!("{} - {} : {}", t.kategori, t.keterangan, t.jumlah))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laporan_contoh() -> Laporan {
        Laporan {
            perusahaan: "PT Maju Jaya".to_string(),
            periode: "Januari 2025".to_string(),
            transaksi: vec![
                Transaksi {
                    kategori: "Pendapatan".to_string(),
                    keterangan: "Penjualan".to_string(),
                    jumlah: 1500000,
                },
                Transaksi {
                    kategori: "Beban".to_string(),
                    keterangan: "Gaji".to_string(),
                    jumlah: 500000,
                },
            ],
        }
    }

    #[test]
    fn data_transaksi_dirender_per_baris() {
        let prompt = build_prompt(&laporan_contoh());

        assert!(prompt.contains("Pendapatan - Penjualan : 1500000"));
        assert!(prompt.contains("Beban - Gaji : 500000"));
    }

    #[test]
    fn urutan_baris_mengikuti_input() {
        let prompt = build_prompt(&laporan_contoh());

        let penjualan = prompt.find("Pendapatan - Penjualan").unwrap();
        let gaji = prompt.find("Beban - Gaji").unwrap();
        assert!(penjualan < gaji);
    }

    #[test]
    fn identitas_laporan_ikut_dalam_prompt() {
        let prompt = build_prompt(&laporan_contoh());

        assert!(prompt.contains("Perusahaan: PT Maju Jaya"));
        assert!(prompt.contains("Periode: Januari 2025"));
    }

    #[test]
    fn instruksi_tetap_ikut_dalam_prompt() {
        let prompt = build_prompt(&laporan_contoh());

        assert!(prompt.contains("GUNAKAN KELAS TAILWIND CSS LENGKAP"));
        assert!(prompt.contains("JANGAN SERTAKAN tag <html>"));
        assert!(prompt.contains("--- MULAI LAPORAN ---"));
        assert!(prompt.contains("LABA BERSIH"));
    }
}
