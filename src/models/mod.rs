pub mod laporan;
