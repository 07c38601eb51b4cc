use std::sync::Arc;

use crate::gemini::TextGenerator;

pub mod laporan;

// State bersama antar request: generator teks dibuat sekali saat startup
// dan hanya dibaca setelahnya
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}
