use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::TextGenerator;

/// Generator skrip untuk test: mengembalikan hasil yang sudah ditentukan
/// secara berurutan dan mencatat setiap prompt yang diterima.
pub struct MockGenerator {
    responses: Vec<Result<String, String>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Berapa kali `generate` dipanggil.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Salinan semua prompt yang pernah diterima.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let giliran = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.responses.get(giliran) {
            Some(Ok(teks)) => Ok(teks.clone()),
            Some(Err(pesan)) => Err(anyhow!(pesan.clone())),
            None => Err(anyhow!(
                "MockGenerator: skrip respons habis (panggilan ke-{})",
                giliran + 1
            )),
        }
    }
}
