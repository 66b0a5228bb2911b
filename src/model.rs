//! Record types: the stored car entry, its creation payload and its partial update.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use utoipa::ToSchema;

/// Identifier width in characters (12 bytes, hex encoded).
pub const ID_LEN: usize = 24;

/// Store-assigned identifier. Construct with [`RecordId::parse`] or [`RecordId::generate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Valid iff the candidate is exactly 24 characters long.
    pub fn parse(candidate: &str) -> Result<Self, AppError> {
        if candidate.is_empty() || candidate.chars().count() != ID_LEN {
            return Err(AppError::InvalidId(candidate.to_string()));
        }
        Ok(RecordId(candidate.to_string()))
    }

    /// New identifier: 4-byte big-endian unix seconds, 5 random bytes, 3-byte counter.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        let secs = chrono::Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&process_entropy()[..5]);
        let count = next_count();
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        RecordId(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// Wrap an identifier read back from the store, which only holds generated ids.
    pub(crate) fn from_stored(id: String) -> Self {
        RecordId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn process_entropy() -> &'static [u8; 16] {
    static ENTROPY: OnceLock<[u8; 16]> = OnceLock::new();
    ENTROPY.get_or_init(|| *uuid::Uuid::new_v4().as_bytes())
}

fn next_count() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| {
        let seed = process_entropy();
        AtomicU32::new(u32::from_be_bytes([0, seed[13], seed[14], seed[15]]))
    });
    counter.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff
}

/// A stored die-cast car record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "65f1c0de9a1b2c3d4e5f6071")]
    pub id: RecordId,
    /// Car name.
    pub nome: String,
    /// Car model.
    pub modelo: String,
    /// Manufacturing year.
    pub ano: i32,
    /// Image URL.
    pub imagem: String,
}

impl Record {
    pub fn from_new(id: RecordId, new: NewRecord) -> Self {
        Record {
            id,
            nome: new.nome,
            modelo: new.modelo,
            ano: new.ano,
            imagem: new.imagem,
        }
    }

    /// Overwrite only the fields present in the patch.
    pub fn apply(&mut self, patch: RecordPatch) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(modelo) = patch.modelo {
            self.modelo = modelo;
        }
        if let Some(ano) = patch.ano {
            self.ano = ano;
        }
        if let Some(imagem) = patch.imagem {
            self.imagem = imagem;
        }
    }
}

/// Creation payload; all four fields are required. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct NewRecord {
    pub nome: String,
    pub modelo: String,
    pub ano: i32,
    pub imagem: String,
}

/// Partial update. Only these fields may be changed; anything else is rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecordPatch {
    pub nome: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub imagem: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.modelo.is_none() && self.ano.is_none() && self.imagem.is_none()
    }
}
