use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::battle::BattleState;
use crate::error::SnapshotError;
use crate::map::Map;
use crate::state::RunState;

/// Everything the encoders read, captured at one point of a run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub run: RunState,
    #[serde(default)]
    pub battle: Option<BattleState>,
    #[serde(default)]
    pub map: Option<Map>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    Bincode,
}

impl SnapshotFormat {
    /// `.json` files are JSON; anything else is treated as bincode.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Bincode,
        }
    }
}

impl Snapshot {
    pub fn new(run: RunState) -> Self {
        Self {
            run,
            battle: None,
            map: None,
        }
    }

    pub fn from_bytes(bytes: &[u8], format: SnapshotFormat) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = match format {
            SnapshotFormat::Json => serde_json::from_slice(bytes)?,
            SnapshotFormat::Bincode => {
                let (snapshot, _): (Snapshot, usize) =
                    bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
                snapshot
            }
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self, format: SnapshotFormat) -> Result<Vec<u8>, SnapshotError> {
        Ok(match format {
            SnapshotFormat::Json => serde_json::to_vec_pretty(self)?,
            SnapshotFormat::Bincode => {
                bincode::serde::encode_to_vec(self, bincode::config::standard())?
            }
        })
    }

    pub fn load(path: &Path, format: Option<SnapshotFormat>) -> Result<Self, SnapshotError> {
        let format = format.unwrap_or_else(|| SnapshotFormat::from_path(path));
        let bytes = fs::read(path)?;
        debug!("loading {format:?} snapshot from {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(&bytes, format)
    }

    pub fn save(&self, path: &Path, format: Option<SnapshotFormat>) -> Result<(), SnapshotError> {
        let format = format.unwrap_or_else(|| SnapshotFormat::from_path(path));
        fs::write(path, self.to_bytes(format)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.run.max_hp < 0 {
            return Err(SnapshotError::Invalid("max hp must not be negative"));
        }
        if self.run.cur_hp > self.run.max_hp {
            return Err(SnapshotError::Invalid("current hp exceeds max hp"));
        }
        Ok(())
    }
}
