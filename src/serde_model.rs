//! Parameter serialization/deserialization (feature: `serde`).
//!
//! This module defines a versioned, stable on-disk format for [`Params`].
//!
//! The internal `Params`/`Matrix` structs are not serialized directly; the
//! file format stays stable even if the in-memory representation changes.
//! Deserialization validates the format version, every shape, the fixed
//! topology, and that all values are finite.

use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::params::{HIDDEN_SIZE, OUTPUT_SIZE};
use crate::{Error, Matrix, Params, Result};

pub const PARAMS_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedParams {
    pub format_version: u32,
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Row-major `(hidden_size, input_size)`.
    pub w1: Vec<f32>,
    pub b1: Vec<f32>,
    /// Row-major `(output_size, hidden_size)`.
    pub w2: Vec<f32>,
    pub b2: Vec<f32>,
}

impl SerializedParams {
    pub fn validate(&self) -> Result<()> {
        if self.format_version != PARAMS_FORMAT_VERSION {
            return Err(Error::InvalidData(format!(
                "unsupported params format_version {}; expected {PARAMS_FORMAT_VERSION}",
                self.format_version
            )));
        }
        if self.hidden_size != HIDDEN_SIZE || self.output_size != OUTPUT_SIZE {
            return Err(Error::InvalidData(format!(
                "topology ({}, {}) does not match the fixed ({HIDDEN_SIZE}, {OUTPUT_SIZE}) design",
                self.hidden_size, self.output_size
            )));
        }
        if self.input_size == 0 {
            return Err(Error::InvalidData("input_size must be > 0".to_owned()));
        }

        let checks = [
            ("w1", self.w1.len(), self.hidden_size * self.input_size),
            ("b1", self.b1.len(), self.hidden_size),
            ("w2", self.w2.len(), self.output_size * self.hidden_size),
            ("b2", self.b2.len(), self.output_size),
        ];
        for (name, actual, expected) in checks {
            if actual != expected {
                return Err(Error::InvalidData(format!(
                    "{name} has {actual} values, expected {expected}"
                )));
            }
        }

        for (name, values) in [
            ("w1", &self.w1),
            ("b1", &self.b1),
            ("w2", &self.w2),
            ("b2", &self.b2),
        ] {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(Error::InvalidData(format!(
                    "{name} must contain only finite values"
                )));
            }
        }

        Ok(())
    }
}

impl From<&Params> for SerializedParams {
    fn from(params: &Params) -> Self {
        Self {
            format_version: PARAMS_FORMAT_VERSION,
            input_size: params.input_size(),
            hidden_size: HIDDEN_SIZE,
            output_size: OUTPUT_SIZE,
            w1: params.w1().data().to_vec(),
            b1: params.b1().data().to_vec(),
            w2: params.w2().data().to_vec(),
            b2: params.b2().data().to_vec(),
        }
    }
}

impl TryFrom<SerializedParams> for Params {
    type Error = Error;

    fn try_from(value: SerializedParams) -> std::result::Result<Self, Self::Error> {
        value.validate()?;

        let w1 = Matrix::from_vec(value.hidden_size, value.input_size, value.w1)?;
        let b1 = Matrix::from_vec(value.hidden_size, 1, value.b1)?;
        let w2 = Matrix::from_vec(value.output_size, value.hidden_size, value.w2)?;
        let b2 = Matrix::from_vec(value.output_size, 1, value.b2)?;

        Params::from_parts(w1, b1, w2, b2)
    }
}

impl Params {
    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        let ser = SerializedParams::from(self);
        serde_json::to_string_pretty(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize params: {e}")))
    }

    /// Serialize to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let ser = SerializedParams::from(self);
        serde_json::to_string(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize params: {e}")))
    }

    /// Parse parameters from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ser: SerializedParams = serde_json::from_str(s)
            .map_err(|e| Error::InvalidData(format!("failed to parse params json: {e}")))?;
        ser.try_into()
    }

    /// Save to a JSON file (pretty-printed).
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let s = self.to_json_string_pretty()?;
        let p = path.as_ref();
        std::fs::write(p, s)
            .map_err(|e| Error::InvalidData(format!("failed to write {}: {e}", p.display())))?;
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let s = std::fs::read_to_string(p)
            .map_err(|e| Error::InvalidData(format!("failed to read {}: {e}", p.display())))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_every_value() {
        let params = Params::init_with_seed(12, 99).unwrap();
        let json = params.to_json_string().unwrap();
        let loaded = Params::from_json_str(&json).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn rejects_unknown_version() {
        let params = Params::init_with_seed(2, 0).unwrap();
        let mut ser = SerializedParams::from(&params);
        ser.format_version = 999;
        let json = serde_json::to_string(&ser).unwrap();

        let err = Params::from_json_str(&json).unwrap_err();
        assert!(format!("{err}").contains("format_version"));
    }

    #[test]
    fn rejects_wrong_parameter_lengths() {
        let params = Params::init_with_seed(2, 0).unwrap();
        let mut ser = SerializedParams::from(&params);
        ser.b2.pop();
        assert!(Params::try_from(ser).is_err());
    }

    #[test]
    fn rejects_foreign_topology() {
        let params = Params::init_with_seed(2, 0).unwrap();
        let mut ser = SerializedParams::from(&params);
        ser.hidden_size = 16;
        assert!(ser.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        let params = Params::init_with_seed(2, 0).unwrap();
        let mut ser = SerializedParams::from(&params);
        ser.w1[0] = f32::NAN;
        assert!(ser.validate().is_err());
    }
}
