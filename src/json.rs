/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the [`ToJson`] and [`FromJson`] traits that are used in
//! serialisation to/from the JSON interchange format shared with the annotation
//! surface. The actual shapes are defined alongside the data structures themselves,
//! not here.

use crate::config::Config;
use crate::error::BratError;
use crate::types::*;

pub trait ToJson
where
    Self: TypeInfo + serde::Serialize,
{
    /// Writes a JSON serialisation to any writer. Lower-level function.
    fn to_json_writer<W>(&self, writer: W, compact: bool) -> Result<(), BratError>
    where
        W: std::io::Write,
    {
        match compact {
            false => serde_json::to_writer_pretty(writer, &self).map_err(|e| {
                BratError::SerializationError(format!("Writing {}: {}", Self::typeinfo(), e))
            }),
            true => serde_json::to_writer(writer, &self).map_err(|e| {
                BratError::SerializationError(format!("Writing {}: {}", Self::typeinfo(), e))
            }),
        }
    }

    /// Serialises this structure to one string.
    /// Whether the output is compact or pretty-printed is set via `config`.
    fn to_json_string(&self, config: &Config) -> Result<String, BratError> {
        debug(config, || format!("{}.to_json_string", Self::typeinfo()));
        match config.dataformat {
            DataFormat::Json { compact: false } => {
                serde_json::to_string_pretty(&self).map_err(|e| {
                    BratError::SerializationError(format!(
                        "Writing {} to string: {}",
                        Self::typeinfo(),
                        e
                    ))
                })
            }
            DataFormat::Json { compact: true } => serde_json::to_string(&self).map_err(|e| {
                BratError::SerializationError(format!(
                    "Writing {} to string: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
        }
    }
}

pub trait FromJson
where
    Self: TypeInfo + serde::de::DeserializeOwned,
{
    /// Deserialises this structure from a JSON string. Errors carry the JSON
    /// path of the offending element, so a malformed positional tuple reports
    /// exactly which tuple (and which position inside it) failed.
    fn from_json_str(string: &str, config: &Config) -> Result<Self, BratError> {
        debug(config, || format!("{}.from_json_str", Self::typeinfo()));
        let deserializer = &mut serde_json::Deserializer::from_str(string);
        let result: Result<Self, _> = serde_path_to_error::deserialize(deserializer);
        result.map_err(|e| {
            BratError::JsonError(e, Self::typeinfo(), "Reading from JSON string")
        })
    }

    /// Deserialises this structure from any reader.
    fn from_json_reader<R>(reader: R, config: &Config) -> Result<Self, BratError>
    where
        R: std::io::BufRead,
    {
        debug(config, || format!("{}.from_json_reader", Self::typeinfo()));
        let deserializer = &mut serde_json::Deserializer::from_reader(reader);
        let result: Result<Self, _> = serde_path_to_error::deserialize(deserializer);
        result.map_err(|e| {
            BratError::JsonError(e, Self::typeinfo(), "Reading from JSON reader")
        })
    }
}
