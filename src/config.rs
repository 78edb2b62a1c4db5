/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the [`Config`] for the library.

use sealed::sealed;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// This holds the configuration. It is not limited to configuring a single part
/// of the library, but unifies all in a single configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Debug mode
    pub(crate) debug: bool,

    /// Generate a pseudo-random document identifier when a document is saved without one.
    pub(crate) generate_ids: bool,

    /// The chosen dataformat for serialisation. The annotation surface exchanges
    /// compact JSON; pretty-printed JSON is available for inspection.
    pub(crate) dataformat: DataFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            generate_ids: true,
            dataformat: DataFormat::Json { compact: true },
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug mode. In debug mode, verbose output will be printed to standard error output
    pub fn with_debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Is debug mode enabled or not?
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Generate document identifiers when missing on save?
    pub fn with_generate_ids(mut self, value: bool) -> Self {
        self.generate_ids = value;
        self
    }

    /// Is generation of document identifiers when missing enabled or not?
    pub fn generate_ids(&self) -> bool {
        self.generate_ids
    }

    /// Sets the chosen dataformat for serialisation, defaults to compact JSON.
    pub fn with_dataformat(mut self, value: DataFormat) -> Self {
        self.dataformat = value;
        self
    }

    /// Returns the configured dataformat for serialisation.
    pub fn dataformat(&self) -> DataFormat {
        self.dataformat
    }
}

#[sealed]
impl TypeInfo for Config {
    fn typeinfo() -> Type {
        Type::Config
    }
}
