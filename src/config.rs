//! Configuration for a validation run.
//!
//! Handles:
//! - Command-line argument parsing
//! - Default document paths and normalization

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use thiserror::Error;

/// Command-line arguments for the checker
#[derive(Debug, Parser)]
#[command(name = "xsd-check")]
#[command(about = "Check an XML document against an XSD schema")]
#[command(version)]
pub struct Args {
    /// Path to the XML document to check
    #[arg(long, help = "Path to the XML document")]
    pub xml: Option<PathBuf>,

    /// Path to the XSD schema to check against
    #[arg(long, help = "Path to the XSD schema")]
    pub xsd: Option<PathBuf>,
}

/// Default file name substituted for `--xml` when no paths are given
pub const DEFAULT_XML_FILE: &str = "thuvien.xml";
/// Default file name substituted for `--xsd` when no paths are given
pub const DEFAULT_XSD_FILE: &str = "thuvien.xsd";

/// Errors raised while resolving the run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("please provide both --xml and --xsd, or neither to use the defaults")]
    MissingCompanionPath,
    #[error("XML file not found: {}", .0.display())]
    XmlNotFound(PathBuf),
    #[error("XSD file not found: {}", .0.display())]
    XsdNotFound(PathBuf),
    #[error("could not resolve path {}: {source}", .path.display())]
    Normalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the XML document
    pub xml_path: PathBuf,
    /// Absolute path of the XSD schema
    pub xsd_path: PathBuf,
}

impl Config {
    /// Create configuration from parsed arguments and the current directory
    pub fn from_args_and_env(args: Args) -> anyhow::Result<Self> {
        let base_dir =
            std::env::current_dir().context("cannot determine the current directory")?;
        Ok(Self::from_args(args, &base_dir)?)
    }

    /// Create configuration from explicit arguments (useful for testing)
    ///
    /// The default file names resolve against `base_dir`; explicitly given
    /// paths are taken as-is and normalized to absolute form. Both files must
    /// exist before any backend is attempted.
    pub fn from_args(args: Args, base_dir: &Path) -> Result<Self, ConfigError> {
        let (xml, xsd) = match (args.xml, args.xsd) {
            (None, None) => (
                base_dir.join(DEFAULT_XML_FILE),
                base_dir.join(DEFAULT_XSD_FILE),
            ),
            (Some(xml), Some(xsd)) => (xml, xsd),
            _ => return Err(ConfigError::MissingCompanionPath),
        };

        let xml_path = absolutize(xml)?;
        let xsd_path = absolutize(xsd)?;

        if !xml_path.exists() {
            return Err(ConfigError::XmlNotFound(xml_path));
        }
        if !xsd_path.exists() {
            return Err(ConfigError::XsdNotFound(xsd_path));
        }

        Ok(Config { xml_path, xsd_path })
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, ConfigError> {
    std::path::absolute(&path).map_err(|source| ConfigError::Normalize { path, source })
}
