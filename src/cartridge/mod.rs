//! Common Cartridge package generation.
//!
//! The exporter walks a [`Course`](crate::course::Course) in input order
//! and emits every artifact through a [`PackageSink`]: course settings,
//! the front page, one wiki page per lesson, module metadata, and finally
//! the manifest. Resource identifiers minted along the way stay consistent
//! across the manifest, the module metadata, and the page files.

mod manifest;
mod pages;
mod sink;
mod writer;

pub use sink::{DirSink, MemorySink, PackageSink};
pub use writer::{CartridgeConfig, CartridgeExporter, write_cartridge};
