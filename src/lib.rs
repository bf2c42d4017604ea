//! # cartouche
//!
//! A library for generating IMS Common Cartridge course packages for
//! Canvas LMS.
//!
//! ## Features
//!
//! - Build a course model in memory with ordered chapters and lessons
//! - Generate a complete Common Cartridge 1.1 directory tree
//! - Canvas course settings and module metadata with consistent identifiers
//! - Write packages to disk or capture them in memory via [`PackageSink`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use cartouche::{Chapter, Course, Lesson, write_cartridge};
//!
//! let mut course = Course::new("Intro to Geology")
//!     .with_author("A. Smith")
//!     .with_description("<p>Rocks and how they happen.</p>");
//! course.add_chapter(
//!     Chapter::new("c1", "Minerals")
//!         .with_lesson(Lesson::new("l1", "Quartz", "<p>SiO2.</p>")),
//! );
//!
//! write_cartridge(&course, "geology-export").unwrap();
//! ```
//!
//! ## Capturing Output
//!
//! Any [`PackageSink`] can receive the generated files. [`MemorySink`]
//! collects them in memory, which is handy for tests and previews:
//!
//! ```
//! use cartouche::{CartridgeExporter, Course, MemorySink};
//!
//! let course = Course::new("Empty Course");
//! let mut sink = MemorySink::new();
//! CartridgeExporter::new().export(&course, &mut sink).unwrap();
//!
//! assert!(sink.get("imsmanifest.xml").is_some());
//! assert!(sink.get("wiki_content/front-page.html").is_some());
//! ```

pub mod cartridge;
pub mod course;
pub mod error;
pub mod text;
pub(crate) mod xml;

pub use cartridge::{
    CartridgeConfig, CartridgeExporter, DirSink, MemorySink, PackageSink, write_cartridge,
};
pub use course::{Chapter, Course, Lesson};
pub use error::{Error, Result};
