//! Package assembly: build order, file paths, and cross-reference wiring.
//!
//! A build runs in a fixed order: manifest skeleton, course settings, front
//! page, chapters and lessons, then the manifest itself. The manifest is
//! serialized last so it reflects every resource registered along the way.

use std::path::Path;

use uuid::Uuid;

use crate::course::Course;
use crate::error::Result;
use crate::text::{page_file_name, plain_text};
use crate::xml::{NodeId, XmlDocument};

use super::manifest::{self, LEARNING_APPLICATION_RESOURCE, WEBCONTENT};
use super::pages::render_page;
use super::sink::{DirSink, PackageSink};

const MANIFEST_PATH: &str = "imsmanifest.xml";
const SETTINGS_PATH: &str = "course_settings/course_settings.xml";
const CANVAS_EXPORT_PATH: &str = "course_settings/canvas_export.txt";
const MODULE_META_PATH: &str = "course_settings/module_meta.xml";
const FRONT_PAGE_PATH: &str = "wiki_content/front-page.html";

/// Mint a fresh random resource identifier.
fn new_resource_id() -> String {
    Uuid::new_v4().to_string()
}

/// Configuration for cartridge generation.
#[derive(Debug, Clone)]
pub struct CartridgeConfig {
    /// Identifier attribute on the manifest root.
    pub manifest_identifier: String,
    /// Language reported in the manifest metadata.
    pub language: String,
}

impl Default for CartridgeConfig {
    fn default() -> Self {
        Self {
            manifest_identifier: "com.example.course".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Common Cartridge exporter.
///
/// # Example
///
/// ```
/// use cartouche::{CartridgeExporter, Course, MemorySink};
///
/// let course = Course::new("Sample Course");
/// let mut sink = MemorySink::new();
/// CartridgeExporter::new().export(&course, &mut sink).unwrap();
/// assert!(sink.get("imsmanifest.xml").is_some());
/// ```
pub struct CartridgeExporter {
    config: CartridgeConfig,
}

impl CartridgeExporter {
    /// Create an exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: CartridgeConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: CartridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the package for `course` into `sink`.
    ///
    /// Stages run in a fixed order; the first failure aborts the build and
    /// is returned wrapped with the stage name. Files already handed to the
    /// sink stay written.
    pub fn export<S: PackageSink>(&self, course: &Course, sink: &mut S) -> Result<()> {
        let mut doc = manifest::create_manifest(
            course,
            &self.config.manifest_identifier,
            &self.config.language,
        );
        let organization = manifest::add_organizations(&mut doc);
        let resources = manifest::add_resources(&mut doc);

        let front_page_id = course.id.clone().unwrap_or_else(new_resource_id);

        self.emit_settings(course, &mut doc, resources, &front_page_id, sink)
            .map_err(|e| e.at_stage("course settings"))?;
        self.emit_front_page(course, &front_page_id, sink)
            .map_err(|e| e.at_stage("front page"))?;
        if !course.chapters.is_empty() {
            self.emit_modules(course, &mut doc, organization, resources, sink)
                .map_err(|e| e.at_stage("modules"))?;
        }
        sink.write(MANIFEST_PATH, &doc.to_xml())
            .map_err(|e| e.at_stage("manifest"))?;
        tracing::debug!(path = MANIFEST_PATH, "wrote manifest");

        let lessons: usize = course.chapters.iter().map(|c| c.lessons.len()).sum();
        // settings + marker + front page + manifest, module meta, one page per lesson
        let files = 4 + usize::from(!course.chapters.is_empty()) + lessons;
        tracing::info!(
            chapters = course.chapters.len(),
            lessons,
            files,
            "cartridge package written"
        );
        Ok(())
    }

    /// Emit the course-settings document and the empty export marker, and
    /// register the settings and front-page resources.
    fn emit_settings<S: PackageSink>(
        &self,
        course: &Course,
        doc: &mut XmlDocument,
        resources: NodeId,
        front_page_id: &str,
        sink: &mut S,
    ) -> Result<()> {
        let settings_id = new_resource_id();
        let settings = manifest::create_course_settings(course, &settings_id);

        manifest::add_resource(
            doc,
            resources,
            &settings_id,
            LEARNING_APPLICATION_RESOURCE,
            CANVAS_EXPORT_PATH,
        );
        let front_page =
            manifest::add_resource(doc, resources, front_page_id, WEBCONTENT, FRONT_PAGE_PATH);
        manifest::add_resource_file(doc, front_page, FRONT_PAGE_PATH);

        sink.write(SETTINGS_PATH, &settings.to_xml())?;
        sink.write(CANVAS_EXPORT_PATH, "")?;
        tracing::debug!(path = SETTINGS_PATH, "wrote course settings");
        Ok(())
    }

    fn emit_front_page<S: PackageSink>(
        &self,
        course: &Course,
        identifier: &str,
        sink: &mut S,
    ) -> Result<()> {
        let title = plain_text(&course.title);
        let page = render_page(&title, identifier, true, &course.content);
        sink.write(FRONT_PAGE_PATH, &page)?;
        tracing::debug!(path = FRONT_PAGE_PATH, "wrote front page");
        Ok(())
    }

    /// Walk chapters and lessons in input order, minting one content id per
    /// lesson and keeping the module item, organization item, and resource
    /// entry pointing at the same id.
    fn emit_modules<S: PackageSink>(
        &self,
        course: &Course,
        doc: &mut XmlDocument,
        organization: NodeId,
        resources: NodeId,
        sink: &mut S,
    ) -> Result<()> {
        let mut meta = manifest::create_module_meta();
        let learning_modules = manifest::add_learning_modules(doc, organization);

        for (i, chapter) in course.chapters.iter().enumerate() {
            let module = manifest::add_module(&mut meta, chapter, i);
            let chapter_item = manifest::add_organization_item(
                doc,
                learning_modules,
                &chapter.id,
                None,
                &plain_text(&chapter.name),
            );

            if chapter.lessons.is_empty() {
                continue;
            }
            let items = manifest::add_module_items(&mut meta, module);
            for (j, lesson) in chapter.lessons.iter().enumerate() {
                let content_id = new_resource_id();
                let path = page_file_name(&lesson.name, i, j);
                let title = plain_text(&lesson.name);

                manifest::add_module_item(&mut meta, items, lesson, &content_id, j);

                let page = render_page(&title, &content_id, false, &lesson.content);
                sink.write(&path, &page)?;

                manifest::add_organization_item(
                    doc,
                    chapter_item,
                    &lesson.id,
                    Some(&content_id),
                    &title,
                );

                let resource =
                    manifest::add_resource(doc, resources, &content_id, WEBCONTENT, &path);
                manifest::add_resource_file(doc, resource, &path);
                tracing::debug!(path = %path, "wrote lesson page");
            }
        }

        sink.write(MODULE_META_PATH, &meta.to_xml())?;
        tracing::debug!(path = MODULE_META_PATH, "wrote module metadata");
        Ok(())
    }
}

impl Default for CartridgeExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a [`Course`] as a Common Cartridge package under `path`.
///
/// Creates the directory tree as needed. Equivalent to running a default
/// [`CartridgeExporter`] against a [`DirSink`].
///
/// # Example
///
/// ```no_run
/// use cartouche::{Course, write_cartridge};
///
/// let course = Course::new("Sample Course").with_author("John Doe");
/// write_cartridge(&course, "out/sample-course").unwrap();
/// ```
pub fn write_cartridge<P: AsRef<Path>>(course: &Course, path: P) -> Result<()> {
    let mut sink = DirSink::new(path.as_ref());
    CartridgeExporter::new().export(course, &mut sink)
}
