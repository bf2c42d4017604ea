//! Builders for the three cartridge XML documents.
//!
//! The manifest is assembled incrementally: [`create_manifest`] produces
//! the skeleton, then [`add_organizations`] and [`add_resources`] return
//! handles the assembler appends to in course order. The course-settings
//! and module-metadata documents are independent trees sharing the Canvas
//! namespace.

use crate::course::{Chapter, Course, Lesson};
use crate::text::plain_text;
use crate::xml::{NodeId, XmlDocument};

const IMSCP_NS: &str = "http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1";
const LOM_RESOURCE_NS: &str = "http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource";
const LOM_MANIFEST_NS: &str = "http://ltsc.ieee.org/xsd/imsccv1p1/LOM/manifest";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const CANVAS_NS: &str = "http://canvas.instructure.com/xsd/cccv1p0";

const MANIFEST_SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1 http://www.imsglobal.org/profile/cc/ccv1p1/ccv1p1_imscp_v1p2_v1p0.xsd http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource http://www.imsglobal.org/profile/cc/ccv1p1/LOM/ccv1p1_lomresource_v1p0.xsd http://ltsc.ieee.org/xsd/imsccv1p1/LOM/manifest http://www.imsglobal.org/profile/cc/ccv1p1/LOM/ccv1p1_lommanifest_v1p0.xsd";
const CANVAS_SCHEMA_LOCATION: &str =
    "http://canvas.instructure.com/xsd/cccv1p0 http://canvas.instructure.com/xsd/cccv1p0.xsd";

/// Resource type of the Canvas course-settings entry.
pub(crate) const LEARNING_APPLICATION_RESOURCE: &str =
    "associatedcontent/imscc_xmlv1p1/learning-application-resource";
/// Resource type of HTML content entries.
pub(crate) const WEBCONTENT: &str = "webcontent";

/// Build the manifest skeleton: root namespace attributes and the metadata
/// block. Missing text fields render as empty elements, never an error.
pub(crate) fn create_manifest(course: &Course, identifier: &str, language: &str) -> XmlDocument {
    let mut doc = XmlDocument::new("manifest");
    let root = doc.root();
    doc.set_attr(root, "identifier", identifier);
    doc.set_attr(root, "xmlns", IMSCP_NS);
    doc.set_attr(root, "xmlns:lom", LOM_RESOURCE_NS);
    doc.set_attr(root, "xmlns:lomimscc", LOM_MANIFEST_NS);
    doc.set_attr(root, "xmlns:xsi", XSI_NS);
    doc.set_attr(root, "xsi:schemaLocation", MANIFEST_SCHEMA_LOCATION);

    let metadata = doc.append_element(root, "metadata");
    doc.append_text_element(metadata, "schema", "IMS Common Cartridge");
    doc.append_text_element(metadata, "schemaversion", "1.1.0");
    doc.append_text_element(metadata, "title", plain_text(&course.title));
    doc.append_text_element(metadata, "author", course.author.as_str());
    doc.append_text_element(metadata, "language", language);
    doc.append_text_element(metadata, "description", plain_text(&course.description));
    doc.append_text_element(metadata, "version", "1.0");
    doc
}

/// Append the `organizations` subtree: a single organization in
/// rooted-hierarchy structure. Returns the `organization` node that items
/// nest under.
pub(crate) fn add_organizations(doc: &mut XmlDocument) -> NodeId {
    let organizations = doc.append_element(doc.root(), "organizations");
    let organization = doc.append_element(organizations, "organization");
    doc.set_attr(organization, "identifier", "org_1");
    doc.set_attr(organization, "structure", "rooted-hierarchy");
    organization
}

/// Append the empty `resources` subtree; the assembler fills it in.
pub(crate) fn add_resources(doc: &mut XmlDocument) -> NodeId {
    doc.append_element(doc.root(), "resources")
}

/// Append a resource entry. Returns the node so a `file` child can follow.
pub(crate) fn add_resource(
    doc: &mut XmlDocument,
    resources: NodeId,
    identifier: &str,
    resource_type: &str,
    href: &str,
) -> NodeId {
    let resource = doc.append_element(resources, "resource");
    doc.set_attr(resource, "identifier", identifier);
    doc.set_attr(resource, "type", resource_type);
    doc.set_attr(resource, "href", href);
    resource
}

/// Append a `file` child to a resource.
pub(crate) fn add_resource_file(doc: &mut XmlDocument, resource: NodeId, href: &str) {
    let file = doc.append_element(resource, "file");
    doc.set_attr(file, "href", href);
}

/// Append the `LearningModules` container item that chapter items nest
/// under.
pub(crate) fn add_learning_modules(doc: &mut XmlDocument, organization: NodeId) -> NodeId {
    let item = doc.append_element(organization, "item");
    doc.set_attr(item, "identifier", "LearningModules");
    item
}

/// Append an organization item with a title child. Lesson items carry an
/// `identifierref` pointing at their content resource; chapter items do
/// not.
pub(crate) fn add_organization_item(
    doc: &mut XmlDocument,
    parent: NodeId,
    identifier: &str,
    identifierref: Option<&str>,
    title: &str,
) -> NodeId {
    let item = doc.append_element(parent, "item");
    doc.set_attr(item, "identifier", identifier);
    if let Some(identifierref) = identifierref {
        doc.set_attr(item, "identifierref", identifierref);
    }
    doc.append_text_element(item, "title", title);
    item
}

/// Build the Canvas course-settings document.
pub(crate) fn create_course_settings(course: &Course, identifier: &str) -> XmlDocument {
    let mut doc = XmlDocument::new("course");
    let root = doc.root();
    doc.set_attr(root, "identifier", identifier);
    doc.set_attr(root, "xmlns", CANVAS_NS);
    doc.set_attr(root, "xmlns:lom", LOM_RESOURCE_NS);
    doc.set_attr(root, "xmlns:xsi", XSI_NS);
    doc.set_attr(root, "xsi:schemaLocation", CANVAS_SCHEMA_LOCATION);

    doc.append_text_element(root, "title", plain_text(&course.title));
    doc.append_text_element(root, "default_wiki_editing_roles", "teachers");
    doc.append_text_element(root, "allow_student_organized_groups", "false");
    doc.append_text_element(root, "default_view", "wiki");
    doc.append_text_element(root, "open_enrollment", "false");
    doc.append_text_element(root, "self_enrollment", "false");
    doc
}

/// Build the empty module-metadata document.
pub(crate) fn create_module_meta() -> XmlDocument {
    let mut doc = XmlDocument::new("modules");
    let root = doc.root();
    doc.set_attr(root, "xmlns", CANVAS_NS);
    doc.set_attr(root, "xmlns:xsi", XSI_NS);
    doc.set_attr(root, "xsi:schemaLocation", CANVAS_SCHEMA_LOCATION);
    doc
}

/// Append a module entry for a chapter at the given zero-based position.
pub(crate) fn add_module(doc: &mut XmlDocument, chapter: &Chapter, position: usize) -> NodeId {
    let module = doc.append_element(doc.root(), "module");
    doc.set_attr(module, "identifier", chapter.id.as_str());
    doc.append_text_element(module, "title", plain_text(&chapter.name));
    doc.append_text_element(module, "workflow_state", "active");
    doc.append_text_element(module, "position", position.to_string());
    doc.append_text_element(
        module,
        "unlock_at",
        chapter.created_on.as_deref().unwrap_or(""),
    );
    doc.append_text_element(module, "require_sequential_progress", "false");
    doc.append_text_element(module, "locked", "false");
    module
}

/// Append the `items` container under a module.
pub(crate) fn add_module_items(doc: &mut XmlDocument, module: NodeId) -> NodeId {
    doc.append_element(module, "items")
}

/// Append a lesson item to a module's `items` container.
pub(crate) fn add_module_item(
    doc: &mut XmlDocument,
    items: NodeId,
    lesson: &Lesson,
    identifierref: &str,
    position: usize,
) {
    let item = doc.append_element(items, "item");
    doc.set_attr(item, "identifier", lesson.id.as_str());
    doc.append_text_element(item, "content_type", "WikiPage");
    doc.append_text_element(item, "workflow_state", "active");
    doc.append_text_element(item, "title", plain_text(&lesson.name));
    doc.append_text_element(item, "identifierref", identifierref);
    doc.append_text_element(item, "position", position.to_string());
    doc.append_element(item, "new_tab");
    doc.append_text_element(item, "indent", "0");
}
