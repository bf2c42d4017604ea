//! In-memory course model.
//!
//! A [`Course`] holds everything cartridge generation needs: title, author,
//! description, the front-page body, and an ordered list of chapters, each
//! with ordered lessons. All fields are plain data; nothing is read from
//! disk or network.
//!
//! With the `serde` feature enabled the model derives
//! `Serialize`/`Deserialize` using the camelCase field names
//! (`courseTitle`, `chapterId`, `lessonName`, ...) common in course-export
//! JSON.

/// A course to be packaged as a Common Cartridge.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Course {
    /// External course identifier. Used verbatim as the front-page resource
    /// identifier when present; a random identifier is minted otherwise.
    #[cfg_attr(feature = "serde", serde(rename = "courseId"))]
    pub id: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "courseTitle"))]
    pub title: String,
    pub author: String,
    #[cfg_attr(feature = "serde", serde(rename = "courseDescription"))]
    pub description: String,
    /// Front-page body markup, embedded verbatim.
    pub content: String,
    pub chapters: Vec<Chapter>,
}

/// A chapter, exported as one Canvas module.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Chapter {
    /// Caller-supplied identifier, unique among chapters.
    #[cfg_attr(feature = "serde", serde(rename = "chapterId"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "chapterName"))]
    pub name: String,
    /// Creation timestamp, emitted as the module's `unlock_at` value.
    #[cfg_attr(feature = "serde", serde(rename = "createdOn"))]
    pub created_on: Option<String>,
    pub lessons: Vec<Lesson>,
}

/// A lesson, exported as one wiki page.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Lesson {
    /// Caller-supplied identifier, unique among all lessons in the course.
    #[cfg_attr(feature = "serde", serde(rename = "lessonId"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "lessonName"))]
    pub name: String,
    /// Lesson body markup, embedded verbatim.
    pub content: String,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Append a chapter to the course.
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }
}

impl Chapter {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_created_on(mut self, created_on: impl Into<String>) -> Self {
        self.created_on = Some(created_on.into());
        self
    }

    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.lessons.push(lesson);
        self
    }
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let mut course = Course::new("Sample Course")
            .with_author("John Doe")
            .with_description("A course about samples.")
            .with_content("<p>Hi</p>");
        course.add_chapter(
            Chapter::new("c1", "Intro")
                .with_created_on("2024-01-01")
                .with_lesson(Lesson::new("l1", "Lesson 1", "<p>Body</p>")),
        );

        assert_eq!(course.title, "Sample Course");
        assert_eq!(course.author, "John Doe");
        assert!(course.id.is_none());
        assert_eq!(course.chapters.len(), 1);
        assert_eq!(course.chapters[0].created_on.as_deref(), Some("2024-01-01"));
        assert_eq!(course.chapters[0].lessons[0].name, "Lesson 1");
    }

    #[test]
    fn test_defaults_are_empty() {
        let course = Course::new("Only a Title");
        assert!(course.author.is_empty());
        assert!(course.description.is_empty());
        assert!(course.content.is_empty());
        assert!(course.chapters.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "courseId": "course-9",
            "courseTitle": "Sample Course",
            "author": "John Doe",
            "content": "<p>Hi</p>",
            "chapters": [{
                "chapterId": "c1",
                "chapterName": "Intro",
                "createdOn": "2024-01-01",
                "lessons": [{
                    "lessonId": "l1",
                    "lessonName": "Lesson 1",
                    "content": "<p>Body</p>"
                }]
            }]
        }"#;

        let course: Course = serde_json::from_str(json).expect("valid course JSON");
        assert_eq!(course.id.as_deref(), Some("course-9"));
        assert_eq!(course.title, "Sample Course");
        // Absent fields fall back to defaults
        assert!(course.description.is_empty());
        assert_eq!(course.chapters[0].id, "c1");
        assert_eq!(course.chapters[0].lessons[0].id, "l1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = r#"{"courseTitle": "Bare", "chapters": []}"#;
        let course: Course = serde_json::from_str(json).expect("valid course JSON");
        assert_eq!(course.title, "Bare");
        assert!(course.id.is_none());
        assert!(course.author.is_empty());
    }
}
