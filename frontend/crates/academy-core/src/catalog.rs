//! Static course catalog shown on the public homepage, and course artwork.

use serde::Serialize;

const DEFAULT_COURSE_IMAGE: &str = "/assets/generated/basic-intuition.dim_400x300.png";

const COURSE_IMAGES: &[(&str, &str)] = &[
    ("basic", "/assets/generated/basic-intuition.dim_400x300.png"),
    (
        "advanced",
        "/assets/generated/advanced-intuition.dim_400x300.png",
    ),
    (
        "super",
        "/assets/generated/super-advanced-intuition.dim_400x300.png",
    ),
    (
        "institution",
        "/assets/generated/super-advanced-intuition.dim_400x300.png",
    ),
    (
        "meditation",
        "/assets/generated/meditation-course.dim_800x600.png",
    ),
];

/// Public catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCourse {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
    pub image: &'static str,
}

pub fn catalog() -> Vec<CatalogCourse> {
    vec![
        CatalogCourse {
            id: "basic",
            name: "Basic Midbrain Activation Course",
            description: "Introduction to midbrain activation techniques.",
            highlights: [
                "Foundation concepts",
                "Basic exercises",
                "Beginner-friendly approach",
            ],
            image: course_image("basic"),
        },
        CatalogCourse {
            id: "advanced",
            name: "Advanced Midbrain Activation Course",
            description: "Advanced concepts and practices in midbrain activation.",
            highlights: [
                "Deep techniques",
                "Advanced practices",
                "Enhanced cognitive skills",
            ],
            image: course_image("advanced"),
        },
        CatalogCourse {
            id: "super",
            name: "Super Advanced Intuition Course",
            description: "Comprehensive course on developing intuition through midbrain activation.",
            highlights: [
                "Master-level training",
                "Intuition development",
                "Complete transformation",
            ],
            image: course_image("super"),
        },
    ]
}

/// Image asset for a course id; unknown ids get the basic artwork
pub fn course_image(course_id: &str) -> &'static str {
    COURSE_IMAGES
        .iter()
        .find(|(id, _)| *id == course_id)
        .map(|(_, path)| *path)
        .unwrap_or(DEFAULT_COURSE_IMAGE)
}

/// Short badge label for a selected course
pub fn course_label(course_id: &str) -> &'static str {
    match course_id {
        "basic" => "Basic",
        "advanced" => "Advanced",
        _ => "Super",
    }
}
