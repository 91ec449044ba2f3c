//! Static curriculum data for the course landing pages.

/// One accordion section of a course curriculum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurriculumModule {
    pub title: &'static str,
    pub lessons: &'static [&'static str],
}

pub const ENGLISH_CURRICULUM: &[CurriculumModule] = &[
    CurriculumModule {
        title: "Foundations",
        lessons: &["Alphabet and pronunciation", "Everyday greetings", "Present simple"],
    },
    CurriculumModule {
        title: "Conversation",
        lessons: &["Asking questions", "Talking about the past", "Small talk at work"],
    },
    CurriculumModule {
        title: "Writing",
        lessons: &["Emails and messages", "Paragraph structure", "Common mistakes"],
    },
];

pub const VIDEO_EDITING_CURRICULUM: &[CurriculumModule] = &[
    CurriculumModule {
        title: "Getting started",
        lessons: &["Project setup", "Importing footage", "Timeline basics"],
    },
    CurriculumModule {
        title: "Editing",
        lessons: &["Cuts and transitions", "Audio levels", "Titles and text"],
    },
    CurriculumModule {
        title: "Finishing",
        lessons: &["Color correction", "Export settings", "Publishing"],
    },
];
