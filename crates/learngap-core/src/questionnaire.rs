//! The fixed question banks shown to teachers, parents, and students.
//!
//! Teacher and parent forms are Likert scales whose answers become the
//! `q1..qN` response maps the scorer reads. The student quiz is multiple
//! choice, one option per learning style.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;
use crate::model::LearningStyle;

/// Lowest and highest valid Likert rating.
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Who fills out a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Teacher,
    Parent,
    Student,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Teacher, Audience::Parent, Audience::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Teacher => "teacher",
            Audience::Parent => "parent",
            Audience::Student => "student",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownAudience(s.to_string()))
    }
}

/// One multiple-choice option in the student quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub text: &'static str,
    pub style: LearningStyle,
}

/// A single question, either Likert or multiple choice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: &'static str,
    /// Empty for Likert questions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuizOption>,
}

/// A full questionnaire for one audience.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub audience: Audience,
    pub title: &'static str,
    /// `"likert"` or `"multiple-choice"`.
    pub kind: &'static str,
    pub questions: Vec<Question>,
}

const TEACHER_STATEMENTS: [&str; 12] = [
    "The student prefers learning with diagrams, charts, or images.",
    "The student remembers information better when hearing explanations.",
    "The student takes detailed written notes during lessons.",
    "The student performs better during hands-on activities.",
    "The student asks for verbal clarification often.",
    "The student reads instructions carefully before starting tasks.",
    "The student prefers moving around or touching objects while learning.",
    "The student struggles with text-heavy materials.",
    "The student works well independently without visuals.",
    "The student engages more when videos or illustrations are used.",
    "The student loses focus when activities are not interactive.",
    "The student responds well to step-by-step written instructions.",
];

const PARENT_STATEMENTS: [&str; 8] = [
    "My child prefers watching videos or looking at pictures when learning.",
    "My child likes to have things read aloud to them.",
    "My child enjoys hands-on activities and crafts.",
    "My child often fidgets or needs to move while studying.",
    "My child remembers things better when they write them down.",
    "My child gets distracted easily during homework.",
    "My child prefers working alone rather than in groups.",
    "My child asks many questions to understand new topics.",
];

/// Quiz prompts with options in visual, auditory, reading, kinesthetic order.
const STUDENT_QUIZ: [(&str, [&str; 4]); 10] = [
    (
        "How do you like to learn new things?",
        ["Watching videos", "Listening to explanations", "Reading books", "Doing activities"],
    ),
    (
        "When you need to remember something, you...",
        ["Draw a picture of it", "Say it out loud", "Write it down", "Act it out"],
    ),
    (
        "What's your favorite way to do a project?",
        ["Make a poster", "Give a talk", "Write a report", "Build something"],
    ),
    (
        "In class, you learn best when...",
        ["Teacher shows pictures", "Teacher explains things", "You read the textbook", "You do experiments"],
    ),
    (
        "Which game do you enjoy most?",
        ["Puzzle games", "Music games", "Word games", "Sports games"],
    ),
    (
        "When studying for a test, you...",
        ["Look at diagrams", "Listen to recordings", "Re-read your notes", "Walk around while studying"],
    ),
    (
        "What helps you focus better?",
        ["Colorful materials", "Background music", "Quiet reading", "Moving around"],
    ),
    (
        "How do you like to solve problems?",
        ["Draw it out", "Talk it through", "Make a list", "Try different things"],
    ),
    (
        "What makes a story fun?",
        ["Lots of pictures", "Someone reading it", "Reading it myself", "Acting out the story"],
    ),
    (
        "When you're bored, you like to...",
        ["Draw or color", "Listen to music", "Read a book", "Play outside"],
    ),
];

fn question_id(index: usize) -> String {
    format!("q{}", index + 1)
}

fn likert(statements: &[&'static str]) -> Vec<Question> {
    statements
        .iter()
        .enumerate()
        .map(|(i, &prompt)| Question {
            id: question_id(i),
            prompt,
            options: Vec::new(),
        })
        .collect()
}

/// The questionnaire for `audience`.
pub fn questionnaire(audience: Audience) -> Questionnaire {
    match audience {
        Audience::Teacher => Questionnaire {
            audience,
            title: "Teacher Observation Questionnaire",
            kind: "likert",
            questions: likert(&TEACHER_STATEMENTS),
        },
        Audience::Parent => Questionnaire {
            audience,
            title: "Parent Questionnaire",
            kind: "likert",
            questions: likert(&PARENT_STATEMENTS),
        },
        Audience::Student => Questionnaire {
            audience,
            title: "Learning Style Quiz",
            kind: "multiple-choice",
            questions: STUDENT_QUIZ
                .iter()
                .enumerate()
                .map(|(i, &(prompt, options))| Question {
                    id: question_id(i),
                    prompt,
                    options: options
                        .iter()
                        .zip(LearningStyle::ALL)
                        .map(|(&text, style)| QuizOption { text, style })
                        .collect(),
                })
                .collect(),
        },
    }
}

/// Turn positional Likert answers into a `q1..qN` response map.
///
/// A `0` means unanswered and is skipped, as is anything outside 1..=5.
pub fn likert_responses(answers: &[u8]) -> BTreeMap<String, u8> {
    answers
        .iter()
        .enumerate()
        .filter(|(_, v)| (LIKERT_MIN..=LIKERT_MAX).contains(*v))
        .map(|(i, v)| (question_id(i), *v))
        .collect()
}

/// Turn positional quiz choices (option indexes) into style labels.
///
/// Choices past the end of the quiz or the option list are skipped.
pub fn quiz_answers(choices: &[usize]) -> Vec<String> {
    choices
        .iter()
        .zip(STUDENT_QUIZ.iter())
        .filter_map(|(&choice, _)| LearningStyle::ALL.get(choice).copied())
        .map(|style| style.as_str().to_string())
        .collect()
}
