//! The built-in Digital Twin readiness question bank.
//!
//! Ten psychometric Likert items followed by ten technical multiple-choice
//! items. The same bank ships as `banks/digital-twin.toml`; a parser test
//! asserts the two stay in sync.

use std::collections::HashMap;

use crate::model::{Category, Question, QuestionBank, QuestionKind, SectionInfo};

fn likert(id: &str, text: &str, subcategory: &str) -> Question {
    Question {
        id: id.into(),
        text: text.into(),
        kind: QuestionKind::Likert,
        category: Category::Psychometric,
        subcategory: Some(subcategory.into()),
        options: vec![],
        correct_answer: None,
        points: None,
    }
}

fn choice(
    id: &str,
    text: &str,
    subcategory: &str,
    options: &[&str],
    correct_answer: &str,
    points: u32,
) -> Question {
    Question {
        id: id.into(),
        text: text.into(),
        kind: QuestionKind::MultipleChoice,
        category: Category::Technical,
        subcategory: Some(subcategory.into()),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer: Some(correct_answer.into()),
        points: Some(points),
    }
}

/// Build the built-in bank. Cheap enough to construct on demand.
pub fn builtin() -> QuestionBank {
    let questions = vec![
        likert(
            "psych_1",
            "I enjoy analyzing real-world systems and understanding how they work.",
            "interest",
        ),
        likert(
            "psych_2",
            "I continue pursuing goals even after multiple failures.",
            "grit",
        ),
        likert(
            "psych_3",
            "I prefer systems that follow clear rules over open-ended exploration.",
            "cognitive_style",
        ),
        likert(
            "psych_4",
            "The ability to model the real world digitally excites me.",
            "motivation",
        ),
        likert(
            "psych_5",
            "I follow emerging tech trends like IoT, smart factories, and Industry 4.0.",
            "interest",
        ),
        likert(
            "psych_6",
            "I learn from mistakes quickly and revise my approach.",
            "growth_mindset",
        ),
        likert(
            "psych_7",
            "I enjoy working with both hardware and software components.",
            "interest",
        ),
        likert(
            "psych_8",
            "I can stay focused on complex technical problems for hours.",
            "conscientiousness",
        ),
        likert(
            "psych_9",
            "I am curious about how virtual models can predict real-world behavior.",
            "openness",
        ),
        likert(
            "psych_10",
            "I believe technology should solve practical, real-world problems.",
            "motivation",
        ),
        choice(
            "tech_1",
            "If a sensor reads temperature every 10 seconds and you need hourly \
             averages, how many data points would you average?",
            "numerical_reasoning",
            &["6", "60", "360", "3600"],
            "360",
            10,
        ),
        choice(
            "tech_2",
            "Which data structure is most suitable for storing time-series sensor data?",
            "data_structures",
            &["Array/List", "Hash Table", "Binary Tree", "Graph"],
            "Array/List",
            10,
        ),
        choice(
            "tech_3",
            "What is the primary purpose of a digital twin?",
            "domain_knowledge",
            &[
                "To replace physical systems entirely",
                "To create virtual replicas for simulation and optimization",
                "To store backup data",
                "To reduce manufacturing costs",
            ],
            "To create virtual replicas for simulation and optimization",
            15,
        ),
        choice(
            "tech_4",
            "In a predictive maintenance system, what would indicate equipment failure?",
            "domain_knowledge",
            &[
                "Normal operating temperatures",
                "Unusual vibration patterns or temperature spikes",
                "Regular maintenance schedules",
                "Low energy consumption",
            ],
            "Unusual vibration patterns or temperature spikes",
            15,
        ),
        choice(
            "tech_5",
            "Which programming concept is essential for processing real-time IoT data?",
            "programming",
            &[
                "Loops and conditionals",
                "Object-oriented programming",
                "Event-driven programming",
                "Recursive functions",
            ],
            "Event-driven programming",
            10,
        ),
        choice(
            "tech_6",
            "How confident are you with Python programming?",
            "self_assessment",
            &[
                "Complete beginner",
                "Basic syntax knowledge",
                "Can write simple programs",
                "Intermediate level",
                "Advanced level",
            ],
            "Can write simple programs",
            0,
        ),
        choice(
            "tech_7",
            "What does IoT stand for and what is its main purpose?",
            "domain_knowledge",
            &[
                "Internet of Things - connecting physical devices to the internet",
                "Integration of Technology - combining different tech systems",
                "Information Technology - managing computer systems",
                "Interactive Objects Technology - creating smart interfaces",
            ],
            "Internet of Things - connecting physical devices to the internet",
            10,
        ),
        choice(
            "tech_8",
            "Which tool is commonly used for 3D modeling and simulation?",
            "tools",
            &[
                "Microsoft Excel",
                "ANSYS or Siemens NX",
                "Adobe Photoshop",
                "Google Sheets",
            ],
            "ANSYS or Siemens NX",
            10,
        ),
        choice(
            "tech_9",
            "Rate your experience with data analysis and interpretation.",
            "self_assessment",
            &[
                "No experience",
                "Basic charts and graphs",
                "Statistical analysis",
                "Advanced analytics",
                "Expert level",
            ],
            "Statistical analysis",
            0,
        ),
        choice(
            "tech_10",
            "What is the main benefit of real-time monitoring in industrial systems?",
            "domain_knowledge",
            &[
                "Reduced equipment costs",
                "Immediate detection of issues and optimization opportunities",
                "Simplified maintenance schedules",
                "Lower energy bills",
            ],
            "Immediate detection of issues and optimization opportunities",
            15,
        ),
    ];

    let mut sections = HashMap::new();
    sections.insert(
        Category::Psychometric,
        SectionInfo {
            title: "Personality & Interest Assessment".into(),
            description: "Evaluating your personality traits, interests, and \
                          motivation for Digital Twin engineering."
                .into(),
            icon: "🧠".into(),
        },
    );
    sections.insert(
        Category::Technical,
        SectionInfo {
            title: "Technical Knowledge & Aptitude".into(),
            description: "Testing your foundational knowledge in programming, data \
                          analysis, and Digital Twin concepts."
                .into(),
            icon: "⚙️".into(),
        },
    );

    QuestionBank {
        id: "digital-twin".into(),
        name: "Digital Twin Engineer Readiness".into(),
        description: "Should I become a Digital Twin Engineer?".into(),
        questions,
        sections,
    }
}
