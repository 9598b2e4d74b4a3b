//! The `twinpath init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create a starter custom bank
    std::fs::create_dir_all("banks")?;
    let bank_path = std::path::Path::new("banks/custom.toml");
    if bank_path.exists() {
        println!("banks/custom.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, SAMPLE_BANK)?;
        println!("Created banks/custom.toml");
    }

    // Create a sample answers file for non-interactive scoring
    let answers_path = std::path::Path::new("answers-sample.json");
    if answers_path.exists() {
        println!("answers-sample.json already exists, skipping.");
    } else {
        std::fs::write(answers_path, SAMPLE_ANSWERS)?;
        println!("Created answers-sample.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: twinpath run");
    println!("  2. Or edit banks/custom.toml and run: twinpath validate --bank banks/custom.toml");
    println!("  3. Or score without the wizard: twinpath score --answers answers-sample.json");

    Ok(())
}

const SAMPLE_BANK: &str = r#"# A starter twinpath question bank.
#
# Psychometric questions are answered on a 1-5 Likert scale and must use
# the `psych_` id prefix; technical questions use `tech_` and score points
# for an exact correct_answer match.

[bank]
id = "custom"
name = "Custom Readiness Bank"
description = "Edit me"

[sections.psychometric]
title = "Personality & Interest"
description = "How well your interests line up."
icon = "🧠"

[sections.technical]
title = "Technical Knowledge"
description = "What you already know."
icon = "⚙️"

[[questions]]
id = "psych_1"
text = "I enjoy understanding how complex systems work."
kind = "likert"
category = "psychometric"
subcategory = "interest"

[[questions]]
id = "tech_1"
text = "Which data structure keeps insertion order?"
kind = "multiple-choice"
category = "technical"
subcategory = "data_structures"
options = ["Array/List", "Hash Set"]
correct_answer = "Array/List"
points = 10
"#;

const SAMPLE_ANSWERS: &str = r#"{
  "psych_1": 4,
  "psych_2": 5,
  "psych_3": 3,
  "tech_1": "360",
  "tech_2": "Array/List",
  "tech_6": "Intermediate level"
}
"#;
