//! The `learngap questions` command.

use anyhow::Result;

use learngap_core::questionnaire::{questionnaire, Audience, LIKERT_MAX, LIKERT_MIN};

pub fn execute(audience: Option<String>) -> Result<()> {
    let audiences = match audience {
        Some(a) => vec![a.parse::<Audience>()?],
        None => Audience::ALL.to_vec(),
    };

    for audience in audiences {
        let q = questionnaire(audience);
        println!("{} ({} questions)", q.title, q.questions.len());
        if q.questions.iter().all(|question| question.options.is_empty()) {
            println!("Rate each statement from {LIKERT_MIN} (never) to {LIKERT_MAX} (always).");
        }
        for question in &q.questions {
            println!("  {}. {}", question.id, question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("       {i}) {} [{}]", option.text, option.style);
            }
        }
        println!();
    }

    Ok(())
}
