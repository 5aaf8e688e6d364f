/// Build the system prompt for the classification exchange, embedding the
/// user's message and the aggregated evidence verbatim.
pub fn compose(message: &str, evidence: &str) -> String {
    format!(
        "You are a professional fake news detection assistant. \
         Analyze the user's statement and evidence from MULTIPLE sources below. \
         Base your conclusion on both external evidence and your internal knowledge.\n\
         Reply in steps:\n\
         Step 1: Restate the main claim.\n\
         Step 2: Compare it with evidence from Wikipedia and news sources.\n\
         Step 3: Classify as FAKE, REAL, or UNCERTAIN, and provide a one-line, evidence-based reason.\n\
         If evidence is insufficient or ambiguous, reply UNCERTAIN.\n\
         User's message: {message}\n\
         Multi-source evidence: {evidence}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_message_and_evidence() {
        let prompt = compose("The moon landing was faked", "No relevant evidence found.");

        assert!(prompt.contains("User's message: The moon landing was faked"));
        assert!(prompt.contains("Multi-source evidence: No relevant evidence found."));
    }

    #[test]
    fn prompt_names_all_three_labels() {
        let prompt = compose("claim", "evidence");
        assert!(prompt.contains("FAKE, REAL, or UNCERTAIN"));
        assert!(prompt.contains("reply UNCERTAIN"));
    }
}
