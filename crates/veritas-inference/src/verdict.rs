/// Labels a classification reply must carry.
pub const LABELS: [&str; 3] = ["FAKE", "REAL", "UNCERTAIN"];

/// Canned reply substituted when the model answers with none of the labels.
pub const UNCLASSIFIED_REPLY: &str = "UNCERTAIN: Model could not confidently classify \
     based on current evidence. Please try a different claim.";

/// Enforce the label-presence guarantee on a raw model reply: a trimmed
/// reply containing any recognized label passes through unchanged, anything
/// else is replaced wholesale with the canned UNCERTAIN reply.
pub fn normalize(reply: &str) -> String {
    let reply = reply.trim();

    if LABELS.iter().any(|label| reply.contains(label)) {
        reply.to_string()
    } else {
        UNCLASSIFIED_REPLY.to_string()
    }
}
