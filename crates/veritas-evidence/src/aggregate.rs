use crate::fetch::Evidence;

pub const NO_EVIDENCE_FALLBACK: &str =
    "No relevant evidence found in Wikipedia, news, or fact-checking sources.";

/// Evidence gathered for one claim, one slot per source in fixed order:
/// Wikipedia, NewsAPI, GNews, fact-checker.
#[derive(Debug)]
pub struct EvidenceBundle {
    pub wikipedia: Evidence,
    pub newsapi: Evidence,
    pub gnews: Evidence,
    pub fact_checker: Evidence,
}

impl EvidenceBundle {
    fn sources(&self) -> [&Evidence; 4] {
        [
            &self.wikipedia,
            &self.newsapi,
            &self.gnews,
            &self.fact_checker,
        ]
    }

    /// Join found snippets with newlines in source order. When every source
    /// came back absent, substitute the fixed fallback sentence so the
    /// prompt never embeds an empty evidence block.
    pub fn aggregate(&self) -> String {
        let joined = self
            .sources()
            .into_iter()
            .filter_map(Evidence::text)
            .collect::<Vec<_>>()
            .join("\n");

        let joined = joined.trim();
        if joined.is_empty() {
            NO_EVIDENCE_FALLBACK.to_string()
        } else {
            joined.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(
        wikipedia: Evidence,
        newsapi: Evidence,
        gnews: Evidence,
        fact_checker: Evidence,
    ) -> EvidenceBundle {
        EvidenceBundle {
            wikipedia,
            newsapi,
            gnews,
            fact_checker,
        }
    }

    #[test]
    fn all_absent_uses_fallback() {
        let bundle = bundle(
            Evidence::Absent,
            Evidence::Absent,
            Evidence::Absent,
            Evidence::Absent,
        );
        assert_eq!(bundle.aggregate(), NO_EVIDENCE_FALLBACK);
    }

    #[test]
    fn single_source_stands_alone() {
        let bundle = bundle(
            Evidence::Absent,
            Evidence::Found("Headline: story.".into()),
            Evidence::Absent,
            Evidence::Absent,
        );
        assert_eq!(bundle.aggregate(), "Headline: story.");
    }

    #[test]
    fn found_entries_join_in_source_order() {
        let bundle = bundle(
            Evidence::Found("wiki summary".into()),
            Evidence::Absent,
            Evidence::Found("gnews headline".into()),
            Evidence::Absent,
        );
        assert_eq!(bundle.aggregate(), "wiki summary\ngnews headline");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let bundle = bundle(
            Evidence::Found("  wiki summary \n".into()),
            Evidence::Absent,
            Evidence::Absent,
            Evidence::Absent,
        );
        assert_eq!(bundle.aggregate(), "wiki summary");
    }
}
