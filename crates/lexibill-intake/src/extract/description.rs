use super::{ExtractContext, FieldExtractor, NoMatch};

/// Takes the whole utterance, trimmed, as the work description.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionExtractor;

impl FieldExtractor for DescriptionExtractor {
    type Field = String;

    fn try_extract(&self, text: &str, _ctx: &ExtractContext) -> Result<String, NoMatch> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NoMatch::Empty);
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ctx() -> ExtractContext {
        ExtractContext {
            today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        }
    }

    #[test]
    fn test_description_is_trimmed() {
        let desc = DescriptionExtractor
            .try_extract("  Drafted the NDA for the vendor.  ", &ctx())
            .unwrap();
        assert_eq!(desc, "Drafted the NDA for the vendor.");
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(DescriptionExtractor.try_extract("   ", &ctx()), Err(NoMatch::Empty));
    }
}
