use crate::notation::decoder::{
    aspect_pattern, composite_aspect_pattern, composite_placement_pattern, decode, placement_pattern,
    synastry_pattern, transit_pattern,
};
use crate::notation::tokens::NotationToken;
use regex::Regex;
use std::ops::Range;

lazy_static::lazy_static! {
    static ref CANDIDATE: Regex = {
        let families = [
            synastry_pattern(),
            composite_placement_pattern(),
            composite_aspect_pattern(),
            placement_pattern(),
            transit_pattern(),
            aspect_pattern(),
        ];
        Regex::new(&format!(r"\b(?:{})", families.join("|"))).expect("Invalid notation scan regex")
    };
}

/// A token found inside narrative text
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    /// Byte range of the token in the scanned text
    pub span: Range<usize>,
    pub text: String,
    pub token: NotationToken,
}

/// Find every decodable token in `text`, in order of appearance.
///
/// Candidates glued to further letters or digits, or naming unknown codes,
/// are skipped.
pub fn scan(text: &str) -> Vec<TokenMatch> {
    CANDIDATE
        .find_iter(text)
        .filter(|m| {
            !text[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric())
        })
        .filter_map(|m| {
            decode(m.as_str()).map(|token| TokenMatch {
                span: m.range(),
                text: m.as_str().to_string(),
                token,
            })
        })
        .collect()
}
