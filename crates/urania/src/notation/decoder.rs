//! Token decoding: one anchored pattern per family, tried in a fixed order.

use crate::aspects::{AspectType, OrbTier};
use crate::bodies::{PlanetId, ZodiacSign};
use crate::notation::tokens::{NotationToken, PlanetCode, Position};
use regex::{Captures, Regex};

// Building blocks shared by the grammars and the scanner.
// Each capture group count is fixed: BODY = 2, POSITION = 4.
const CODE: &str = r"([A-Z][a-z])";
const BODY: &str = r"([A-Z][a-z])([sr])";
const HOUSE: &str = r"(\d{2})";
const FULL_NAME: &str = r"([A-Za-z][A-Za-z _]*?)";

pub(crate) fn placement_pattern() -> String {
    format!("Pp-{BODY}{CODE}{HOUSE}")
}

pub(crate) fn aspect_pattern() -> String {
    format!("A-{BODY}{CODE}{HOUSE}{CODE}{CODE}{BODY}{CODE}{HOUSE}")
}

pub(crate) fn synastry_pattern() -> String {
    format!(r"SynA-P1\({BODY}{CODE}{HOUSE}\)-{CODE}{CODE}-P2\({BODY}{CODE}{HOUSE}\)")
}

pub(crate) fn transit_pattern() -> String {
    format!("Tr-{BODY}{CODE}-{CODE}{CODE}-Na{BODY}{CODE}")
}

pub(crate) fn composite_placement_pattern() -> String {
    format!("CompP-{FULL_NAME}-H{HOUSE}")
}

pub(crate) fn composite_aspect_pattern() -> String {
    format!("CompA-{BODY}{HOUSE}{CODE}{CODE}{BODY}{HOUSE}")
}

fn anchored(pattern: String) -> Regex {
    Regex::new(&format!("^{}$", pattern)).expect("Invalid notation regex")
}

lazy_static::lazy_static! {
    static ref PLACEMENT: Regex = anchored(placement_pattern());
    static ref ASPECT: Regex = anchored(aspect_pattern());
    static ref SYNASTRY_ASPECT: Regex = anchored(synastry_pattern());
    static ref TRANSIT: Regex = anchored(transit_pattern());
    static ref COMPOSITE_PLACEMENT: Regex = anchored(composite_placement_pattern());
    static ref COMPOSITE_ASPECT: Regex = anchored(composite_aspect_pattern());
}

type Grammar = fn(&Captures) -> Option<NotationToken>;

/// Decode one token. Anything that does not match a known family, or names
/// an unknown planet, sign, aspect or orb tier, yields `None`.
pub fn decode(token: &str) -> Option<NotationToken> {
    let token = token.trim();
    let grammars: [(&Regex, Grammar); 6] = [
        (&PLACEMENT, build_placement),
        (&ASPECT, build_aspect),
        (&SYNASTRY_ASPECT, build_synastry),
        (&TRANSIT, build_transit),
        (&COMPOSITE_PLACEMENT, build_composite_placement),
        (&COMPOSITE_ASPECT, build_composite_aspect),
    ];

    for (pattern, build) in grammars {
        if let Some(caps) = pattern.captures(token) {
            if let Some(decoded) = build(&caps) {
                return Some(decoded);
            }
        }
    }

    log::debug!("undecodable notation token {:?}", token);
    None
}

fn build_placement(caps: &Captures) -> Option<NotationToken> {
    Some(NotationToken::placement(position(caps, 1)?))
}

fn build_aspect(caps: &Captures) -> Option<NotationToken> {
    Some(NotationToken::aspect(
        position(caps, 1)?,
        orb_tier(caps, 5)?,
        aspect_type(caps, 6)?,
        position(caps, 7)?,
    ))
}

fn build_synastry(caps: &Captures) -> Option<NotationToken> {
    Some(NotationToken::synastry_aspect(
        position(caps, 1)?,
        orb_tier(caps, 5)?,
        aspect_type(caps, 6)?,
        position(caps, 7)?,
    ))
}

fn build_transit(caps: &Captures) -> Option<NotationToken> {
    Some(NotationToken::transit(
        body(caps, 1)?,
        sign(caps, 3)?,
        orb_tier(caps, 4)?,
        aspect_type(caps, 5)?,
        body(caps, 6)?,
        sign(caps, 8)?,
    ))
}

fn build_composite_placement(caps: &Captures) -> Option<NotationToken> {
    let planet = PlanetId::from_name(caps.get(1)?.as_str())?;
    Some(NotationToken::composite_placement(planet, house(caps, 2)?))
}

fn build_composite_aspect(caps: &Captures) -> Option<NotationToken> {
    Some(NotationToken::composite_aspect(
        body(caps, 1)?,
        house(caps, 3)?,
        orb_tier(caps, 4)?,
        aspect_type(caps, 5)?,
        body(caps, 6)?,
        house(caps, 8)?,
    ))
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// Planet code at `index`, motion marker at `index + 1`
fn body(caps: &Captures, index: usize) -> Option<PlanetCode> {
    let planet = PlanetId::from_abbreviation(group(caps, index)?)?;
    let retrograde = group(caps, index + 1)? == "r";
    Some(PlanetCode { planet, retrograde })
}

fn sign(caps: &Captures, index: usize) -> Option<ZodiacSign> {
    ZodiacSign::from_abbreviation(group(caps, index)?)
}

/// House number 00-12
fn house(caps: &Captures, index: usize) -> Option<u8> {
    let house: u8 = group(caps, index)?.parse().ok()?;
    (house <= 12).then_some(house)
}

fn orb_tier(caps: &Captures, index: usize) -> Option<OrbTier> {
    OrbTier::from_abbreviation(group(caps, index)?)
}

fn aspect_type(caps: &Captures, index: usize) -> Option<AspectType> {
    AspectType::from_abbreviation(group(caps, index)?)
}

/// Body, sign and house starting at `index` (four groups)
fn position(caps: &Captures, index: usize) -> Option<Position> {
    Some(Position::new(
        body(caps, index)?,
        sign(caps, index + 2)?,
        house(caps, index + 3)?,
    ))
}
