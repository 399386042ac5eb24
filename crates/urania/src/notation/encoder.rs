use crate::notation::tokens::{NotationToken, PlanetCode, Position};

/// Encode a token back into its compact notation. `decode(&encode(t))`
/// yields `t` for every token with houses in 0-12.
pub fn encode(token: &NotationToken) -> String {
    match token {
        NotationToken::Placement { position, .. } => format!("Pp-{}", position_code(position)),
        NotationToken::Aspect {
            first,
            second,
            orb_tier,
            aspect_type,
            ..
        } => format!(
            "A-{}{}{}{}",
            position_code(first),
            orb_tier.abbreviation(),
            aspect_type.abbreviation(),
            position_code(second)
        ),
        NotationToken::SynastryAspect {
            first,
            second,
            orb_tier,
            aspect_type,
            ..
        } => format!(
            "SynA-P1({})-{}{}-P2({})",
            position_code(first),
            orb_tier.abbreviation(),
            aspect_type.abbreviation(),
            position_code(second)
        ),
        NotationToken::Transit {
            transiting,
            transiting_sign,
            natal,
            natal_sign,
            orb_tier,
            aspect_type,
            ..
        } => format!(
            "Tr-{}{}-{}{}-Na{}{}",
            body_code(*transiting),
            transiting_sign.abbreviation(),
            orb_tier.abbreviation(),
            aspect_type.abbreviation(),
            body_code(*natal),
            natal_sign.abbreviation()
        ),
        NotationToken::CompositePlacement { planet, house, .. } => {
            let name: String = planet.display_name().split_whitespace().collect();
            format!("CompP-{}-H{:02}", name, house)
        }
        NotationToken::CompositeAspect {
            first,
            first_house,
            second,
            second_house,
            orb_tier,
            aspect_type,
            ..
        } => format!(
            "CompA-{}{:02}{}{}{}{:02}",
            body_code(*first),
            first_house,
            orb_tier.abbreviation(),
            aspect_type.abbreviation(),
            body_code(*second),
            second_house
        ),
    }
}

fn body_code(code: PlanetCode) -> String {
    let motion = if code.retrograde { 'r' } else { 's' };
    format!("{}{}", code.planet.abbreviation(), motion)
}

fn position_code(position: &Position) -> String {
    format!(
        "{}{}{:02}",
        body_code(position.body),
        position.sign.abbreviation(),
        position.house
    )
}
