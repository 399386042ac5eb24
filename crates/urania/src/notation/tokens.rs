use crate::aspects::{AspectType, OrbTier};
use crate::bodies::{PlanetId, ZodiacSign};
use serde::{Deserialize, Serialize};

/// A planet code: abbreviation plus motion marker (`s` direct, `r` retrograde)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetCode {
    pub planet: PlanetId,
    pub retrograde: bool,
}

impl PlanetCode {
    pub fn direct(planet: PlanetId) -> Self {
        Self {
            planet,
            retrograde: false,
        }
    }

    pub fn retrograde(planet: PlanetId) -> Self {
        Self {
            planet,
            retrograde: true,
        }
    }
}

/// Planet with sign and house, as in `SusSc12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub body: PlanetCode,
    pub sign: ZodiacSign,
    /// 0 when unknown
    pub house: u8,
}

impl Position {
    pub fn new(body: PlanetCode, sign: ZodiacSign, house: u8) -> Self {
        Self { body, sign, house }
    }

    pub fn planet(&self) -> PlanetId {
        self.body.planet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Placement,
    Aspect,
    SynastryAspect,
    Transit,
    CompositePlacement,
    CompositeAspect,
}

/// A decoded notation token with its readable rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotationToken {
    Placement {
        position: Position,
        description: String,
    },
    Aspect {
        first: Position,
        second: Position,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        description: String,
    },
    /// `first` belongs to person 1, `second` to person 2
    SynastryAspect {
        first: Position,
        second: Position,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        description: String,
    },
    Transit {
        transiting: PlanetCode,
        transiting_sign: ZodiacSign,
        natal: PlanetCode,
        natal_sign: ZodiacSign,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        description: String,
    },
    CompositePlacement {
        planet: PlanetId,
        house: u8,
        description: String,
    },
    CompositeAspect {
        first: PlanetCode,
        first_house: u8,
        second: PlanetCode,
        second_house: u8,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        description: String,
    },
}

impl NotationToken {
    pub fn placement(position: Position) -> Self {
        NotationToken::Placement {
            description: describe_position(&position),
            position,
        }
    }

    pub fn aspect(first: Position, orb_tier: OrbTier, aspect_type: AspectType, second: Position) -> Self {
        NotationToken::Aspect {
            description: format!(
                "{} {} {}, {} orb",
                describe_position(&first),
                aspect_type,
                describe_position(&second),
                orb_tier
            ),
            first,
            second,
            orb_tier,
            aspect_type,
        }
    }

    pub fn synastry_aspect(first: Position, orb_tier: OrbTier, aspect_type: AspectType, second: Position) -> Self {
        NotationToken::SynastryAspect {
            description: format!(
                "Person 1's {} {} person 2's {}, {} orb",
                describe_position(&first),
                aspect_type,
                describe_position(&second),
                orb_tier
            ),
            first,
            second,
            orb_tier,
            aspect_type,
        }
    }

    pub fn transit(
        transiting: PlanetCode,
        transiting_sign: ZodiacSign,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        natal: PlanetCode,
        natal_sign: ZodiacSign,
    ) -> Self {
        NotationToken::Transit {
            description: format!(
                "Transiting {} in {} {} natal {} in {}, {} orb",
                describe_body(transiting),
                transiting_sign,
                aspect_type,
                describe_body(natal),
                natal_sign,
                orb_tier
            ),
            transiting,
            transiting_sign,
            natal,
            natal_sign,
            orb_tier,
            aspect_type,
        }
    }

    pub fn composite_placement(planet: PlanetId, house: u8) -> Self {
        NotationToken::CompositePlacement {
            description: format!("Composite {} in house {}", planet, house),
            planet,
            house,
        }
    }

    pub fn composite_aspect(
        first: PlanetCode,
        first_house: u8,
        orb_tier: OrbTier,
        aspect_type: AspectType,
        second: PlanetCode,
        second_house: u8,
    ) -> Self {
        NotationToken::CompositeAspect {
            description: format!(
                "Composite {} (house {}) {} composite {} (house {}), {} orb",
                describe_body(first),
                first_house,
                aspect_type,
                describe_body(second),
                second_house,
                orb_tier
            ),
            first,
            first_house,
            second,
            second_house,
            orb_tier,
            aspect_type,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            NotationToken::Placement { .. } => TokenKind::Placement,
            NotationToken::Aspect { .. } => TokenKind::Aspect,
            NotationToken::SynastryAspect { .. } => TokenKind::SynastryAspect,
            NotationToken::Transit { .. } => TokenKind::Transit,
            NotationToken::CompositePlacement { .. } => TokenKind::CompositePlacement,
            NotationToken::CompositeAspect { .. } => TokenKind::CompositeAspect,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            NotationToken::Placement { description, .. }
            | NotationToken::Aspect { description, .. }
            | NotationToken::SynastryAspect { description, .. }
            | NotationToken::Transit { description, .. }
            | NotationToken::CompositePlacement { description, .. }
            | NotationToken::CompositeAspect { description, .. } => description,
        }
    }

    /// Aspect type and orb tier, for the aspect families
    pub fn aspect_info(&self) -> Option<(AspectType, OrbTier)> {
        match self {
            NotationToken::Aspect {
                aspect_type, orb_tier, ..
            }
            | NotationToken::SynastryAspect {
                aspect_type, orb_tier, ..
            }
            | NotationToken::Transit {
                aspect_type, orb_tier, ..
            }
            | NotationToken::CompositeAspect {
                aspect_type, orb_tier, ..
            } => Some((*aspect_type, *orb_tier)),
            _ => None,
        }
    }

    /// Every planet the token names, in token order
    pub fn planets(&self) -> Vec<PlanetId> {
        match self {
            NotationToken::Placement { position, .. } => vec![position.planet()],
            NotationToken::Aspect { first, second, .. } | NotationToken::SynastryAspect { first, second, .. } => {
                vec![first.planet(), second.planet()]
            }
            NotationToken::Transit { transiting, natal, .. } => vec![transiting.planet, natal.planet],
            NotationToken::CompositePlacement { planet, .. } => vec![*planet],
            NotationToken::CompositeAspect { first, second, .. } => vec![first.planet, second.planet],
        }
    }
}

impl std::fmt::Display for NotationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

fn describe_body(code: PlanetCode) -> String {
    if code.retrograde {
        format!("{} (retrograde)", code.planet.display_name())
    } else {
        code.planet.display_name().to_string()
    }
}

fn describe_position(position: &Position) -> String {
    let mut text = format!("{} in {}", describe_body(position.body), position.sign.display_name());
    if position.house != 0 {
        text.push_str(&format!(", house {}", position.house));
    }
    text
}
