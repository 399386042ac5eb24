use urania::aspects::{AspectType, OrbTier};
use urania::bodies::{PlanetId, ZodiacSign};
use urania::notation::{decode, encode, scan, NotationToken, PlanetCode, Position, TokenKind};

#[test]
fn test_decode_placement() {
    let token = decode("Pp-SusSc12").expect("placement decodes");
    assert_eq!(token.kind(), TokenKind::Placement);
    match &token {
        NotationToken::Placement { position, description } => {
            assert_eq!(position.planet(), PlanetId::Sun);
            assert!(!position.body.retrograde);
            assert_eq!(position.sign, ZodiacSign::Scorpio);
            assert_eq!(position.house, 12);
            assert_eq!(description, "Sun in Scorpio, house 12");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_decode_natal_aspect() {
    let token = decode("A-MesSa01GaSqJusVi10").expect("aspect decodes");
    match token {
        NotationToken::Aspect {
            first,
            second,
            orb_tier,
            aspect_type,
            ..
        } => {
            assert_eq!(first.planet(), PlanetId::Mercury);
            assert_eq!(first.sign, ZodiacSign::Sagittarius);
            assert_eq!(first.house, 1);
            assert_eq!(second.planet(), PlanetId::Jupiter);
            assert_eq!(second.sign, ZodiacSign::Virgo);
            assert_eq!(second.house, 10);
            assert_eq!(aspect_type, AspectType::Square);
            assert_eq!(orb_tier, OrbTier::Wide);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_decode_synastry_aspect() {
    let token = decode("SynA-P1(VesLe05)-TiTr-P2(MarAr09)").expect("synastry decodes");
    match &token {
        NotationToken::SynastryAspect {
            first,
            second,
            orb_tier,
            aspect_type,
            ..
        } => {
            assert_eq!(first.planet(), PlanetId::Venus);
            assert_eq!(second.planet(), PlanetId::Mars);
            assert!(second.body.retrograde);
            assert_eq!(*orb_tier, OrbTier::Tight);
            assert_eq!(*aspect_type, AspectType::Trine);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(token.description().contains("person 2's Mars (retrograde) in Aries"));
}

#[test]
fn test_decode_transit() {
    let token = decode("Tr-SarPi-MoSq-NaSusGe").expect("transit decodes");
    assert_eq!(token.kind(), TokenKind::Transit);
    assert_eq!(token.planets(), vec![PlanetId::Saturn, PlanetId::Sun]);
    assert_eq!(token.aspect_info(), Some((AspectType::Square, OrbTier::Moderate)));
    assert_eq!(
        token.description(),
        "Transiting Saturn (retrograde) in Pisces square natal Sun in Gemini, moderate orb"
    );
}

#[test]
fn test_decode_composite_placement_full_names() {
    for (text, planet) in [
        ("CompP-Venus-H07", PlanetId::Venus),
        ("CompP-NorthNode-H11", PlanetId::NorthNode),
        ("CompP-North Node-H11", PlanetId::NorthNode),
        ("CompP-PartofFortune-H02", PlanetId::PartOfFortune),
    ] {
        match decode(text) {
            Some(NotationToken::CompositePlacement { planet: decoded, .. }) => assert_eq!(decoded, planet, "{}", text),
            other => panic!("{} decoded to {:?}", text, other),
        }
    }
    assert!(decode("CompP-Vulcan-H07").is_none());
}

#[test]
fn test_decode_composite_aspect() {
    let token = decode("CompA-Sus05ExCoMos05").expect("composite aspect decodes");
    match token {
        NotationToken::CompositeAspect {
            first,
            first_house,
            second,
            second_house,
            orb_tier,
            aspect_type,
            ..
        } => {
            assert_eq!(first, PlanetCode::direct(PlanetId::Sun));
            assert_eq!(second, PlanetCode::direct(PlanetId::Moon));
            assert_eq!((first_house, second_house), (5, 5));
            assert_eq!(orb_tier, OrbTier::Exact);
            assert_eq!(aspect_type, AspectType::Conjunction);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_garbage_returns_none() {
    for text in [
        "garbage-token",
        "",
        "Pp-",
        "Pp-SusSc1",
        "Pp-SusSc12x",
        "A-MesSa01GaSqJusVi",
        "SynA-P1(VesLe05)-TiTr-P2(MasAr09",
        "Tr-SarPi-MoSq-SusGe",
        "CompA-Sus5ExCoMos05",
        "pp-susSc12",
    ] {
        assert!(decode(text).is_none(), "{:?} should not decode", text);
    }
}

#[test]
fn test_decode_trims_whitespace() {
    assert!(decode("  Pp-SusSc12\n").is_some());
}

#[test]
fn test_decode_is_deterministic() {
    assert_eq!(decode("A-MesSa01GaSqJusVi10"), decode("A-MesSa01GaSqJusVi10"));
}

#[test]
fn test_encode_inverts_decode() {
    for text in [
        "Pp-SusSc12",
        "Pp-MorCa00",
        "A-MesSa01GaSqJusVi10",
        "SynA-P1(VesLe05)-TiTr-P2(MarAr09)",
        "Tr-SarPi-MoSq-NaSusGe",
        "CompP-NorthNode-H11",
        "CompA-Sus05ExCoMos05",
    ] {
        let token = decode(text).expect("sample decodes");
        assert_eq!(encode(&token), text);
    }
}

#[test]
fn test_constructed_token_round_trips() {
    let token = NotationToken::aspect(
        Position::new(PlanetCode::retrograde(PlanetId::Pluto), ZodiacSign::Capricorn, 4),
        OrbTier::Tight,
        AspectType::Opposition,
        Position::new(PlanetCode::direct(PlanetId::Moon), ZodiacSign::Cancer, 10),
    );
    let text = encode(&token);
    assert_eq!(text, "A-PlrCp04TiOpMosCa10");
    assert_eq!(decode(&text), Some(token));
}

#[test]
fn test_scan_finds_tokens_in_text() {
    let text = "The Sun in Scorpio (Pp-SusSc12) opposes nothing, but Tr-SarPi-MoSq-NaSusGe does. Broken: Pp-ZzsSc12.";
    let found = scan(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].text, "Pp-SusSc12");
    assert_eq!(found[1].token.kind(), TokenKind::Transit);
    assert_eq!(&text[found[1].span.clone()], "Tr-SarPi-MoSq-NaSusGe");
}
