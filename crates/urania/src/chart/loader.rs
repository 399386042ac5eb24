use crate::aspects::{AspectEdge, AspectType};
use crate::bodies::{CelestialBody, HouseCusp, PlanetId, ZodiacSign};
use crate::chart::data::ChartData;
use crate::chart::payload::{AspectPayload, BodyPayload, ChartPayload, CuspPayload};
use thiserror::Error;

/// Errors that can occur when loading a chart payload
#[derive(Error, Debug, PartialEq)]
pub enum ChartDataError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Load chart data from a backend JSON payload.
///
/// Entries naming unknown bodies, signs or aspect types are skipped with a
/// warning; structural problems are errors.
pub fn load_chart_from_json(json: &str) -> Result<ChartData, ChartDataError> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;

    let Some(obj) = parsed.as_object() else {
        return Err(ChartDataError::ValidationError(
            "chart payload must be an object".to_string(),
        ));
    };
    match obj.get("bodies") {
        None => return Err(ChartDataError::MissingField("bodies".to_string())),
        Some(bodies) if !bodies.is_array() => {
            return Err(ChartDataError::InvalidFieldValue(
                "bodies must be an array".to_string(),
            ))
        }
        Some(_) => {}
    }

    let payload: ChartPayload =
        serde_json::from_value(parsed).map_err(|e| ChartDataError::ValidationError(e.to_string()))?;
    chart_from_payload(&payload)
}

/// Convert an already deserialized payload
pub fn chart_from_payload(payload: &ChartPayload) -> Result<ChartData, ChartDataError> {
    let mut bodies = Vec::with_capacity(payload.bodies.len());
    for (index, raw) in payload.bodies.iter().enumerate() {
        if let Some(body) = convert_body(raw, index)? {
            bodies.push(body);
        }
    }

    let cusps = payload
        .cusps
        .iter()
        .enumerate()
        .map(|(index, raw)| convert_cusp(raw, index))
        .collect::<Result<Vec<_>, _>>()?;

    let aspects = payload.aspects.iter().filter_map(convert_aspect).collect();

    Ok(ChartData::new(bodies, cusps, aspects))
}

fn convert_body(raw: &BodyPayload, index: usize) -> Result<Option<CelestialBody>, ChartDataError> {
    let house = raw.house.unwrap_or(0);
    if !(0..=12).contains(&house) {
        return Err(ChartDataError::InvalidFieldValue(format!(
            "bodies[{}].house must be 0-12, got {}",
            index, house
        )));
    }

    let Some(name) = PlanetId::from_name(&raw.name) else {
        log::warn!("skipping unknown body '{}'", raw.name);
        return Ok(None);
    };

    if !raw.ecliptic_degree.is_finite() {
        log::debug!("skipping {} with non-finite degree", name);
        return Ok(None);
    }

    let sign = match raw.sign.as_deref() {
        Some(text) => match ZodiacSign::from_name(text) {
            Some(sign) => sign,
            None => {
                log::warn!("skipping {} with unknown sign '{}'", name, text);
                return Ok(None);
            }
        },
        None => ZodiacSign::from_degree(raw.ecliptic_degree),
    };

    Ok(Some(CelestialBody::new(
        name,
        raw.ecliptic_degree,
        sign,
        house as u8,
        raw.retrograde,
    )))
}

fn convert_cusp(raw: &CuspPayload, index: usize) -> Result<HouseCusp, ChartDataError> {
    if !(1..=12).contains(&raw.house_number) {
        return Err(ChartDataError::InvalidFieldValue(format!(
            "cusps[{}].houseNumber must be 1-12, got {}",
            index, raw.house_number
        )));
    }
    Ok(HouseCusp::new(raw.house_number as u8, raw.ecliptic_degree))
}

fn convert_aspect(raw: &AspectPayload) -> Option<AspectEdge> {
    let body_a = PlanetId::from_name(&raw.body_a);
    let body_b = PlanetId::from_name(&raw.body_b);
    let aspect_type = AspectType::from_name(&raw.aspect_type);
    match (body_a, body_b, aspect_type) {
        (Some(a), Some(b), Some(aspect_type)) => Some(AspectEdge::new(a, b, aspect_type, raw.orb_degrees)),
        _ => {
            log::warn!(
                "skipping aspect {} {} {}: unknown name",
                raw.body_a,
                raw.aspect_type,
                raw.body_b
            );
            None
        }
    }
}
