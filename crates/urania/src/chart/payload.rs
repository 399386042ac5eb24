use serde::{Deserialize, Deserializer, Serialize};

/// Chart payload exactly as the backend sends it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub bodies: Vec<BodyPayload>,
    #[serde(default, alias = "houses")]
    pub cusps: Vec<CuspPayload>,
    #[serde(default)]
    pub aspects: Vec<AspectPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPayload {
    pub name: String,
    /// `null` is kept as NaN so the loader can skip just this body
    #[serde(deserialize_with = "nullable_degree")]
    pub ecliptic_degree: f64,
    #[serde(default)]
    pub sign: Option<String>,
    /// Missing or `null` when the house is unknown
    #[serde(default)]
    pub house: Option<i64>,
    #[serde(default)]
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuspPayload {
    pub house_number: i64,
    /// `null` when the birth time is unknown
    #[serde(default = "unknown_degree", deserialize_with = "nullable_degree")]
    pub ecliptic_degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectPayload {
    pub body_a: String,
    pub body_b: String,
    pub aspect_type: String,
    pub orb_degrees: f64,
}

fn unknown_degree() -> f64 {
    f64::NAN
}

fn nullable_degree<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
