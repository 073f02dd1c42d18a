//! Aggregate shapes and the pure parts of their computation.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::UNSPECIFIED_VENTURE_TYPE;

/// Number of ventures in one region.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegionCount {
    #[schema(example = "Andina")]
    pub nombre_region: String,
    #[schema(example = 12)]
    pub cantidad: i64,
}

/// Share of all ventures located in one region, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegionShare {
    #[schema(example = "Andina")]
    pub nombre_region: String,
    #[schema(example = 33.33)]
    pub porcentaje: f64,
}

/// Ventures reported for one country, summed over its history rows.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CountryTotal {
    #[serde(rename = "nombrePais")]
    #[schema(example = "Colombia")]
    pub country: String,
    #[serde(rename = "cantidadEmprendimientos")]
    #[schema(example = 20.0)]
    pub ventures: f64,
}

/// Energy produced and consumed by one venture.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnergySummary {
    pub idemprendimiento: i32,
    pub nombre_emprendimiento: String,
    pub total_produccion: f64,
    pub total_consumo: f64,
    pub promedio_produccion: f64,
    pub promedio_consumo: f64,
}

/// Chart data for ventures grouped by type.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TypeChart {
    pub labels: Vec<String>,
    pub datos: Vec<i64>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert per-region counts into percentages of `total`.
pub fn region_shares(counts: Vec<RegionCount>, total: u64) -> Vec<RegionShare> {
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|c| RegionShare {
            nombre_region: c.nombre_region,
            porcentaje: round2(c.cantidad as f64 * 100.0 / total as f64),
        })
        .collect()
}

/// Sum the numeric-string amounts per country and keep the `limit` largest.
///
/// Amounts that do not parse count as zero.
pub fn rank_countries<I>(rows: I, limit: usize) -> Vec<CountryTotal>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut totals: HashMap<String, f64> = HashMap::new();
    for (country, amount) in rows {
        let value = match amount.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                tracing::warn!(%country, %amount, "Unparsable venture amount counted as 0");
                0.0
            }
        };
        *totals.entry(country).or_insert(0.0) += value;
    }

    let mut ranked: Vec<CountryTotal> = totals
        .into_iter()
        .map(|(country, ventures)| CountryTotal { country, ventures })
        .collect();
    ranked.sort_by(|a, b| {
        b.ventures
            .total_cmp(&a.ventures)
            .then_with(|| a.country.cmp(&b.country))
    });
    ranked.truncate(limit);
    ranked
}

/// Build the dashboard chart; blank types are grouped as unspecified.
pub fn type_chart(counts: Vec<(Option<String>, i64)>) -> TypeChart {
    let mut merged: Vec<(String, i64)> = Vec::new();
    for (kind, count) in counts {
        let label = kind
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_VENTURE_TYPE.to_string());
        match merged.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += count,
            None => merged.push((label, count)),
        }
    }

    let total = merged.iter().map(|(_, n)| n).sum();
    let (labels, datos) = merged.into_iter().unzip();
    TypeChart {
        labels,
        datos,
        total,
        mensaje: None,
    }
}

/// Placeholder chart shown while no venture exists yet.
pub fn sample_type_chart() -> TypeChart {
    let labels = ["Tecnología", "Agricultura", "Servicios", "Manufactura", "Otro"];
    let datos = vec![3, 5, 2, 1, 4];
    TypeChart {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        total: datos.iter().sum(),
        datos,
        mensaje: Some("Datos de ejemplo: aún no hay emprendimientos registrados".to_string()),
    }
}
