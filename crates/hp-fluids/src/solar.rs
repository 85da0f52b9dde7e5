//! Solar irradiation regions. Exposed as a reference listing only.

use crate::error::{FluidError, FluidResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarRegion {
    pub id: &'static str,
    pub name: &'static str,
    /// Equivalent full-sun hours per day (h)
    pub peak_sun_hours: f64,
    /// Mean daily global irradiation (kWh/m²/day)
    pub irradiation_kwh_m2_day: f64,
}

static SOLAR_REGIONS: [SolarRegion; 10] = [
    region("dakar", "Dakar (coastal Senegal)", 5.5, 5.6),
    region("thies", "Thiès", 5.6, 5.7),
    region("saint_louis", "Saint-Louis (northern Senegal)", 6.0, 6.1),
    region("kaolack", "Kaolack (Sine-Saloum)", 5.8, 5.9),
    region("tambacounda", "Tambacounda (eastern Senegal)", 6.1, 6.2),
    region("ziguinchor", "Ziguinchor (Casamance)", 5.3, 5.4),
    region("sahel", "Sahel belt", 6.2, 6.3),
    region("sahara", "Saharan desert", 6.8, 6.9),
    region("mediterranean", "Mediterranean coast", 4.8, 4.9),
    region("equatorial", "Equatorial Africa", 4.5, 4.6),
];

const fn region(
    id: &'static str,
    name: &'static str,
    peak_sun_hours: f64,
    irradiation_kwh_m2_day: f64,
) -> SolarRegion {
    SolarRegion {
        id,
        name,
        peak_sun_hours,
        irradiation_kwh_m2_day,
    }
}

pub fn solar_regions() -> &'static [SolarRegion] {
    &SOLAR_REGIONS
}

pub fn find_region(query: &str) -> FluidResult<&'static SolarRegion> {
    let query = query.trim();
    SOLAR_REGIONS
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(query))
        .ok_or_else(|| FluidError::UnknownRegion {
            id: query.to_string(),
        })
}
