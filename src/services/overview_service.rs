//! Sintetizador del resumen de flota
//!
//! Genera los KPIs globales y los resúmenes por modelo y por región.
//! Cada muestra es independiente: la suma de vehículos por modelo no tiene
//! por qué coincidir con el total de la flota.

use std::ops::{Range, RangeInclusive};

use crate::models::catalog::{CatalogModel, MODELS, REGIONS};
use crate::models::fleet::{FleetOverview, ModelSummary, RegionalSummary, Trend};
use crate::services::random_source::{pick, RandomSource};

pub const TOTAL_VEHICLES: RangeInclusive<u32> = 45_000..=55_000;
pub const VEHICLES_WITH_ACTIVE_ISSUES: RangeInclusive<u32> = 3_000..=5_000;
pub const HIGH_SEVERITY_CASES: RangeInclusive<u32> = 150..=300;
pub const FORECASTED_DEMAND_7_DAYS: RangeInclusive<u32> = 800..=1_200;

pub const MODEL_VEHICLES: RangeInclusive<u32> = 8_000..=12_000;
pub const MODEL_ACTIVE_ISSUES: RangeInclusive<u32> = 400..=800;
pub const MODEL_FAILURE_RATE: Range<f64> = 0.03..0.09;

pub const REGION_VEHICLES: RangeInclusive<u32> = 10_000..=15_000;
pub const REGION_ACTIVE_ISSUES: RangeInclusive<u32> = 700..=1_200;
pub const REGION_UPCOMING_APPOINTMENTS: RangeInclusive<u32> = 200..=400;

/// Generar el snapshot de KPIs de toda la flota
pub fn synthesize_overview<R: RandomSource + ?Sized>(rng: &mut R) -> FleetOverview {
    let total_vehicles = rng.int_in(TOTAL_VEHICLES);
    let vehicles_with_active_issues = rng.int_in(VEHICLES_WITH_ACTIVE_ISSUES).min(total_vehicles);
    let high_severity_cases = rng.int_in(HIGH_SEVERITY_CASES);
    let forecasted_service_demand_7_days = rng.int_in(FORECASTED_DEMAND_7_DAYS);

    let model_summary = synthesize_model_summaries(rng);
    let regional_summary = REGIONS
        .iter()
        .map(|region| RegionalSummary {
            region: *region,
            vehicles: rng.int_in(REGION_VEHICLES),
            active_issues: rng.int_in(REGION_ACTIVE_ISSUES),
            upcoming_appointments: rng.int_in(REGION_UPCOMING_APPOINTMENTS),
        })
        .collect();

    log::debug!(
        "📊 Overview sintetizado: {} vehículos, {} con incidencias",
        total_vehicles,
        vehicles_with_active_issues
    );

    FleetOverview {
        total_vehicles,
        vehicles_with_active_issues,
        high_severity_cases,
        forecasted_service_demand_7_days,
        model_summary,
        regional_summary,
    }
}

/// Resumen de todos los modelos del catálogo
pub fn synthesize_model_summaries<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<ModelSummary> {
    MODELS.iter().map(|model| synthesize_model_summary(rng, model)).collect()
}

fn synthesize_model_summary<R: RandomSource + ?Sized>(rng: &mut R, model: &CatalogModel) -> ModelSummary {
    let vehicles = rng.int_in(MODEL_VEHICLES);
    let active_issues = rng.int_in(MODEL_ACTIVE_ISSUES);
    let failure_rate = rng.float_in(MODEL_FAILURE_RATE);
    let trend = pick(rng, &Trend::ALL);

    ModelSummary {
        model_id: model.model_id.to_string(),
        model_name: model.model_name.to_string(),
        vehicles,
        active_issues,
        failure_rate,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Region;
    use crate::services::random_source::testing::{MaxSource, MinSource};
    use crate::services::random_source::FixtureRng;

    fn assert_overview_in_bounds(overview: &FleetOverview) {
        assert!(TOTAL_VEHICLES.contains(&overview.total_vehicles));
        assert!(VEHICLES_WITH_ACTIVE_ISSUES.contains(&overview.vehicles_with_active_issues));
        assert!(overview.vehicles_with_active_issues <= overview.total_vehicles);
        assert!(HIGH_SEVERITY_CASES.contains(&overview.high_severity_cases));
        assert!(FORECASTED_DEMAND_7_DAYS.contains(&overview.forecasted_service_demand_7_days));

        assert_eq!(overview.model_summary.len(), 5);
        for (summary, model) in overview.model_summary.iter().zip(MODELS.iter()) {
            assert_eq!(summary.model_id, model.model_id);
            assert_eq!(summary.model_name, model.model_name);
            assert!(MODEL_VEHICLES.contains(&summary.vehicles));
            assert!(MODEL_ACTIVE_ISSUES.contains(&summary.active_issues));
            assert!(MODEL_FAILURE_RATE.contains(&summary.failure_rate));
        }

        assert_eq!(overview.regional_summary.len(), 4);
        for (summary, region) in overview.regional_summary.iter().zip(REGIONS.iter()) {
            assert_eq!(summary.region, *region);
            assert!(REGION_VEHICLES.contains(&summary.vehicles));
            assert!(REGION_ACTIVE_ISSUES.contains(&summary.active_issues));
            assert!(REGION_UPCOMING_APPOINTMENTS.contains(&summary.upcoming_appointments));
        }
    }

    #[test]
    fn test_overview_respects_bounds() {
        let mut rng = FixtureRng::seeded(2024);
        for _ in 0..200 {
            assert_overview_in_bounds(&synthesize_overview(&mut rng));
        }
    }

    #[test]
    fn test_overview_extremes_stay_in_bounds() {
        assert_overview_in_bounds(&synthesize_overview(&mut MinSource));
        assert_overview_in_bounds(&synthesize_overview(&mut MaxSource));
    }

    #[test]
    fn test_overview_golden_with_min_source() {
        let overview = synthesize_overview(&mut MinSource);

        assert_eq!(overview.total_vehicles, 45_000);
        assert_eq!(overview.vehicles_with_active_issues, 3_000);
        assert_eq!(overview.high_severity_cases, 150);
        assert_eq!(overview.forecasted_service_demand_7_days, 800);
        assert!(overview.model_summary.iter().all(|m| m.trend == Trend::Increasing));
        assert_eq!(overview.model_summary[4].model_id, "cybertruck");
        assert_eq!(overview.regional_summary[0].region, Region::North);
        assert_eq!(overview.regional_summary[3].vehicles, 10_000);
    }

    #[test]
    fn test_max_source_picks_last_trend() {
        let summaries = synthesize_model_summaries(&mut MaxSource);
        assert!(summaries.iter().all(|m| m.trend == Trend::Stable));
    }

    #[test]
    fn test_overview_is_reproducible_with_seed() {
        let a = synthesize_overview(&mut FixtureRng::seeded(99));
        let b = synthesize_overview(&mut FixtureRng::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_trend_eventually_appears() {
        let mut rng = FixtureRng::seeded(5);
        let mut seen = Vec::new();
        for _ in 0..50 {
            for summary in synthesize_model_summaries(&mut rng) {
                if !seen.contains(&summary.trend) {
                    seen.push(summary.trend);
                }
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_overview_serializes_with_dashboard_field_names() {
        let json = serde_json::to_value(synthesize_overview(&mut MinSource)).unwrap();
        assert_eq!(json["totalVehicles"], 45_000);
        assert_eq!(json["forecastedServiceDemand7Days"], 800);
        assert_eq!(json["modelSummary"][0]["modelId"], "model-x");
        assert_eq!(json["modelSummary"][0]["trend"], "INCREASING");
        assert_eq!(json["regionalSummary"][1]["region"], "South");
        assert_eq!(json["regionalSummary"][1]["upcomingAppointments"], 200);
    }
}
