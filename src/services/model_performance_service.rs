//! Sintetizador del informe de rendimiento por modelo

use std::ops::{Range, RangeInclusive};

use crate::config::LookupPolicy;
use crate::models::catalog::{self, CatalogModel, COMPONENTS, MODELS, REGIONS};
use crate::models::fleet::ModelSummary;
use crate::models::model_performance::{
    ComponentBreakdown, ModelPerformance, RegionalBreakdown, SeverityDistribution,
};
use crate::services::overview_service::{MODEL_ACTIVE_ISSUES, MODEL_FAILURE_RATE, MODEL_VEHICLES};
use crate::services::random_source::RandomSource;
use crate::utils::errors::{not_found_error, AppResult};

pub const HIGH_SEVERITY_COUNT: RangeInclusive<u32> = 30..=80;

/// Número de componentes del catálogo incluidos en el desglose
pub const BREAKDOWN_COMPONENTS: usize = 5;
pub const COMPONENT_INCIDENTS: RangeInclusive<u32> = 50..=200;
pub const COMPONENT_FAILURE_PERCENTAGE: Range<f64> = 5.0..25.0;
pub const SEVERITY_HIGH_SHARE: RangeInclusive<u32> = 10..=30;
pub const SEVERITY_MEDIUM_SHARE: RangeInclusive<u32> = 30..=50;

pub const REGION_VEHICLES: RangeInclusive<u32> = 1_500..=3_000;
pub const REGION_ISSUES: RangeInclusive<u32> = 80..=200;
pub const REGION_HIGH_SEVERITY: RangeInclusive<u32> = 5..=20;

/// Resolver un id de modelo según la política de búsqueda
pub fn resolve_model(model_id: &str, policy: LookupPolicy) -> AppResult<&'static CatalogModel> {
    match (catalog::find_model(model_id), policy) {
        (Some(model), _) => Ok(model),
        (None, LookupPolicy::FallbackToFirst) => {
            log::debug!("⚠️ Modelo '{}' desconocido, usando '{}'", model_id, MODELS[0].model_id);
            Ok(&MODELS[0])
        }
        (None, LookupPolicy::Strict) => Err(not_found_error("Model", model_id)),
    }
}

/// Generar el informe de un modelo por id
pub fn model_performance<R: RandomSource + ?Sized>(
    rng: &mut R,
    model_id: &str,
    policy: LookupPolicy,
) -> AppResult<ModelPerformance> {
    let model = resolve_model(model_id, policy)?;
    Ok(synthesize_model_performance(rng, model))
}

/// Generar el informe de un modelo ya resuelto
pub fn synthesize_model_performance<R: RandomSource + ?Sized>(
    rng: &mut R,
    model: &CatalogModel,
) -> ModelPerformance {
    let total_vehicles = rng.int_in(MODEL_VEHICLES);
    let active_issues = rng.int_in(MODEL_ACTIVE_ISSUES);
    let failure_rate = rng.float_in(MODEL_FAILURE_RATE);
    build_report(rng, model.model_id, model.model_name, total_vehicles, active_issues, failure_rate)
}

/// Generar el informe reutilizando los totales ya muestreados en el resumen
pub fn synthesize_model_performance_for<R: RandomSource + ?Sized>(
    rng: &mut R,
    summary: &ModelSummary,
) -> ModelPerformance {
    build_report(
        rng,
        &summary.model_id,
        &summary.model_name,
        summary.vehicles,
        summary.active_issues,
        summary.failure_rate,
    )
}

fn build_report<R: RandomSource + ?Sized>(
    rng: &mut R,
    model_id: &str,
    model_name: &str,
    total_vehicles: u32,
    active_issues: u32,
    failure_rate: f64,
) -> ModelPerformance {
    let high_severity_count = rng.int_in(HIGH_SEVERITY_COUNT);

    let component_breakdown = COMPONENTS
        .iter()
        .take(BREAKDOWN_COMPONENTS)
        .map(|component| {
            let incidents = rng.int_in(COMPONENT_INCIDENTS);
            let failure_percentage = rng.float_in(COMPONENT_FAILURE_PERCENTAGE);
            let high = rng.int_in(SEVERITY_HIGH_SHARE);
            let medium = rng.int_in(SEVERITY_MEDIUM_SHARE);

            ComponentBreakdown {
                component: component.to_string(),
                incidents,
                failure_percentage,
                severity_distribution: SeverityDistribution::from_shares(high, medium),
            }
        })
        .collect();

    let regional_breakdown = REGIONS
        .iter()
        .map(|region| RegionalBreakdown {
            region: *region,
            vehicles: rng.int_in(REGION_VEHICLES),
            issues: rng.int_in(REGION_ISSUES),
            high_severity: rng.int_in(REGION_HIGH_SEVERITY),
        })
        .collect();

    ModelPerformance {
        model_id: model_id.to_string(),
        model_name: model_name.to_string(),
        total_vehicles,
        active_issues,
        failure_rate,
        high_severity_count,
        component_breakdown,
        regional_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random_source::testing::{MaxSource, MinSource};
    use crate::services::random_source::FixtureRng;
    use crate::utils::errors::AppError;

    #[test]
    fn test_known_model_keeps_its_id() {
        let mut rng = FixtureRng::seeded(1);
        for model in MODELS.iter() {
            let report = model_performance(&mut rng, model.model_id, LookupPolicy::Strict).unwrap();
            assert_eq!(report.model_id, model.model_id);
            assert_eq!(report.model_name, model.model_name);
        }
    }

    #[test]
    fn test_unknown_model_is_not_found_when_strict() {
        let result = model_performance(&mut MinSource, "unknown-id", LookupPolicy::Strict);
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.contains("unknown-id")));
    }

    #[test]
    fn test_unknown_model_falls_back_to_first_entry() {
        let fallback =
            model_performance(&mut FixtureRng::seeded(8), "unknown-id", LookupPolicy::FallbackToFirst).unwrap();
        let first =
            model_performance(&mut FixtureRng::seeded(8), "model-x", LookupPolicy::FallbackToFirst).unwrap();
        assert_eq!(fallback, first);
        assert_eq!(fallback.model_id, "model-x");
    }

    #[test]
    fn test_breakdowns_have_catalog_shape_and_bounds() {
        let mut rng = FixtureRng::seeded(77);
        for _ in 0..100 {
            let report = synthesize_model_performance(&mut rng, &MODELS[2]);

            assert!(HIGH_SEVERITY_COUNT.contains(&report.high_severity_count));
            assert_eq!(report.component_breakdown.len(), BREAKDOWN_COMPONENTS);
            for (entry, name) in report.component_breakdown.iter().zip(COMPONENTS.iter()) {
                assert_eq!(entry.component, *name);
                assert!(COMPONENT_INCIDENTS.contains(&entry.incidents));
                assert!(COMPONENT_FAILURE_PERCENTAGE.contains(&entry.failure_percentage));
                assert_eq!(entry.severity_distribution.total(), 100);
                assert!(SEVERITY_HIGH_SHARE.contains(&entry.severity_distribution.high));
                assert!(SEVERITY_MEDIUM_SHARE.contains(&entry.severity_distribution.medium));
            }

            assert_eq!(report.regional_breakdown.len(), REGIONS.len());
            for entry in &report.regional_breakdown {
                assert!(REGION_VEHICLES.contains(&entry.vehicles));
                assert!(REGION_ISSUES.contains(&entry.issues));
                assert!(REGION_HIGH_SEVERITY.contains(&entry.high_severity));
            }
        }
    }

    #[test]
    fn test_severity_low_share_extremes() {
        let low_shares = synthesize_model_performance(&mut MaxSource, &MODELS[0]);
        assert!(low_shares
            .component_breakdown
            .iter()
            .all(|c| c.severity_distribution.low == 20));

        let high_low_shares = synthesize_model_performance(&mut MinSource, &MODELS[0]);
        assert!(high_low_shares
            .component_breakdown
            .iter()
            .all(|c| c.severity_distribution.low == 60));
    }

    #[test]
    fn test_report_for_summary_keeps_summary_totals() {
        let mut rng = FixtureRng::seeded(12);
        let summaries = crate::services::overview_service::synthesize_model_summaries(&mut rng);

        for summary in &summaries {
            let report = synthesize_model_performance_for(&mut rng, summary);
            assert_eq!(report.model_id, summary.model_id);
            assert_eq!(report.model_name, summary.model_name);
            assert_eq!(report.total_vehicles, summary.vehicles);
            assert_eq!(report.active_issues, summary.active_issues);
            assert_eq!(report.failure_rate, summary.failure_rate);
            assert_eq!(report.component_breakdown.len(), BREAKDOWN_COMPONENTS);
        }
    }

    #[test]
    fn test_component_breakdown_json_shape() {
        let report = synthesize_model_performance(&mut MinSource, &MODELS[1]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["modelId"], "model-s");
        assert_eq!(json["highSeverityCount"], 30);
        assert_eq!(json["componentBreakdown"][0]["component"], "Battery Management System");
        assert_eq!(json["componentBreakdown"][0]["failurePercentage"], 5.0);
        assert_eq!(json["componentBreakdown"][0]["severityDistribution"]["HIGH"], 10);
        assert_eq!(json["regionalBreakdown"][2]["region"], "East");
        assert_eq!(json["regionalBreakdown"][2]["highSeverity"], 5);
    }
}
