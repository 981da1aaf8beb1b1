//! Sintetizador de centros de servicio
//!
//! Lista de centros y detalle de un centro. Los ids `sc-1..sc-8` son
//! estables; todos los campos numéricos se vuelven a muestrear.

use std::ops::RangeInclusive;

use crate::config::LookupPolicy;
use crate::models::catalog::{self, COMMON_SERVICE_ISSUES, MODELS, REGIONS, SERVICE_CENTER_NAMES};
use crate::models::service_center::{ModelServiceCount, ServiceCenter, ServiceCenterDetail, Utilization};
use crate::services::random_source::{pick, RandomSource};
use crate::utils::errors::{not_found_error, AppResult};

pub const VEHICLES_COVERED: RangeInclusive<u32> = 3_000..=8_000;
pub const ACTIVE_ISSUES: RangeInclusive<u32> = 200..=600;
pub const UPCOMING_APPOINTMENTS: RangeInclusive<u32> = 50..=150;

pub const STREET_NUMBER: RangeInclusive<u32> = 100..=999;
pub const CURRENT_LOAD: RangeInclusive<u32> = 60..=95;
pub const UPCOMING_LOAD: RangeInclusive<u32> = 40..=80;
/// Modelos del catálogo incluidos en el detalle
pub const SERVICED_MODELS: usize = 4;
pub const SERVICED_COUNT: RangeInclusive<u32> = 200..=800;

/// Generar la lista completa de centros
pub fn synthesize_service_centers<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<ServiceCenter> {
    SERVICE_CENTER_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| ServiceCenter {
            id: catalog::service_center_id(idx),
            name: name.to_string(),
            region: REGIONS[idx % REGIONS.len()],
            vehicles_covered: rng.int_in(VEHICLES_COVERED),
            active_issues: rng.int_in(ACTIVE_ISSUES),
            upcoming_appointments: rng.int_in(UPCOMING_APPOINTMENTS),
            utilization: pick(rng, &Utilization::ALL),
        })
        .collect()
}

/// Buscar un centro en una lista según la política de búsqueda
pub fn find_center<'a>(
    centers: &'a [ServiceCenter],
    id: &str,
    policy: LookupPolicy,
) -> AppResult<&'a ServiceCenter> {
    if let Some(center) = centers.iter().find(|c| c.id == id) {
        return Ok(center);
    }

    match (policy, centers.first()) {
        (LookupPolicy::FallbackToFirst, Some(first)) => {
            log::debug!("⚠️ Centro '{}' desconocido, usando '{}'", id, first.id);
            Ok(first)
        }
        _ => Err(not_found_error("Service center", id)),
    }
}

/// Generar el detalle de un centro ya elegido
pub fn synthesize_center_detail<R: RandomSource + ?Sized>(
    rng: &mut R,
    center: &ServiceCenter,
) -> ServiceCenterDetail {
    let location = format!(
        "{} Main Street, {} District",
        rng.int_in(STREET_NUMBER),
        center.region
    );
    let current_load = rng.int_in(CURRENT_LOAD);
    let upcoming_load = rng.int_in(UPCOMING_LOAD);

    let models_serviced = MODELS
        .iter()
        .take(SERVICED_MODELS)
        .map(|model| ModelServiceCount {
            model_name: model.model_name.to_string(),
            count: rng.int_in(SERVICED_COUNT),
        })
        .collect();

    ServiceCenterDetail {
        id: center.id.clone(),
        name: center.name.clone(),
        location,
        region: center.region,
        current_load,
        upcoming_load,
        common_issues: COMMON_SERVICE_ISSUES.iter().map(|s| s.to_string()).collect(),
        models_serviced,
    }
}

/// Detalle de un centro por id: vuelve a generar la lista y busca en ella
pub fn service_center_detail<R: RandomSource + ?Sized>(
    rng: &mut R,
    id: &str,
    policy: LookupPolicy,
) -> AppResult<ServiceCenterDetail> {
    let centers = synthesize_service_centers(rng);
    let center = find_center(&centers, id, policy)?;
    Ok(synthesize_center_detail(rng, center))
}
