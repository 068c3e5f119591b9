//! Planner configuration.

use crate::error::ConfigError;
use crate::geo::GeoPoint;
use crate::order::{OrderStatus, DEFAULT_DISPATCH_STATUSES};

pub const ENV_DEFAULT_RADIUS_KM: &str = "DELIVERY_DEFAULT_RADIUS_KM";
pub const ENV_WAREHOUSE_LAT: &str = "DELIVERY_WAREHOUSE_LAT";
pub const ENV_WAREHOUSE_LNG: &str = "DELIVERY_WAREHOUSE_LNG";
pub const ENV_DISPATCH_STATUSES: &str = "DELIVERY_DISPATCH_STATUSES";

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Search radius used when a proximity request does not give one.
    pub default_radius_km: f64,
    /// Route start when a request has no start location.
    pub warehouse: GeoPoint,
    /// Statuses eligible for proximity search.
    pub dispatch_statuses: Vec<OrderStatus>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 5.0,
            warehouse: GeoPoint::from_degrees(28.6139, 77.2090),
            dispatch_statuses: DEFAULT_DISPATCH_STATUSES.to_vec(),
        }
    }
}

impl PlannerConfig {
    /// Load from `DELIVERY_*` environment variables, defaulting unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_radius_km = match lookup(ENV_DEFAULT_RADIUS_KM) {
            Some(raw) => {
                let radius = parse_f64(ENV_DEFAULT_RADIUS_KM, &raw)?;
                if radius < 0.0 {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_DEFAULT_RADIUS_KM,
                        value: raw,
                    });
                }
                radius
            }
            None => defaults.default_radius_km,
        };

        let lat = lookup(ENV_WAREHOUSE_LAT)
            .map(|raw| parse_f64(ENV_WAREHOUSE_LAT, &raw))
            .transpose()?
            .unwrap_or(defaults.warehouse.latitude());
        let lng = lookup(ENV_WAREHOUSE_LNG)
            .map(|raw| parse_f64(ENV_WAREHOUSE_LNG, &raw))
            .transpose()?
            .unwrap_or(defaults.warehouse.longitude());
        let warehouse =
            GeoPoint::new(lat, lng).map_err(|err| ConfigError::Warehouse(err.to_string()))?;

        let dispatch_statuses = match lookup(ENV_DISPATCH_STATUSES) {
            Some(raw) => raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse)
                .collect::<Result<Vec<OrderStatus>, _>>()?,
            None => defaults.dispatch_statuses,
        };

        Ok(Self {
            default_radius_km,
            warehouse,
            dispatch_statuses,
        })
    }
}

fn parse_f64(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.default_radius_km, 5.0);
    }

    #[test]
    fn reads_all_variables() {
        let config = PlannerConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_RADIUS_KM, "7.5"),
            (ENV_WAREHOUSE_LAT, "19.0760"),
            (ENV_WAREHOUSE_LNG, "72.8777"),
            (ENV_DISPATCH_STATUSES, "confirmed, out_for_delivery"),
        ]))
        .unwrap();

        assert_eq!(config.default_radius_km, 7.5);
        assert_eq!(config.warehouse.coords(), (19.0760, 72.8777));
        assert_eq!(
            config.dispatch_statuses,
            vec![OrderStatus::Confirmed, OrderStatus::OutForDelivery]
        );
    }

    #[test]
    fn rejects_bad_radius() {
        let negative = lookup(&[(ENV_DEFAULT_RADIUS_KM, "-1")]);
        let err = PlannerConfig::from_lookup(negative).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: ENV_DEFAULT_RADIUS_KM,
                ..
            }
        ));

        let garbage = lookup(&[(ENV_DEFAULT_RADIUS_KM, "far")]);
        let err = PlannerConfig::from_lookup(garbage).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_out_of_range_warehouse() {
        let err = PlannerConfig::from_lookup(lookup(&[(ENV_WAREHOUSE_LAT, "95")])).unwrap_err();
        assert!(matches!(err, ConfigError::Warehouse(_)));
    }

    #[test]
    fn rejects_unknown_status() {
        let statuses = lookup(&[(ENV_DISPATCH_STATUSES, "confirmed,lost")]);
        let err = PlannerConfig::from_lookup(statuses).unwrap_err();
        assert_eq!(err, ConfigError::UnknownStatus("lost".to_string()));
    }
}
