//! Turns a raw history list into the totals the panel header shows.
//!
//! Sums are carried in integer hundredths (cents / centi-km) so addition is
//! exact; each input value is rounded exactly once on the way in. Missing
//! values count as zero. Formatting to display text happens separately, in
//! [`crate::services::format`].

use shared::{MaintenanceRecord, RouteRecord};

use crate::services::format::{format_brl, format_km, to_hundredths};

/// Aggregated totals for one history tab, raw and display-ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStats {
    Maintenance {
        total_count: usize,
        total_cost_cents: i64,
    },
    Route {
        total_count: usize,
        total_distance_centi_km: i64,
        total_fuel_cost_cents: i64,
        total_toll_cost_cents: i64,
    },
}

impl HistoryStats {
    pub fn total_count(&self) -> usize {
        match self {
            HistoryStats::Maintenance { total_count, .. }
            | HistoryStats::Route { total_count, .. } => *total_count,
        }
    }

    /// Header lines for the panel, already localized.
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            HistoryStats::Maintenance {
                total_cost_cents, ..
            } => {
                vec![format!("Custo Total: {}", format_brl(*total_cost_cents))]
            }
            HistoryStats::Route {
                total_count,
                total_distance_centi_km,
                total_fuel_cost_cents,
                total_toll_cost_cents,
            } => vec![
                format!(
                    "Total: {} rotas / {}",
                    total_count,
                    format_km(*total_distance_centi_km)
                ),
                format!(
                    "Custo Combustível (Est.): {}",
                    format_brl(*total_fuel_cost_cents)
                ),
                format!(
                    "Custo Pedágio (Est.): {}",
                    format_brl(*total_toll_cost_cents)
                ),
            ],
        }
    }
}

pub fn aggregate_maintenance(records: &[MaintenanceRecord]) -> HistoryStats {
    HistoryStats::Maintenance {
        total_count: records.len(),
        total_cost_cents: sum_hundredths(records.iter().map(|r| r.cost)),
    }
}

pub fn aggregate_routes(records: &[RouteRecord]) -> HistoryStats {
    HistoryStats::Route {
        total_count: records.len(),
        total_distance_centi_km: sum_hundredths(records.iter().map(|r| r.distance)),
        total_fuel_cost_cents: sum_hundredths(records.iter().map(|r| r.fuel_cost)),
        total_toll_cost_cents: sum_hundredths(records.iter().map(|r| r.toll_cost)),
    }
}

fn sum_hundredths(values: impl Iterator<Item = Option<f64>>) -> i64 {
    values.map(|v| to_hundredths(v.unwrap_or(0.0))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(distance: Option<f64>, fuel: Option<f64>, toll: Option<f64>) -> RouteRecord {
        RouteRecord {
            start_location: "A".into(),
            end_location: "B".into(),
            end_time: "01/07/2026 10:00".into(),
            distance,
            fuel_cost: fuel,
            toll_cost: toll,
            vehicle_plate: None,
        }
    }

    fn maintenance(cost: Option<f64>) -> MaintenanceRecord {
        MaintenanceRecord {
            service_type: "Revisão".into(),
            shop_name: "Oficina".into(),
            end_date: "01/07/2026".into(),
            cost,
        }
    }

    #[test]
    fn route_totals_sum_exactly() {
        let records = vec![
            route(Some(5.5), Some(10.005), Some(1.0)),
            route(Some(4.5), Some(20.0), Some(2.5)),
        ];
        let stats = aggregate_routes(&records);
        let HistoryStats::Route {
            total_count,
            total_distance_centi_km,
            total_fuel_cost_cents,
            total_toll_cost_cents,
        } = stats
        else {
            panic!("wrong stats kind");
        };
        assert_eq!(total_count, 2);
        assert_eq!(total_distance_centi_km, 1_000);
        assert_eq!(format_km(total_distance_centi_km), "10,00 km");
        // 10.005 rounds once on the way in, then sums exactly.
        assert_eq!(total_fuel_cost_cents, 1_000 + 2_000);
        assert_eq!(total_toll_cost_cents, 350);
    }

    #[test]
    fn maintenance_totals_treat_missing_cost_as_zero() {
        let records = vec![maintenance(Some(350.0)), maintenance(None)];
        let stats = aggregate_maintenance(&records);
        assert_eq!(
            stats,
            HistoryStats::Maintenance {
                total_count: 2,
                total_cost_cents: 35_000,
            }
        );
        assert_eq!(stats.summary_lines(), vec!["Custo Total: R$ 350,00"]);
    }

    #[test]
    fn empty_history_aggregates_to_zero() {
        let stats = aggregate_routes(&[]);
        assert_eq!(stats.total_count(), 0);
        assert_eq!(
            stats.summary_lines()[0],
            "Total: 0 rotas / 0,00 km".to_string()
        );
    }

    #[test]
    fn route_summary_lines_are_localized() {
        let records = vec![route(Some(120.5), Some(80.0), Some(12.0))];
        let lines = aggregate_routes(&records).summary_lines();
        assert_eq!(
            lines,
            vec![
                "Total: 1 rotas / 120,50 km",
                "Custo Combustível (Est.): R$ 80,00",
                "Custo Pedágio (Est.): R$ 12,00",
            ]
        );
    }
}
