//! Per-race emissions model.
//!
//! Estimates follow the published 2024 sustainability report: the season
//! total is 168,720 tCO2e, with logistics and personnel travel dominating.
//! Per-race figures are tiered by venue region; flyaway rounds carry two to
//! three times the logistics footprint of European rounds.

use crate::season::{Race, Region, race_by_id};

const EUROPEAN_LOGISTICS: f64 = 2200.0;
const FLYAWAY_LOGISTICS: f64 = 4500.0;
const LONG_HAUL_LOGISTICS: f64 = 5500.0;

const EUROPEAN_TRAVEL: f64 = 800.0;
const FLYAWAY_TRAVEL: f64 = 2200.0;
const LONG_HAUL_TRAVEL: f64 = 2800.0;

const EVENT_OPS_BASE: f64 = 520.0;
const BROADCAST_BASE: f64 = 210.0;
const CAR_EMISSIONS: f64 = 70.0;

/// Emissions breakdown for one race weekend, in tCO2e.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceEmissions {
    /// Freight and equipment transport.
    pub logistics: f64,
    /// Team personnel flights.
    pub team_travel: f64,
    /// Race weekend fuel burn, all cars and sessions.
    pub car_emissions: f64,
    /// Venue energy and hospitality.
    pub event_operations: f64,
    /// TV production.
    pub broadcast: f64,
}

impl RaceEmissions {
    /// Total for the weekend.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.logistics + self.team_travel + self.car_emissions + self.event_operations
            + self.broadcast
    }
}

/// Season-level totals, in tCO2e.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonTotals {
    pub year: u32,
    pub total_emissions: f64,
    pub logistics: f64,
    pub team_travel: f64,
    pub car_emissions: f64,
    pub event_operations: f64,
    pub broadcast: f64,
    pub factories_and_facilities: f64,
}

/// Reported 2018 baseline, for the comparison card.
pub const BASELINE_2018: SeasonTotals = SeasonTotals {
    year: 2018,
    total_emissions: 228_793.0,
    logistics: 71_410.0,
    team_travel: 79_400.0,
    car_emissions: 1_900.0,
    event_operations: 15_200.0,
    broadcast: 6_800.0,
    factories_and_facilities: 54_083.0,
};

/// Reported 2022 totals.
pub const TOTALS_2022: SeasonTotals = SeasonTotals {
    year: 2022,
    total_emissions: 223_031.0,
    logistics: 69_500.0,
    team_travel: 72_000.0,
    car_emissions: 1_800.0,
    event_operations: 14_500.0,
    broadcast: 6_200.0,
    factories_and_facilities: 59_031.0,
};

/// Reported 2024 season total.
pub const TOTAL_2024: f64 = 168_720.0;

/// Factories-and-facilities share of the 2024 total; not attributable to a
/// single race.
const FACTORIES_2024: f64 = 33_744.0;

fn logistics_for(region: Region) -> f64 {
    match region {
        Region::Europe => EUROPEAN_LOGISTICS,
        Region::MiddleEast => FLYAWAY_LOGISTICS,
        Region::Asia | Region::Americas => LONG_HAUL_LOGISTICS,
        // Australia is the furthest flyaway.
        Region::Oceania => LONG_HAUL_LOGISTICS * 1.2,
    }
}

fn travel_for(region: Region) -> f64 {
    match region {
        Region::Europe => EUROPEAN_TRAVEL,
        Region::MiddleEast => FLYAWAY_TRAVEL,
        Region::Asia | Region::Americas => LONG_HAUL_TRAVEL,
        Region::Oceania => LONG_HAUL_TRAVEL * 1.3,
    }
}

/// Emissions breakdown for a race.
#[must_use]
pub fn emissions_for(race: &Race) -> RaceEmissions {
    let region = race.region();
    RaceEmissions {
        logistics: logistics_for(region),
        team_travel: travel_for(region),
        car_emissions: CAR_EMISSIONS,
        event_operations: EVENT_OPS_BASE,
        broadcast: BROADCAST_BASE,
    }
}

/// Emissions breakdown looked up by race id.
#[must_use]
pub fn emissions_for_race(id: &str) -> Option<RaceEmissions> {
    race_by_id(id).map(emissions_for)
}

/// Per-race components summed across the calendar, plus the reported
/// season-level figures.
#[must_use]
pub fn season_totals_2024() -> SeasonTotals {
    let mut totals = SeasonTotals {
        year: 2024,
        total_emissions: TOTAL_2024,
        logistics: 0.0,
        team_travel: 0.0,
        car_emissions: 0.0,
        event_operations: 0.0,
        broadcast: 0.0,
        factories_and_facilities: FACTORIES_2024,
    };
    for race in crate::season::SEASON_2024 {
        let e = emissions_for(race);
        totals.logistics += e.logistics;
        totals.team_travel += e.team_travel;
        totals.car_emissions += e.car_emissions;
        totals.event_operations += e.event_operations;
        totals.broadcast += e.broadcast;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::SEASON_2024;

    #[test]
    fn every_race_has_a_breakdown() {
        for race in SEASON_2024 {
            let e = emissions_for_race(race.id).unwrap();
            assert!(e.total() > 0.0);
        }
        assert!(emissions_for_race("nope").is_none());
    }

    #[test]
    fn flyaway_rounds_cost_more_than_european_rounds() {
        let monza = emissions_for_race("monza").unwrap();
        let melbourne = emissions_for_race("australia").unwrap();
        assert!(melbourne.logistics > 2.0 * monza.logistics);
        assert!(melbourne.team_travel > monza.team_travel);
    }

    #[test]
    fn season_totals_sum_the_calendar() {
        let totals = season_totals_2024();
        assert!((totals.logistics - 98_400.0).abs() < 1e-6);
        assert!((totals.team_travel - 47_040.0).abs() < 1e-6);
        assert!((totals.event_operations - 24.0 * EVENT_OPS_BASE).abs() < 1e-6);
        assert!((totals.broadcast - 24.0 * BROADCAST_BASE).abs() < 1e-6);
        assert!((totals.car_emissions - 24.0 * CAR_EMISSIONS).abs() < 1e-6);
    }

    #[test]
    fn baseline_delta_is_roughly_minus_26_percent() {
        let delta = (TOTAL_2024 - BASELINE_2018.total_emissions) / BASELINE_2018.total_emissions;
        assert!((delta - -0.2626).abs() < 0.01);
    }
}
