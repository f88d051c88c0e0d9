//! The 2024 season calendar.
//!
//! Static configuration, created once and never mutated. Calendar order is
//! travel order: the route overlay connects consecutive entries.

/// A race venue on the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Race {
    /// Unique, stable identifier. Also the emissions lookup key.
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub city: &'static str,
    pub circuit: &'static str,
    /// Degrees, in [-90, 90].
    pub lat: f32,
    /// Degrees, in [-180, 180].
    pub lng: f32,
    /// Race date, ISO 8601.
    pub date: &'static str,
}

/// Rough venue region, used to tier logistics and travel emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Europe,
    MiddleEast,
    Asia,
    Americas,
    Oceania,
}

impl Race {
    /// Region this venue falls into.
    #[must_use]
    pub fn region(&self) -> Region {
        match self.id {
            "bahrain" | "saudi-arabia" | "azerbaijan" | "qatar" | "abu-dhabi" => Region::MiddleEast,
            "australia" => Region::Oceania,
            "japan" | "china" | "singapore" => Region::Asia,
            "miami" | "canada" | "austin" | "mexico" | "brazil" | "las-vegas" => Region::Americas,
            _ => Region::Europe,
        }
    }
}

/// Look up a race by id.
#[must_use]
pub fn race_by_id(id: &str) -> Option<&'static Race> {
    SEASON_2024.iter().find(|race| race.id == id)
}

/// The 24 rounds of the 2024 season, in calendar order.
pub const SEASON_2024: &[Race] = &[
    Race {
        id: "bahrain",
        name: "Bahrain Grand Prix",
        country: "Bahrain",
        city: "Sakhir",
        circuit: "Bahrain International Circuit",
        lat: 26.0325,
        lng: 50.5106,
        date: "2024-03-02",
    },
    Race {
        id: "saudi-arabia",
        name: "Saudi Arabian Grand Prix",
        country: "Saudi Arabia",
        city: "Jeddah",
        circuit: "Jeddah Corniche Circuit",
        lat: 21.6319,
        lng: 39.1044,
        date: "2024-03-09",
    },
    Race {
        id: "australia",
        name: "Australian Grand Prix",
        country: "Australia",
        city: "Melbourne",
        circuit: "Albert Park Circuit",
        lat: -37.8497,
        lng: 144.968,
        date: "2024-03-24",
    },
    Race {
        id: "japan",
        name: "Japanese Grand Prix",
        country: "Japan",
        city: "Suzuka",
        circuit: "Suzuka International Racing Course",
        lat: 34.8431,
        lng: 136.5411,
        date: "2024-04-07",
    },
    Race {
        id: "china",
        name: "Chinese Grand Prix",
        country: "China",
        city: "Shanghai",
        circuit: "Shanghai International Circuit",
        lat: 31.3389,
        lng: 121.2198,
        date: "2024-04-21",
    },
    Race {
        id: "miami",
        name: "Miami Grand Prix",
        country: "United States",
        city: "Miami",
        circuit: "Miami International Autodrome",
        lat: 25.9581,
        lng: -80.2389,
        date: "2024-05-05",
    },
    Race {
        id: "imola",
        name: "Emilia Romagna Grand Prix",
        country: "Italy",
        city: "Imola",
        circuit: "Autodromo Enzo e Dino Ferrari",
        lat: 44.3439,
        lng: 11.7167,
        date: "2024-05-19",
    },
    Race {
        id: "monaco",
        name: "Monaco Grand Prix",
        country: "Monaco",
        city: "Monte Carlo",
        circuit: "Circuit de Monaco",
        lat: 43.7347,
        lng: 7.4206,
        date: "2024-05-26",
    },
    Race {
        id: "canada",
        name: "Canadian Grand Prix",
        country: "Canada",
        city: "Montreal",
        circuit: "Circuit Gilles Villeneuve",
        lat: 45.5,
        lng: -73.5228,
        date: "2024-06-09",
    },
    Race {
        id: "spain",
        name: "Spanish Grand Prix",
        country: "Spain",
        city: "Barcelona",
        circuit: "Circuit de Barcelona-Catalunya",
        lat: 41.57,
        lng: 2.2611,
        date: "2024-06-23",
    },
    Race {
        id: "austria",
        name: "Austrian Grand Prix",
        country: "Austria",
        city: "Spielberg",
        circuit: "Red Bull Ring",
        lat: 47.2197,
        lng: 14.7647,
        date: "2024-06-30",
    },
    Race {
        id: "uk",
        name: "British Grand Prix",
        country: "United Kingdom",
        city: "Silverstone",
        circuit: "Silverstone Circuit",
        lat: 52.0786,
        lng: -1.0169,
        date: "2024-07-07",
    },
    Race {
        id: "hungary",
        name: "Hungarian Grand Prix",
        country: "Hungary",
        city: "Budapest",
        circuit: "Hungaroring",
        lat: 47.5789,
        lng: 19.2486,
        date: "2024-07-21",
    },
    Race {
        id: "belgium",
        name: "Belgian Grand Prix",
        country: "Belgium",
        city: "Stavelot",
        circuit: "Circuit de Spa-Francorchamps",
        lat: 50.4372,
        lng: 5.9714,
        date: "2024-07-28",
    },
    Race {
        id: "netherlands",
        name: "Dutch Grand Prix",
        country: "Netherlands",
        city: "Zandvoort",
        circuit: "Circuit Zandvoort",
        lat: 52.3888,
        lng: 4.5409,
        date: "2024-08-25",
    },
    Race {
        id: "monza",
        name: "Italian Grand Prix",
        country: "Italy",
        city: "Monza",
        circuit: "Autodromo Nazionale Monza",
        lat: 45.6156,
        lng: 9.2811,
        date: "2024-09-01",
    },
    Race {
        id: "azerbaijan",
        name: "Azerbaijan Grand Prix",
        country: "Azerbaijan",
        city: "Baku",
        circuit: "Baku City Circuit",
        lat: 40.3725,
        lng: 49.8533,
        date: "2024-09-15",
    },
    Race {
        id: "singapore",
        name: "Singapore Grand Prix",
        country: "Singapore",
        city: "Singapore",
        circuit: "Marina Bay Street Circuit",
        lat: 1.2914,
        lng: 103.864,
        date: "2024-09-22",
    },
    Race {
        id: "austin",
        name: "United States Grand Prix",
        country: "United States",
        city: "Austin",
        circuit: "Circuit of the Americas",
        lat: 30.1328,
        lng: -97.6411,
        date: "2024-10-20",
    },
    Race {
        id: "mexico",
        name: "Mexico City Grand Prix",
        country: "Mexico",
        city: "Mexico City",
        circuit: "Autodromo Hermanos Rodriguez",
        lat: 19.4042,
        lng: -99.0907,
        date: "2024-10-27",
    },
    Race {
        id: "brazil",
        name: "Sao Paulo Grand Prix",
        country: "Brazil",
        city: "Sao Paulo",
        circuit: "Autodromo Jose Carlos Pace",
        lat: -23.7036,
        lng: -46.6997,
        date: "2024-11-03",
    },
    Race {
        id: "las-vegas",
        name: "Las Vegas Grand Prix",
        country: "United States",
        city: "Las Vegas",
        circuit: "Las Vegas Strip Circuit",
        lat: 36.1147,
        lng: -115.1728,
        date: "2024-11-23",
    },
    Race {
        id: "qatar",
        name: "Qatar Grand Prix",
        country: "Qatar",
        city: "Lusail",
        circuit: "Lusail International Circuit",
        lat: 25.49,
        lng: 51.4542,
        date: "2024-12-01",
    },
    Race {
        id: "abu-dhabi",
        name: "Abu Dhabi Grand Prix",
        country: "United Arab Emirates",
        city: "Abu Dhabi",
        circuit: "Yas Marina Circuit",
        lat: 24.4672,
        lng: 54.6031,
        date: "2024-12-08",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_has_24_rounds_with_unique_ids() {
        assert_eq!(SEASON_2024.len(), 24);
        for (i, race) in SEASON_2024.iter().enumerate() {
            assert!(
                SEASON_2024[i + 1..].iter().all(|other| other.id != race.id),
                "duplicate id {}",
                race.id
            );
        }
    }

    #[test]
    fn coordinates_are_in_range() {
        for race in SEASON_2024 {
            assert!((-90.0..=90.0).contains(&race.lat), "{}", race.id);
            assert!((-180.0..=180.0).contains(&race.lng), "{}", race.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(race_by_id("monaco").unwrap().country, "Monaco");
        assert!(race_by_id("indianapolis").is_none());
    }

    #[test]
    fn region_split_matches_the_calendar() {
        let count = |region| {
            SEASON_2024
                .iter()
                .filter(|race| race.region() == region)
                .count()
        };
        assert_eq!(count(Region::Europe), 9);
        assert_eq!(count(Region::MiddleEast), 5);
        assert_eq!(count(Region::Asia), 3);
        assert_eq!(count(Region::Americas), 6);
        assert_eq!(count(Region::Oceania), 1);
    }
}
