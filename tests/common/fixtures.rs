//! Sample payloads shaped like the results API.

use serde_json::{json, Value};

/// Three records covering the team fallback: club + NAT, NAT only, neither.
pub fn sun_yang_payload() -> Value {
    json!({
        "FullName": "SUN Yang",
        "Results": [
            {
                "CompetitionName": "Games of the XXX Olympiad", "CompetitionType": "OG",
                "DisciplineName": "Men 400m Freestyle", "PhaseName": "Final",
                "Rank": "1", "MedalTag": "G", "Time": "3:40.14", "Date": "2012-07-28",
                "CompetitionCity": "London", "CompetitionCountry": "GBR",
                "ClubName": "Zhejiang", "NAT": "CHN", "RecordType": "OR",
                "Points": 1024, "AthleteResultAge": 20
            },
            {
                "CompetitionName": "Games of the XXIX Olympiad", "CompetitionType": "OG",
                "DisciplineName": "Men 1500m Freestyle", "PhaseName": "Final",
                "Rank": "28", "MedalTag": "", "Time": "15:23.63", "Date": "2008-08-16",
                "CompetitionCity": "Beijing", "CompetitionCountry": "CHN", "NAT": "CHN"
            },
            {
                "CompetitionName": "Games of the XXXI Olympiad",
                "DisciplineName": "Men 200m Freestyle", "Rank": "1", "MedalTag": "G",
                "Time": "1:44.65", "Date": "2016-08-08"
            }
        ]
    })
}

/// `n` synthetic records with increasing dates.
pub fn synthetic_payload(n: usize) -> Value {
    let results: Vec<Value> = (0..n)
        .map(|i| {
            let medal = ["G", "S", "B", ""][i % 4];
            json!({
                "Rank": (i % 8 + 1).to_string(),
                "DisciplineName": format!("Event {i}"),
                "Time": format!("{}:{:02}.00", 3 + i % 2, i % 60),
                "CompetitionName": format!("Meet {}", i / 10),
                "Date": format!("20{:02}-01-01", i % 100),
                "MedalTag": medal,
            })
        })
        .collect();
    json!({ "FullName": "Synthetic Swimmer", "Results": results })
}
