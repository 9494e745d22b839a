//! Sample random-user payloads.

use profilecard_types::UserProfile;
use serde_json::{Value, json};

/// A complete record in the shape randomuser.me returns.
pub fn record(first: &str, last: &str) -> Value {
    let username = format!("{}{}", first, last).to_lowercase();
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": last },
        "location": {
            "street": { "number": 12, "name": "St James's Square" },
            "city": "London",
            "state": "Greater London",
            "country": "United Kingdom",
            "postcode": "SW1Y 4JH",
            "coordinates": { "latitude": "51.5074", "longitude": "-0.1345" },
            "timezone": { "offset": "+0:00", "description": "Western Europe Time, London" }
        },
        "email": format!("{}@example.com", username),
        "login": {
            "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
            "username": username,
            "password": "analytical"
        },
        "dob": { "date": "1815-12-10T08:00:00.000Z", "age": 36 },
        "registered": { "date": "2015-05-03T12:00:00.000Z", "age": 10 },
        "phone": "020 7946 0000",
        "cell": "07700 900000",
        "id": { "name": "NINO", "value": "AB 12 34 56 C" },
        "picture": {
            "large": "https://randomuser.me/api/portraits/women/1.jpg",
            "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
        },
        "nat": "GB"
    })
}

/// Response envelope around the given records.
pub fn response(records: Vec<Value>) -> Value {
    let count = records.len();
    json!({
        "results": records,
        "info": { "seed": "56d27f4a53bd5441", "results": count, "page": 1, "version": "1.4" }
    })
}

pub fn ada_lovelace_record() -> Value {
    record("Ada", "Lovelace")
}

pub fn ada_lovelace_body() -> String {
    response(vec![ada_lovelace_record()]).to_string()
}

pub fn profile(first: &str, last: &str) -> UserProfile {
    serde_json::from_value(record(first, last)).expect("fixture record must decode")
}

pub fn ada_lovelace() -> UserProfile {
    profile("Ada", "Lovelace")
}
