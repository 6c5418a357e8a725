//! Vehicle selection: maps sprite-folder names to handling profiles.

use super::profile::HandlingProfile;

/// Resolve the handling profile for a selectable vehicle.
///
/// Unknown names fall back to the standard profile, so a freshly dropped-in
/// sprite folder drives like the default car until it gets its own tuning.
pub fn profile_for_vehicle(name: &str) -> HandlingProfile {
    match name {
        "car_01" | "car_02" => HandlingProfile::standard(),
        "car_03" => HandlingProfile::gripper(),
        _ => HandlingProfile::standard(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vehicles_resolve() {
        assert_eq!(profile_for_vehicle("car_01"), HandlingProfile::standard());
        assert_eq!(profile_for_vehicle("car_03"), HandlingProfile::gripper());
    }

    #[test]
    fn test_unknown_vehicle_falls_back_to_standard() {
        assert_eq!(profile_for_vehicle("car_99"), HandlingProfile::standard());
        assert_eq!(profile_for_vehicle(""), HandlingProfile::standard());
    }
}
