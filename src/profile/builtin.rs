//! A built-in catalog covering the common messages of activity files.
//!
//! Entries follow the published FIT profile. Subfields are declared with the
//! base type of their parent field, since their bytes are always encoded at
//! the parent's width.

use crate::sans::base::{ENUM, SINT8, SINT16, SINT32, STRING, UINT8, UINT16, UINT32, UINT32Z};

use super::{
    Catalog, FieldMeta, MessageMeta,
    RefValue::{self, Label},
    Subfield,
};

/// The built-in profile catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profile;

impl Catalog for Profile {
    fn message(&self, global: u16) -> Option<&'static MessageMeta> {
        MESSAGES.iter().find(|m| m.number == global)
    }

    fn is_enumerated(&self, field: &str) -> bool {
        enumeration(field).is_some()
    }

    fn label(&self, field: &str, code: u64) -> Option<&'static str> {
        enumeration(field)?
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

static MESSAGES: [MessageMeta; 8] = [
    MessageMeta {
        number: 0,
        name: "file_id",
        fields: &FILE_ID_FIELDS,
    },
    MessageMeta {
        number: 18,
        name: "session",
        fields: &SESSION_FIELDS,
    },
    MessageMeta {
        number: 19,
        name: "lap",
        fields: &LAP_FIELDS,
    },
    MessageMeta {
        number: 20,
        name: "record",
        fields: &RECORD_FIELDS,
    },
    MessageMeta {
        number: 21,
        name: "event",
        fields: &EVENT_FIELDS,
    },
    MessageMeta {
        number: 23,
        name: "device_info",
        fields: &DEVICE_INFO_FIELDS,
    },
    MessageMeta {
        number: 34,
        name: "activity",
        fields: &ACTIVITY_FIELDS,
    },
    MessageMeta {
        number: 49,
        name: "file_creator",
        fields: &FILE_CREATOR_FIELDS,
    },
];

const GARMIN_MANUFACTURERS: &[RefValue] = &[
    Label("garmin"),
    Label("dynastream"),
    Label("dynastream_oem"),
    Label("tacx"),
];

static PRODUCT_SUBFIELDS: [Subfield; 2] = [
    Subfield::new("favero_product", &UINT16, "manufacturer", &[Label("favero_electronics")]),
    Subfield::new("garmin_product", &UINT16, "manufacturer", GARMIN_MANUFACTURERS),
];

static FILE_ID_FIELDS: [FieldMeta; 7] = [
    FieldMeta::new(0, "type", &ENUM),
    FieldMeta::new(1, "manufacturer", &UINT16),
    FieldMeta::new(2, "product", &UINT16).subfields(&PRODUCT_SUBFIELDS),
    FieldMeta::new(3, "serial_number", &UINT32Z),
    FieldMeta::new(4, "time_created", &UINT32).units("s"),
    FieldMeta::new(5, "number", &UINT16),
    FieldMeta::new(8, "product_name", &STRING),
];

static FILE_CREATOR_FIELDS: [FieldMeta; 2] = [
    FieldMeta::new(0, "software_version", &UINT16),
    FieldMeta::new(1, "hardware_version", &UINT8),
];

static RECORD_FIELDS: [FieldMeta; 20] = [
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "position_lat", &SINT32).units("semicircles"),
    FieldMeta::new(1, "position_long", &SINT32).units("semicircles"),
    FieldMeta::new(2, "altitude", &UINT16)
        .scale(5.0)
        .offset(500.0)
        .units("m"),
    FieldMeta::new(3, "heart_rate", &UINT8).units("bpm"),
    FieldMeta::new(4, "cadence", &UINT8).units("rpm"),
    FieldMeta::new(5, "distance", &UINT32).scale(100.0).units("m"),
    FieldMeta::new(6, "speed", &UINT16).scale(1000.0).units("m/s"),
    FieldMeta::new(7, "power", &UINT16).units("watts"),
    FieldMeta::new(9, "grade", &SINT16).scale(100.0).units("%"),
    FieldMeta::new(11, "time_from_course", &SINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(13, "temperature", &SINT8).units("C"),
    FieldMeta::new(29, "accumulated_power", &UINT32).units("watts"),
    FieldMeta::new(31, "gps_accuracy", &UINT8).units("m"),
    FieldMeta::new(32, "vertical_speed", &SINT16)
        .scale(1000.0)
        .units("m/s"),
    FieldMeta::new(33, "calories", &UINT16).units("kcal"),
    FieldMeta::new(53, "fractional_cadence", &UINT8)
        .scale(128.0)
        .units("rpm"),
    FieldMeta::new(73, "enhanced_speed", &UINT32)
        .scale(1000.0)
        .units("m/s"),
    FieldMeta::new(78, "enhanced_altitude", &UINT32)
        .scale(5.0)
        .offset(500.0)
        .units("m"),
    FieldMeta::new(30, "left_right_balance", &UINT8),
];

static EVENT_DATA_SUBFIELDS: [Subfield; 20] = [
    Subfield::new("timer_trigger", &UINT32, "event", &[Label("timer")]),
    Subfield::new("course_point_index", &UINT32, "event", &[Label("course_point")]),
    Subfield::new("battery_level", &UINT32, "event", &[Label("battery")])
        .scale(1000.0)
        .units("V"),
    Subfield::new(
        "virtual_partner_speed",
        &UINT32,
        "event",
        &[Label("virtual_partner_pace")],
    )
    .scale(1000.0)
    .units("m/s"),
    Subfield::new("hr_high_alert", &UINT32, "event", &[Label("hr_high_alert")]).units("bpm"),
    Subfield::new("hr_low_alert", &UINT32, "event", &[Label("hr_low_alert")]).units("bpm"),
    Subfield::new("speed_high_alert", &UINT32, "event", &[Label("speed_high_alert")])
        .scale(1000.0)
        .units("m/s"),
    Subfield::new("speed_low_alert", &UINT32, "event", &[Label("speed_low_alert")])
        .scale(1000.0)
        .units("m/s"),
    Subfield::new("cad_high_alert", &UINT32, "event", &[Label("cad_high_alert")]).units("rpm"),
    Subfield::new("cad_low_alert", &UINT32, "event", &[Label("cad_low_alert")]).units("rpm"),
    Subfield::new("power_high_alert", &UINT32, "event", &[Label("power_high_alert")])
        .units("watts"),
    Subfield::new("power_low_alert", &UINT32, "event", &[Label("power_low_alert")])
        .units("watts"),
    Subfield::new(
        "time_duration_alert",
        &UINT32,
        "event",
        &[Label("time_duration_alert")],
    )
    .scale(1000.0)
    .units("s"),
    Subfield::new(
        "distance_duration_alert",
        &UINT32,
        "event",
        &[Label("distance_duration_alert")],
    )
    .scale(100.0)
    .units("m"),
    Subfield::new(
        "calorie_duration_alert",
        &UINT32,
        "event",
        &[Label("calorie_duration_alert")],
    )
    .units("calories"),
    Subfield::new(
        "fitness_equipment_state",
        &UINT32,
        "event",
        &[Label("fitness_equipment")],
    ),
    Subfield::new("sport_point", &UINT32, "event", &[Label("sport_point")]),
    Subfield::new(
        "gear_change_data",
        &UINT32,
        "event",
        &[Label("front_gear_change"), Label("rear_gear_change")],
    ),
    Subfield::new(
        "rider_position",
        &UINT32,
        "event",
        &[Label("rider_position_change")],
    ),
    Subfield::new("comm_timeout", &UINT32, "event", &[Label("comm_timeout")]),
];

static EVENT_FIELDS: [FieldMeta; 6] = [
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "event", &ENUM),
    FieldMeta::new(1, "event_type", &ENUM),
    FieldMeta::new(2, "data16", &UINT16),
    FieldMeta::new(3, "data", &UINT32).subfields(&EVENT_DATA_SUBFIELDS),
    FieldMeta::new(4, "event_group", &UINT8),
];

static DEVICE_TYPE_SUBFIELDS: [Subfield; 2] = [
    Subfield::new("antplus_device_type", &UINT8, "source_type", &[Label("antplus")]),
    Subfield::new("ant_device_type", &UINT8, "source_type", &[Label("ant")]),
];

static DEVICE_INFO_FIELDS: [FieldMeta; 14] = [
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "device_index", &UINT8),
    FieldMeta::new(1, "device_type", &UINT8).subfields(&DEVICE_TYPE_SUBFIELDS),
    FieldMeta::new(2, "manufacturer", &UINT16),
    FieldMeta::new(3, "serial_number", &UINT32Z),
    FieldMeta::new(4, "product", &UINT16).subfields(&PRODUCT_SUBFIELDS),
    FieldMeta::new(5, "software_version", &UINT16).scale(100.0),
    FieldMeta::new(6, "hardware_version", &UINT8),
    FieldMeta::new(7, "cum_operating_time", &UINT32).units("s"),
    FieldMeta::new(10, "battery_voltage", &UINT16)
        .scale(256.0)
        .units("V"),
    FieldMeta::new(11, "battery_status", &UINT8),
    FieldMeta::new(25, "source_type", &ENUM),
    FieldMeta::new(27, "product_name", &STRING),
    FieldMeta::new(32, "battery_level", &UINT8).units("%"),
];

const STRIDE_SPORTS: &[RefValue] = &[Label("running"), Label("walking")];

const STROKE_SPORTS: &[RefValue] = &[
    Label("cycling"),
    Label("swimming"),
    Label("rowing"),
    Label("stand_up_paddleboarding"),
];

static TOTAL_CYCLES_SUBFIELDS: [Subfield; 2] = [
    Subfield::new("total_strides", &UINT32, "sport", STRIDE_SPORTS).units("strides"),
    Subfield::new("total_strokes", &UINT32, "sport", STROKE_SPORTS).units("strokes"),
];

static AVG_CADENCE_SUBFIELDS: [Subfield; 1] = [Subfield::new(
    "avg_running_cadence",
    &UINT8,
    "sport",
    &[Label("running")],
)
.units("strides/min")];

static MAX_CADENCE_SUBFIELDS: [Subfield; 1] = [Subfield::new(
    "max_running_cadence",
    &UINT8,
    "sport",
    &[Label("running")],
)
.units("strides/min")];

static LAP_FIELDS: [FieldMeta; 27] = [
    FieldMeta::new(254, "message_index", &UINT16),
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "event", &ENUM),
    FieldMeta::new(1, "event_type", &ENUM),
    FieldMeta::new(2, "start_time", &UINT32),
    FieldMeta::new(3, "start_position_lat", &SINT32).units("semicircles"),
    FieldMeta::new(4, "start_position_long", &SINT32).units("semicircles"),
    FieldMeta::new(5, "end_position_lat", &SINT32).units("semicircles"),
    FieldMeta::new(6, "end_position_long", &SINT32).units("semicircles"),
    FieldMeta::new(7, "total_elapsed_time", &UINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(8, "total_timer_time", &UINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(9, "total_distance", &UINT32)
        .scale(100.0)
        .units("m"),
    FieldMeta::new(10, "total_cycles", &UINT32)
        .units("cycles")
        .subfields(&TOTAL_CYCLES_SUBFIELDS),
    FieldMeta::new(11, "total_calories", &UINT16).units("kcal"),
    FieldMeta::new(13, "avg_speed", &UINT16).scale(1000.0).units("m/s"),
    FieldMeta::new(14, "max_speed", &UINT16).scale(1000.0).units("m/s"),
    FieldMeta::new(15, "avg_heart_rate", &UINT8).units("bpm"),
    FieldMeta::new(16, "max_heart_rate", &UINT8).units("bpm"),
    FieldMeta::new(17, "avg_cadence", &UINT8)
        .units("rpm")
        .subfields(&AVG_CADENCE_SUBFIELDS),
    FieldMeta::new(18, "max_cadence", &UINT8)
        .units("rpm")
        .subfields(&MAX_CADENCE_SUBFIELDS),
    FieldMeta::new(19, "avg_power", &UINT16).units("watts"),
    FieldMeta::new(20, "max_power", &UINT16).units("watts"),
    FieldMeta::new(21, "total_ascent", &UINT16).units("m"),
    FieldMeta::new(22, "total_descent", &UINT16).units("m"),
    FieldMeta::new(24, "lap_trigger", &ENUM),
    FieldMeta::new(25, "sport", &ENUM),
    FieldMeta::new(39, "sub_sport", &ENUM),
];

static SESSION_FIELDS: [FieldMeta; 28] = [
    FieldMeta::new(254, "message_index", &UINT16),
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "event", &ENUM),
    FieldMeta::new(1, "event_type", &ENUM),
    FieldMeta::new(2, "start_time", &UINT32),
    FieldMeta::new(3, "start_position_lat", &SINT32).units("semicircles"),
    FieldMeta::new(4, "start_position_long", &SINT32).units("semicircles"),
    FieldMeta::new(5, "sport", &ENUM),
    FieldMeta::new(6, "sub_sport", &ENUM),
    FieldMeta::new(7, "total_elapsed_time", &UINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(8, "total_timer_time", &UINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(9, "total_distance", &UINT32)
        .scale(100.0)
        .units("m"),
    FieldMeta::new(10, "total_cycles", &UINT32)
        .units("cycles")
        .subfields(&TOTAL_CYCLES_SUBFIELDS),
    FieldMeta::new(11, "total_calories", &UINT16).units("kcal"),
    FieldMeta::new(14, "avg_speed", &UINT16).scale(1000.0).units("m/s"),
    FieldMeta::new(15, "max_speed", &UINT16).scale(1000.0).units("m/s"),
    FieldMeta::new(16, "avg_heart_rate", &UINT8).units("bpm"),
    FieldMeta::new(17, "max_heart_rate", &UINT8).units("bpm"),
    FieldMeta::new(18, "avg_cadence", &UINT8)
        .units("rpm")
        .subfields(&AVG_CADENCE_SUBFIELDS),
    FieldMeta::new(19, "max_cadence", &UINT8)
        .units("rpm")
        .subfields(&MAX_CADENCE_SUBFIELDS),
    FieldMeta::new(20, "avg_power", &UINT16).units("watts"),
    FieldMeta::new(21, "max_power", &UINT16).units("watts"),
    FieldMeta::new(22, "total_ascent", &UINT16).units("m"),
    FieldMeta::new(23, "total_descent", &UINT16).units("m"),
    FieldMeta::new(25, "first_lap_index", &UINT16),
    FieldMeta::new(26, "num_laps", &UINT16),
    FieldMeta::new(28, "trigger", &ENUM),
    FieldMeta::new(29, "nec_lat", &SINT32).units("semicircles"),
];

static ACTIVITY_FIELDS: [FieldMeta; 8] = [
    FieldMeta::new(253, "timestamp", &UINT32).units("s"),
    FieldMeta::new(0, "total_timer_time", &UINT32)
        .scale(1000.0)
        .units("s"),
    FieldMeta::new(1, "num_sessions", &UINT16),
    FieldMeta::new(2, "type", &ENUM),
    FieldMeta::new(3, "event", &ENUM),
    FieldMeta::new(4, "event_type", &ENUM),
    FieldMeta::new(5, "local_timestamp", &UINT32),
    FieldMeta::new(6, "event_group", &UINT8),
];

/// The enumeration whose codes a field holds, by field name.
fn enumeration(field: &str) -> Option<&'static [(u64, &'static str)]> {
    Some(match field {
        "manufacturer" => MANUFACTURER,
        "garmin_product" => GARMIN_PRODUCT,
        "sport" => SPORT,
        "sub_sport" => SUB_SPORT,
        "event" => EVENT,
        "event_type" => EVENT_TYPE,
        "lap_trigger" => LAP_TRIGGER,
        "trigger" => SESSION_TRIGGER,
        "timer_trigger" => TIMER_TRIGGER,
        "battery_status" => BATTERY_STATUS,
        "source_type" => SOURCE_TYPE,
        "antplus_device_type" => ANTPLUS_DEVICE_TYPE,
        _ => return None,
    })
}

static MANUFACTURER: &[(u64, &str)] = &[
    (1, "garmin"),
    (3, "zephyr"),
    (6, "srm"),
    (7, "quarq"),
    (9, "saris"),
    (13, "dynastream_oem"),
    (15, "dynastream"),
    (16, "timex"),
    (23, "suunto"),
    (32, "wahoo_fitness"),
    (40, "concept2"),
    (48, "pioneer"),
    (63, "specialized"),
    (68, "cateye"),
    (69, "stages_cycling"),
    (70, "sigmasport"),
    (71, "tomtom"),
    (86, "elite"),
    (89, "tacx"),
    (95, "stryd"),
    (123, "polar_electro"),
    (255, "development"),
    (260, "zwift"),
    (263, "favero_electronics"),
    (265, "strava"),
];

static GARMIN_PRODUCT: &[(u64, &str)] = &[
    (1, "hrm1"),
    (717, "fr405"),
    (1036, "edge500"),
    (1169, "edge800"),
    (1561, "edge510"),
    (1567, "edge810"),
    (20119, "training_center"),
    (65534, "connect"),
];

static SPORT: &[(u64, &str)] = &[
    (0, "generic"),
    (1, "running"),
    (2, "cycling"),
    (3, "transition"),
    (4, "fitness_equipment"),
    (5, "swimming"),
    (6, "basketball"),
    (7, "soccer"),
    (8, "tennis"),
    (9, "american_football"),
    (10, "training"),
    (11, "walking"),
    (12, "cross_country_skiing"),
    (13, "alpine_skiing"),
    (14, "snowboarding"),
    (15, "rowing"),
    (16, "mountaineering"),
    (17, "hiking"),
    (18, "multisport"),
    (19, "paddling"),
    (20, "flying"),
    (21, "e_biking"),
    (37, "stand_up_paddleboarding"),
    (254, "all"),
];

static SUB_SPORT: &[(u64, &str)] = &[
    (0, "generic"),
    (1, "treadmill"),
    (2, "street"),
    (3, "trail"),
    (4, "track"),
    (5, "spin"),
    (6, "indoor_cycling"),
    (7, "road"),
    (8, "mountain"),
    (9, "downhill"),
    (10, "recumbent"),
    (11, "cyclocross"),
    (12, "hand_cycling"),
    (13, "track_cycling"),
    (14, "indoor_rowing"),
    (15, "elliptical"),
    (16, "stair_climbing"),
    (17, "lap_swimming"),
    (18, "open_water"),
    (19, "flexibility_training"),
    (20, "strength_training"),
    (21, "warm_up"),
    (22, "match"),
    (23, "exercise"),
    (24, "challenge"),
    (25, "indoor_skiing"),
    (26, "cardio_training"),
    (27, "indoor_walking"),
    (28, "e_bike_fitness"),
    (45, "indoor_running"),
    (46, "gravel_cycling"),
    (58, "virtual_activity"),
    (254, "all"),
];

static EVENT: &[(u64, &str)] = &[
    (0, "timer"),
    (3, "workout"),
    (4, "workout_step"),
    (5, "power_down"),
    (6, "power_up"),
    (7, "off_course"),
    (8, "session"),
    (9, "lap"),
    (10, "course_point"),
    (11, "battery"),
    (12, "virtual_partner_pace"),
    (13, "hr_high_alert"),
    (14, "hr_low_alert"),
    (15, "speed_high_alert"),
    (16, "speed_low_alert"),
    (17, "cad_high_alert"),
    (18, "cad_low_alert"),
    (19, "power_high_alert"),
    (20, "power_low_alert"),
    (21, "recovery_hr"),
    (22, "battery_low"),
    (23, "time_duration_alert"),
    (24, "distance_duration_alert"),
    (25, "calorie_duration_alert"),
    (26, "activity"),
    (27, "fitness_equipment"),
    (28, "length"),
    (32, "user_marker"),
    (33, "sport_point"),
    (36, "calibration"),
    (42, "front_gear_change"),
    (43, "rear_gear_change"),
    (44, "rider_position_change"),
    (45, "elev_high_alert"),
    (46, "elev_low_alert"),
    (47, "comm_timeout"),
];

static EVENT_TYPE: &[(u64, &str)] = &[
    (0, "start"),
    (1, "stop"),
    (2, "consecutive_depreciated"),
    (3, "marker"),
    (4, "stop_all"),
    (5, "begin_depreciated"),
    (6, "end_depreciated"),
    (7, "end_all_depreciated"),
    (8, "stop_disable"),
    (9, "stop_disable_all"),
];

static LAP_TRIGGER: &[(u64, &str)] = &[
    (0, "manual"),
    (1, "time"),
    (2, "distance"),
    (3, "position_start"),
    (4, "position_lap"),
    (5, "position_waypoint"),
    (6, "position_marked"),
    (7, "session_end"),
    (8, "fitness_equipment"),
];

static SESSION_TRIGGER: &[(u64, &str)] = &[
    (0, "activity_end"),
    (1, "manual"),
    (2, "auto_multi_sport"),
    (3, "fitness_equipment"),
];

static TIMER_TRIGGER: &[(u64, &str)] = &[(0, "manual"), (1, "auto"), (2, "fitness_equipment")];

static BATTERY_STATUS: &[(u64, &str)] = &[
    (1, "new"),
    (2, "good"),
    (3, "ok"),
    (4, "low"),
    (5, "critical"),
    (6, "charging"),
    (7, "unknown"),
];

static SOURCE_TYPE: &[(u64, &str)] = &[
    (0, "ant"),
    (1, "antplus"),
    (2, "bluetooth"),
    (3, "bluetooth_low_energy"),
    (4, "wifi"),
    (5, "local"),
];

static ANTPLUS_DEVICE_TYPE: &[(u64, &str)] = &[
    (1, "antfs"),
    (11, "bike_power"),
    (12, "environment_sensor_legacy"),
    (15, "multi_sport_speed_distance"),
    (16, "control"),
    (17, "fitness_equipment"),
    (18, "blood_pressure"),
    (19, "geocache_node"),
    (20, "light_electric_vehicle"),
    (25, "env_sensor"),
    (26, "racquet"),
    (27, "control_hub"),
    (31, "muscle_oxygen"),
    (35, "bike_light_main"),
    (36, "bike_light_shared"),
    (38, "exd"),
    (40, "bike_radar"),
    (119, "weight_scale"),
    (120, "heart_rate"),
    (121, "bike_speed_cadence"),
    (122, "bike_cadence"),
    (123, "bike_speed"),
    (124, "stride_speed_distance"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sans::base::BaseType;

    #[test]
    fn message_numbers_are_unique() {
        for (i, message) in MESSAGES.iter().enumerate() {
            assert!(MESSAGES[i + 1..].iter().all(|m| m.number != message.number));

            for (j, field) in message.fields.iter().enumerate() {
                assert!(
                    message.fields[j + 1..].iter().all(|f| f.number != field.number),
                    "{}.{} is declared twice",
                    message.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn messages_resolve() {
        let record = Profile.message(20).unwrap();

        assert_eq!(record.name, "record");
        assert_eq!(record.field(3).unwrap().name, "heart_rate");
        assert_eq!(record.field(2).unwrap().offset, Some(500.0));
        assert!(record.field(200).is_none());
        assert!(Profile.message(0xFF00).is_none());
    }

    #[test]
    fn labels_resolve() {
        assert!(Profile.is_enumerated("sport"));
        assert!(!Profile.is_enumerated("heart_rate"));
        assert_eq!(Profile.label("sport", 2), Some("cycling"));
        assert_eq!(Profile.label("manufacturer", 1), Some("garmin"));
        assert_eq!(Profile.label("sport", 200), None);
        assert_eq!(Profile.label("heart_rate", 1), None);
    }

    #[test]
    fn subfield_references_exist() {
        for message in &MESSAGES {
            for field in message.fields {
                for subfield in field.subfields {
                    assert!(
                        message.fields.iter().any(|f| f.name == subfield.reference.field),
                        "{} references missing field {}",
                        subfield.name,
                        subfield.reference.field
                    );

                    // Subfields are read from the bytes of their parent.
                    assert_eq!(subfield.base_type.width, field.base_type.width);

                    for value in subfield.reference.values {
                        if let RefValue::Label(label) = value {
                            let reference = subfield.reference.field;
                            let known = enumeration(reference)
                                .is_some_and(|e| e.iter().any(|(_, l)| l == label));
                            assert!(known, "{reference} has no label {label}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn base_types_are_registered() {
        for message in &MESSAGES {
            for field in message.fields {
                assert_eq!(BaseType::from_name(field.base_type.name), Some(field.base_type));
            }
        }
    }
}
