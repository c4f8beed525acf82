//! The screening feature schema.
//!
//! An ordered list of the 25 field names the classifier was trained on. The
//! ordering is the sole contract between the request handler and the model
//! gateway: the handler places parsed values at the schema position of their
//! field name, and the model reads them back by index. Swapping two entries
//! here would silently corrupt every prediction, so the list is a compile-time
//! constant and never built dynamically.

/// Number of input features the classifier expects.
pub const FEATURE_COUNT: usize = 25;

/// Feature names in training order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "CONS_ALCOHOL",
    "RH_FACTOR",
    "SMOKER",
    "PLAN_PREGNANCY",
    "BLOOD_GROUP",
    "HAS_PREG_RISK",
    "TET_VACCINE",
    "IS_HEAD_FAMILY",
    "MARITAL_STATUS",
    "FOOD_INSECURITY",
    "NUM_ABORTIONS",
    "NUM_LIV_CHILDREN",
    "NUM_PREGNANCIES",
    "FAM_PLANNING",
    "TYPE_HOUSE",
    "HAS_FAM_INCOME",
    "LEVEL_SCHOOLING",
    "CONN_SEWER_NET",
    "NUM_RES_HOUSEHOLD",
    "HAS_FRU_TREE",
    "HAS_VEG_GARDEN",
    "FAM_INCOME",
    "HOUSING_STATUS",
    "WATER_TREATMENT",
    "AGE",
];

/// Schema position of a feature name, or `None` if the name is not part of
/// the schema.
pub fn position(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|&n| n == name)
}

/// Human-readable form label for a feature name: `NUM_LIV_CHILDREN` becomes
/// `Num Liv Children`.
pub fn display_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
