use phf::phf_map;

/// unit -> (target unit -> multiplier). Both directions are listed explicitly.
pub type RateMap = phf::Map<&'static str, phf::Map<&'static str, f64>>;

pub static IMPERIAL_LENGTHS: RateMap = phf_map! {
    "feet" => phf_map! {
        "inches" => 12.0,
        "yards" => 0.333333,
    },
    "inches" => phf_map! {
        "feet" => 0.0833333,
        "yards" => 0.0277778,
    },
    "yards" => phf_map! {
        "feet" => 3.0,
        "inches" => 36.0,
    },
};

pub static METRIC_LENGTHS_ES: RateMap = phf_map! {
    "metros" => phf_map! {
        "centímetros" => 100.0,
        "kilómetros" => 0.001,
    },
    "centímetros" => phf_map! {
        "metros" => 0.01,
        "kilómetros" => 0.00001,
    },
    "kilómetros" => phf_map! {
        "metros" => 1000.0,
        "centímetros" => 100000.0,
    },
};
