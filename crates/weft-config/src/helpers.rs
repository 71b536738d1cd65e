// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_theme() -> String {
    "mat".to_string()
}

pub(crate) fn default_public_path() -> String {
    "/".to_string()
}

pub(crate) fn default_framework_package() -> String {
    "quasar-framework".to_string()
}

pub(crate) fn default_minifier_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

pub(crate) fn default_compression_algorithm() -> String {
    "gzip".to_string()
}

pub(crate) fn default_compression_test() -> String {
    r"\.(js|css)$".to_string()
}

pub(crate) fn default_compression_threshold() -> u64 {
    10_240
}

pub(crate) fn default_min_ratio() -> f64 {
    0.8
}
