use std::env;

#[derive(Clone)]
pub struct Config {
    pub zones_json: Option<String>,
    pub zones_file: String,
    pub sops_bin: String,
    pub yq_bin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            zones_json: env::var("DNS_ZONES_JSON").ok(),
            zones_file: env::var("DNS_ZONES_FILE")
                .unwrap_or_else(|_| "dns_zones.enc.yaml".to_string()),
            sops_bin: env::var("SOPS_BIN").unwrap_or_else(|_| "sops".to_string()),
            yq_bin: env::var("YQ_BIN").unwrap_or_else(|_| "yq".to_string()),
        }
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                zones_json: None,
                zones_file: String::from("tests/fixtures/dns_zones.enc.yaml"),
                sops_bin: String::from("sops"),
                yq_bin: String::from("yq"),
            }
        }
    }
}
