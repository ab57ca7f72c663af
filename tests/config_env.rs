//! Environment fallbacks. Kept in its own test binary so the variables set
//! here cannot leak into the default-value checks in `tests/config.rs`.

use clap::Parser;
use person_store::{Config, LogFormat};
use std::path::PathBuf;

// One test function: the process environment is shared between test threads.
#[test]
fn env_vars_fill_in_missing_flags() {
    std::env::set_var("PERSON_STORE_DB_PATH", "/srv/people/env.json");
    std::env::set_var("PERSON_STORE_ADDR", "0.0.0.0:9100");
    std::env::set_var("PERSON_STORE_PRETTY", "true");
    std::env::set_var("PERSON_STORE_LOG_FORMAT", "json");

    let cfg = Config::try_parse_from(["person-store"]).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/srv/people/env.json"));
    assert_eq!(cfg.addr.to_string(), "0.0.0.0:9100");
    assert!(cfg.pretty);
    assert_eq!(cfg.log_format, LogFormat::Json);
    cfg.validate().unwrap();

    // an explicit flag still wins over the environment
    let cfg = Config::try_parse_from(["person-store", "--db-path", "flag.json"]).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("flag.json"));
    assert_eq!(cfg.log_format, LogFormat::Json);

    std::env::set_var("PERSON_STORE_PRETTY", "false");
    let cfg = Config::try_parse_from(["person-store"]).unwrap();
    assert!(!cfg.pretty);

    std::env::set_var("PERSON_STORE_LOG_FORMAT", "xml");
    assert!(Config::try_parse_from(["person-store"]).is_err());

    for var in [
        "PERSON_STORE_DB_PATH",
        "PERSON_STORE_ADDR",
        "PERSON_STORE_PRETTY",
        "PERSON_STORE_LOG_FORMAT",
    ] {
        std::env::remove_var(var);
    }
}
