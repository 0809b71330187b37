use super::*;

#[test]
fn from_values_defaults() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_root, None);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_values_reads_port_and_site_root() {
    let config = ServerConfig::from_values(Some(" 8080 "), Some("target/site")).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root.as_deref(), Some("target/site"));
}

#[test]
fn from_values_blank_values_use_defaults() {
    let config = ServerConfig::from_values(Some(""), Some("  ")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_root, None);
}

#[test]
fn from_values_rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_values(Some("http"), None),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert!(ServerConfig::from_values(Some("70000"), None).is_err());
}
