use std::net::Ipv4Addr;

use super::*;

#[test]
fn parses_ip_and_port() {
    let target: Target = "127.0.0.1:1053".parse().unwrap();
    assert_eq!(target.ip, Ipv4Addr::LOCALHOST);
    assert_eq!(target.port, 1053);
    assert_eq!(target.to_string(), "127.0.0.1:1053");
    assert_eq!(target.socket_addr().to_string(), "127.0.0.1:1053");
}

#[test]
fn default_target_parses() {
    assert!(DEFAULT_TARGET.parse::<Target>().is_ok());
}

#[test]
fn port_boundaries() {
    assert_eq!("10.0.0.1:0".parse::<Target>().unwrap().port, 0);
    assert_eq!("10.0.0.1:65535".parse::<Target>().unwrap().port, 65535);
    assert!("10.0.0.1:65536".parse::<Target>().is_err());
}

#[test]
fn rejects_malformed_targets() {
    insta::assert_snapshot!(
        "localhost".parse::<Target>().unwrap_err().to_string(),
        @"bad target `localhost`: expected `ip:port`"
    );
    insta::assert_snapshot!(
        "example.com:53".parse::<Target>().unwrap_err().to_string(),
        @"bad target `example.com:53`: `example.com` is not an IPv4 address"
    );
    insta::assert_snapshot!(
        "1.2.3.4:dns".parse::<Target>().unwrap_err().to_string(),
        @"bad target `1.2.3.4:dns`: `dns` is not a port number"
    );
    assert!(matches!(
        "1.2.3:53".parse::<Target>(),
        Err(TargetError::InvalidAddress(..))
    ));
}
