use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpResolutionError {
    #[error("address {addr:?}: {reason}")]
    AddressParse { addr: String, reason: &'static str },
}

/// Best-effort origin address of a request.
///
/// A non-empty `X-Forwarded-For` value is trusted and returned verbatim,
/// whatever proxy chain it describes. Otherwise the host part of the
/// transport peer address is used.
pub fn resolve_client_ip(
    forwarded_for: Option<&str>,
    peer_addr: &str,
) -> Result<String, IpResolutionError> {
    if let Some(source) = forwarded_for.filter(|value| !value.is_empty()) {
        return Ok(source.to_string());
    }
    split_host(peer_addr).map(str::to_string)
}

/// Split `host:port` or `[host]:port` and return the host.
fn split_host(addr: &str) -> Result<&str, IpResolutionError> {
    let fail = |reason| IpResolutionError::AddressParse {
        addr: addr.to_string(),
        reason,
    };

    let colon = addr.rfind(':').ok_or_else(|| fail("missing port in address"))?;

    let host = if let Some(rest) = addr.strip_prefix('[') {
        let end = rest.find(']').ok_or_else(|| fail("missing ']' in address"))?;
        // Brackets must close right before the port separator.
        let close = end + 1;
        if close + 1 != colon {
            return Err(fail(if close + 1 == addr.len() {
                "missing port in address"
            } else {
                "too many colons in address"
            }));
        }
        &rest[..end]
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return Err(fail("too many colons in address"));
        }
        host
    };

    if host.contains(['[', ']']) || addr[colon + 1..].contains(['[', ']']) {
        return Err(fail("unexpected bracket in address"));
    }
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_wins_over_peer() {
        assert_eq!(
            resolve_client_ip(Some("203.0.113.5"), "198.51.100.7:54321").unwrap(),
            "203.0.113.5"
        );
    }

    #[test]
    fn forwarded_chain_is_kept_verbatim() {
        assert_eq!(
            resolve_client_ip(Some("203.0.113.5, 10.0.0.1"), "").unwrap(),
            "203.0.113.5, 10.0.0.1"
        );
    }

    #[test]
    fn empty_forwarded_header_falls_back_to_peer() {
        assert_eq!(
            resolve_client_ip(Some(""), "198.51.100.7:54321").unwrap(),
            "198.51.100.7"
        );
    }

    #[test]
    fn peer_port_is_discarded() {
        assert_eq!(
            resolve_client_ip(None, "198.51.100.7:54321").unwrap(),
            "198.51.100.7"
        );
        assert_eq!(resolve_client_ip(None, "[::1]:8080").unwrap(), "::1");
        assert_eq!(resolve_client_ip(None, "localhost:80").unwrap(), "localhost");
    }

    #[test]
    fn peer_without_port_is_an_error() {
        for addr in ["", "198.51.100.7", "::1", "[::1]", "[::1]x:80", "a]:80"] {
            assert!(
                resolve_client_ip(None, addr).is_err(),
                "address {addr:?} should not resolve"
            );
        }
    }
}
