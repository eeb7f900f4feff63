/// Strips a `:port` suffix from a `Host` header value, if present.
pub fn host_without_port(host: &str) -> &str {
    match host.split_once(':') {
        Some((host, _port)) => host,
        None => host,
    }
}

/// Derives the broadest cookie `Domain` value worth targeting for `host`:
/// the last two labels with a leading dot (`a.b.example.com` -> `.example.com`).
///
/// Hosts with fewer than two labels (`localhost`) come back verbatim, since
/// there is no parent to widen to. This is a two-label approximation of the
/// registrable domain, not a public-suffix lookup, so hosts under multi-label
/// suffixes like `co.uk` get a parent that is too broad for browsers to
/// accept. See DESIGN.md.
pub fn parent_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() >= 2 {
        format!(".{}", labels[labels.len() - 2..].join("."))
    } else {
        host.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_without_port_strips_port() {
        assert_eq!(host_without_port("app.example.com:8443"), "app.example.com");
        assert_eq!(host_without_port("localhost:8000"), "localhost");
    }

    #[test]
    fn host_without_port_leaves_bare_hosts() {
        assert_eq!(host_without_port("app.example.com"), "app.example.com");
    }

    #[test]
    fn parent_domain_of_subdomain() {
        assert_eq!(parent_domain("app.example.com"), ".example.com");
    }

    #[test]
    fn parent_domain_of_deep_subdomain() {
        // Two-label approximation, even when the true registrable domain
        // would need more labels.
        assert_eq!(parent_domain("a.b.c.example.com"), ".example.com");
    }

    #[test]
    fn parent_domain_of_apex() {
        assert_eq!(parent_domain("example.com"), ".example.com");
    }

    #[test]
    fn parent_domain_of_single_label_host() {
        assert_eq!(parent_domain("localhost"), "localhost");
    }
}
