use actix_web::dev::ServiceRequest;

/// Extract the caller's address: X-Forwarded-For first, then the peer
/// address of the connection. The IPv6 loopback is reported in its IPv4
/// form so local logs read uniformly.
pub fn client_ip(req: &ServiceRequest) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let ip = match forwarded {
        Some(ip) => ip.to_string(),
        None => req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    };

    normalize_loopback(ip)
}

fn normalize_loopback(ip: String) -> String {
    if ip == "::1" || ip == "0:0:0:0:0:0:0:1" {
        "127.0.0.1".to_string()
    } else {
        ip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_for_header_wins_over_peer_address() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.9, 10.0.0.1"))
            .peer_addr("192.0.2.1:40000".parse().unwrap())
            .to_srv_request();

        assert_eq!(client_ip(&req), "203.0.113.9");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let req = TestRequest::default()
            .peer_addr("192.0.2.1:40000".parse().unwrap())
            .to_srv_request();

        assert_eq!(client_ip(&req), "192.0.2.1");
    }

    #[test]
    fn ipv6_loopback_is_normalized() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "::1"))
            .to_srv_request();

        assert_eq!(client_ip(&req), "127.0.0.1");

        let req = TestRequest::default()
            .peer_addr("[::1]:40000".parse().unwrap())
            .to_srv_request();

        assert_eq!(client_ip(&req), "127.0.0.1");
    }

    #[test]
    fn empty_forwarded_header_is_ignored() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", ""))
            .peer_addr("192.0.2.7:40000".parse().unwrap())
            .to_srv_request();

        assert_eq!(client_ip(&req), "192.0.2.7");
    }
}
