use std::net::IpAddr;

/// Reverse-zone query name for `ip`: `d.c.b.a.in-addr.arpa` for IPv4, the 32
/// nibble-reversed hex digits under `ip6.arpa` for IPv6. `None` if `ip` does not parse.
pub fn reverse_name(ip: &str) -> Option<String> {
    let addr: IpAddr = ip.trim().parse().ok()?;
    let name = match addr {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}.in-addr.arpa")
        }
        IpAddr::V6(v6) => {
            let mut labels = Vec::with_capacity(33);
            for byte in v6.octets().iter().rev() {
                labels.push(format!("{:x}", byte & 0x0f));
                labels.push(format!("{:x}", byte >> 4));
            }
            labels.push("ip6.arpa".to_string());
            labels.join(".")
        }
    };
    Some(name)
}
