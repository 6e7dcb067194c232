//! User agent sniffing for touch-first devices

const MOBILE_MARKERS: [&str; 6] = ["android", "webos", "iphone", "ipad", "ipod", "blackberry"];

/// Whether the user agent belongs to a phone or tablet; pointer-only effects are skipped there
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"
        ));
        assert!(is_mobile_user_agent("BlackBerry9700/5.0.0.862"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)"));
    }

    #[test]
    fn test_desktop_agents() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0"
        ));
        assert!(!is_mobile_user_agent(""));
    }
}
