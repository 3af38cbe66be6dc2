use reqwest::Url;
use std::fmt::Display;
use std::net::IpAddr;

/// An RPC url with removed secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// We have a provider URL like "https://eth-mainnet.alchemyapi.io/v2/<api-key>".
    /// Only the two-part domain survives, so it can be used as a log field or a metric label.
    /// It will fail on something like "foo.co.uk", but that's good enough for now.
    pub fn new(url: &str) -> Self {
        let host = Url::parse(url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "None".to_string());

        if host.trim_matches(['[', ']']).parse::<IpAddr>().is_ok() {
            return Self(host);
        }

        let mut iter = host.split('.');
        let domain2 = iter.next_back().unwrap_or("None");
        match iter.next_back() {
            Some(domain1) => Self(format!("{domain1}.{domain2}")),
            None => Self(domain2.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SafeUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SafeUrl;

    #[test]
    fn strips_api_key_and_subdomains() {
        let url = SafeUrl::new("https://eth-mainnet.alchemyapi.io/v2/secret-key");
        assert_eq!(url.as_str(), "alchemyapi.io");

        let url = SafeUrl::new("https://foo-bar.eth-mainnet.quiknode.pro/123123/");
        assert_eq!(url.to_string(), "quiknode.pro");
    }

    #[test]
    fn ip_hosts_and_garbage() {
        assert_eq!(SafeUrl::new("http://localhost:8545").as_str(), "localhost");
        assert_eq!(SafeUrl::new("http://127.0.0.1:8545/").as_str(), "127.0.0.1");
        assert_eq!(SafeUrl::new("not a url").as_str(), "None");
    }
}
