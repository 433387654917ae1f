//! Built-in domain list.

/// Domains tested when no domain file is given.
pub const DEFAULT_DOMAINS: &[&str] = &[
    // Popular tech & social media
    "google.com",
    "facebook.com",
    "youtube.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "reddit.com",
    "tiktok.com",
    "pinterest.com",
    "discord.com",
    // E-commerce
    "amazon.com",
    "ebay.com",
    "walmart.com",
    "etsy.com",
    "shopify.com",
    "aliexpress.com",
    // Tech companies
    "microsoft.com",
    "apple.com",
    "intel.com",
    "amd.com",
    "nvidia.com",
    "oracle.com",
    "ibm.com",
    "cisco.com",
    "dell.com",
    // Streaming
    "netflix.com",
    "disney.com",
    "spotify.com",
    "twitch.tv",
    "hulu.com",
    "hbomax.com",
    // Cloud & infrastructure
    "aws.amazon.com",
    "cloud.google.com",
    "azure.microsoft.com",
    "cloudflare.com",
    "digitalocean.com",
    "github.com",
    "gitlab.com",
    // News
    "cnn.com",
    "bbc.com",
    "nytimes.com",
    "reuters.com",
    "bloomberg.com",
    // Productivity
    "office.com",
    "slack.com",
    "zoom.us",
    "dropbox.com",
    "salesforce.com",
    // Education & reference
    "wikipedia.org",
    "stackoverflow.com",
    "udemy.com",
    "coursera.org",
    "edx.org",
    // Banking
    "paypal.com",
    "chase.com",
    "wellsfargo.com",
    "bankofamerica.com",
    // CDN
    "akamai.com",
    "fastly.com",
    "cdn.jsdelivr.net",
    "unpkg.com",
];

/// The built-in list as owned strings.
#[must_use]
pub fn default_domains() -> Vec<String> {
    DEFAULT_DOMAINS.iter().map(|d| (*d).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domains() {
        let domains = default_domains();
        assert_eq!(domains.len(), 61);
        assert!(domains.iter().all(|d| !d.is_empty() && d.trim() == d));
        assert_eq!(domains[0], "google.com");
    }
}
