//! Social network classification of URLs.
//!
//! Classification runs against a declarative table of `(network, host suffixes)`
//! over a single normalized host (scheme added when missing, lowercased, leading
//! `www.` stripped). A URL matching none of the networks is a `website`.

use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

use super::url_syntax::parse_loose;

/// Kind of account a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountType {
    Twitter,
    Facebook,
    LinkedIn,
    Instagram,
    Pinterest,
    Tumblr,
    YouTube,
    Alibaba,
    GitHub,
    /// Catch-all for URLs matching no known network
    Website,
}

/// A classified URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLink {
    pub url: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

// Fixed order; domains don't overlap, so order only affects how results are grouped.
const NETWORK_HOSTS: &[(AccountType, &[&str])] = &[
    (AccountType::Twitter, &["twitter.com"]),
    (AccountType::Facebook, &["facebook.com"]),
    (AccountType::LinkedIn, &["linkedin.com"]),
    (AccountType::Instagram, &["instagram.com"]),
    (AccountType::Pinterest, &["pinterest.com"]),
    (AccountType::Tumblr, &["tumblr.com"]),
    (AccountType::YouTube, &["youtube.com"]),
    (AccountType::Alibaba, &["alibaba.com"]),
    (AccountType::GitHub, &["github.com"]),
];

/// Extracts the lowercased host of a URL without a leading `www.`.
fn normalized_host(url: &str) -> Option<String> {
    let parsed = parse_loose(url.trim())?;
    let host = parsed.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    })
}

fn host_matches(host: &str, suffix: &str) -> bool {
    host == suffix
        || host
            .strip_suffix(suffix)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Classifies a URL as one of the nine known networks, or `Website`.
///
/// # Examples
///
/// ```
/// use profile_extract::classify::{classify_url, AccountType};
///
/// assert_eq!(classify_url("https://github.com/zach"), AccountType::GitHub);
/// assert_eq!(classify_url("www.twitter.com/zach"), AccountType::Twitter);
/// assert_eq!(classify_url("zach.dev"), AccountType::Website);
/// ```
pub fn classify_url(url: &str) -> AccountType {
    let Some(host) = normalized_host(url) else {
        return AccountType::Website;
    };
    NETWORK_HOSTS
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|suffix| host_matches(&host, suffix)))
        .map(|(network, _)| *network)
        .unwrap_or(AccountType::Website)
}

/// Splits URLs into network accounts and plain websites.
///
/// Returns `(accounts, websites)`. Accounts are grouped in the fixed network
/// order (text order within a network); websites keep text order. Every URL
/// lands in exactly one of the two lists.
pub fn partition_urls(urls: &[String]) -> (Vec<AccountLink>, Vec<AccountLink>) {
    let classified: Vec<(&String, AccountType)> =
        urls.iter().map(|url| (url, classify_url(url))).collect();

    let accounts = NETWORK_HOSTS
        .iter()
        .flat_map(|(network, _)| {
            classified
                .iter()
                .filter(move |(_, kind)| kind == network)
                .map(|(url, kind)| AccountLink {
                    url: (*url).clone(),
                    account_type: *kind,
                })
        })
        .collect();

    let websites = classified
        .iter()
        .filter(|(_, kind)| *kind == AccountType::Website)
        .map(|(url, _)| AccountLink {
            url: (*url).clone(),
            account_type: AccountType::Website,
        })
        .collect();

    (accounts, websites)
}
