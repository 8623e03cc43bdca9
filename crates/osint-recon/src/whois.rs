//! WHOIS lookup integration using whois-rust.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use osint_core::DomainRecord;
use std::collections::HashSet;
use tracing::debug;
use whois_rust::{WhoIs, WhoIsLookupOptions, WhoIsServerValue};

use crate::config::{bounded, ReconConfig};
use crate::error::{ReconError, ReconResult};

/// Embedded TLD to server map, node-whois format
const SERVER_LIST: &str = include_str!("whois_servers.json");

/// Root server consulted for TLDs missing from the map
const IANA_WHOIS: &str = "whois.iana.org";

/// Output layout for normalized WHOIS dates
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Registry replies that mean the domain is not registered
const NOT_FOUND_MARKERS: [&str; 6] = [
    "no match for",
    "not found",
    "no data found",
    "no entries found",
    "no object found",
    "status: free",
];

/// WHOIS client
pub struct WhoisClient {
    whois: WhoIs,
    suffixes: HashSet<String>,
    referral_server: String,
    timeout_secs: Option<u64>,
}

impl WhoisClient {
    /// Create a new WHOIS client
    pub fn new(config: &ReconConfig) -> ReconResult<Self> {
        // Load from embedded server list
        let whois = WhoIs::from_string(SERVER_LIST).map_err(whois_error)?;
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(SERVER_LIST).map_err(|e| ReconError::Whois(e.to_string()))?;

        Ok(Self {
            whois,
            suffixes: map.into_iter().map(|(key, _)| key).filter(|key| key != "_").collect(),
            referral_server: IANA_WHOIS.to_string(),
            timeout_secs: config.whois_timeout_secs,
        })
    }

    /// Use another root server for TLDs missing from the map
    #[must_use]
    pub fn referral_server(mut self, host: impl Into<String>) -> Self {
        self.referral_server = host.into();
        self
    }

    /// Whether the embedded map names a server for `domain` or one of its
    /// parent suffixes.
    pub fn has_server_for(&self, domain: &str) -> bool {
        let domain = domain.trim_end_matches('.').to_ascii_lowercase();
        let mut suffix = domain.as_str();
        loop {
            if self.suffixes.contains(suffix) {
                return true;
            }
            match suffix.split_once('.') {
                Some((_, parent)) => suffix = parent,
                None => return false,
            }
        }
    }

    /// Lookup WHOIS information for a domain
    pub async fn lookup_domain(&self, domain: &str) -> ReconResult<DomainRecord> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(ReconError::Validation("Domain"));
        }

        debug!(domain, "WHOIS query");
        let raw = bounded(self.timeout_secs, self.query(domain)).await?;

        parse_whois_response(domain, &raw)
    }

    async fn query(&self, domain: &str) -> ReconResult<String> {
        let mut options = WhoIsLookupOptions::from_string(domain).map_err(whois_error)?;

        if !self.has_server_for(domain) {
            let server = self.iana_referral(domain).await?;
            debug!(domain, %server, "following IANA referral");
            options.server = Some(WhoIsServerValue::from_string(&server).map_err(whois_error)?);
        }

        self.whois.lookup_async(options).await.map_err(whois_error)
    }

    /// Ask the root server which registry serves the domain's TLD
    async fn iana_referral(&self, domain: &str) -> ReconResult<String> {
        let mut options = WhoIsLookupOptions::from_string(domain).map_err(whois_error)?;
        options.server =
            Some(WhoIsServerValue::from_string(&self.referral_server).map_err(whois_error)?);
        options.follow = 0;

        let reply = self.whois.lookup_async(options).await.map_err(whois_error)?;
        parse_referral(&reply)
            .map(str::to_string)
            .ok_or_else(|| ReconError::Whois(format!("IANA has no WHOIS referral for {domain}")))
    }
}

fn whois_error(err: whois_rust::WhoIsError) -> ReconError {
    ReconError::Whois(err.to_string())
}

/// Server named on the `refer:` line of a root-server reply.
pub fn parse_referral(reply: &str) -> Option<&str> {
    reply.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        (key.trim().eq_ignore_ascii_case("refer") && !value.is_empty()).then_some(value)
    })
}

/// Record fields recognised in a reply
#[derive(Debug, Clone, Copy)]
enum Field {
    Registrar,
    Created,
    Expires,
    NameServer,
    Status,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "registrar" | "sponsoring registrar" | "registrar name" => Self::Registrar,
            "creation date" | "created" | "registered on" | "registration time" => Self::Created,
            "expiration date"
            | "expires"
            | "expiry date"
            | "registry expiry date"
            | "registrar registration expiration date"
            | "paid-till" => Self::Expires,
            "name server" | "name servers" | "nserver" | "nameserver" | "nameservers" => {
                Self::NameServer
            }
            "status" | "domain status" | "state" | "registration status" => Self::Status,
            _ => return None,
        })
    }
}

/// Parse raw WHOIS response into a domain record.
///
/// Registries and registrars both answer when a referral is followed, so
/// scalar fields keep their first value and list fields are deduplicated.
/// A key with an empty value takes the more-indented lines below it
/// (Nominet layout).
pub fn parse_whois_response(domain: &str, raw: &str) -> ReconResult<DomainRecord> {
    let mut record = DomainRecord::new(domain);
    let mut status = Vec::new();
    // Field awaiting continuation lines, with its key's indent
    let mut pending: Option<(Field, usize)> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending = None;
            continue;
        }
        if trimmed.starts_with('%') || trimmed.starts_with('#') || trimmed.starts_with(">>>") {
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        if let Some((field, key_indent)) = pending {
            if indent > key_indent {
                apply(&mut record, &mut status, field, trimmed);
                continue;
            }
            pending = None;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let Some(field) = Field::from_key(&key.trim().to_lowercase()) else {
            continue;
        };

        let value = value.trim();
        if value.is_empty() {
            pending = Some((field, indent));
        } else {
            apply(&mut record, &mut status, field, value);
        }
    }

    if !status.is_empty() {
        record.status = Some(status);
    }

    if record.is_empty() {
        let lower = raw.to_lowercase();
        if NOT_FOUND_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return Err(ReconError::Whois(format!("No WHOIS record found for {domain}")));
        }
    }

    Ok(record)
}

fn apply(record: &mut DomainRecord, status: &mut Vec<String>, field: Field, value: &str) {
    match field {
        Field::Registrar => {
            record.registrar.get_or_insert_with(|| value.to_string());
        }
        Field::Created => {
            record
                .creation_date
                .get_or_insert_with(|| normalize_date(value));
        }
        Field::Expires => {
            record
                .expiration_date
                .get_or_insert_with(|| normalize_date(value));
        }
        Field::NameServer => {
            let ns = value.split_whitespace().next().unwrap_or(value);
            if !record
                .name_servers
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ns))
            {
                record.name_servers.push(ns.to_string());
            }
        }
        Field::Status => {
            if !status.iter().any(|known| known == value) {
                status.push(value.to_string());
            }
        }
    }
}

/// Render a WHOIS date as `YYYY-MM-DD HH:MM:SS`, or pass it through unchanged.
fn normalize_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.naive_utc().format(DATE_FORMAT).to_string();
    }

    for layout in ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, layout) {
            return dt.format(DATE_FORMAT).to_string();
        }
    }

    for layout in ["%Y-%m-%d", "%Y.%m.%d", "%d-%b-%Y", "%d.%m.%Y"] {
        if let Some(dt) = NaiveDate::parse_from_str(value, layout)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return dt.format(DATE_FORMAT).to_string();
        }
    }

    value.to_string()
}
