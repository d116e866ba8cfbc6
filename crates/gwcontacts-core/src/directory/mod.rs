//! Directory listing through the People API.

mod model;

pub use model::{EmailAddress, ListDirectoryPeopleResponse, Name, Nickname, Person};

use gwcontacts_oauth::AuthorizedClient;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::{Error, Result};

/// Production People API endpoint.
pub const PEOPLE_API_BASE_URL: &str = "https://people.googleapis.com";

/// Maximum page size accepted by `listDirectoryPeople`.
pub const PAGE_SIZE: u32 = 1000;

/// Merge contact entries into matching directory profiles.
pub const MERGE_SOURCE: &str = "DIRECTORY_MERGE_SOURCE_TYPE_CONTACT";

/// Directory sources to list.
pub const SOURCES: [&str; 2] = [
    "DIRECTORY_SOURCE_TYPE_DOMAIN_PROFILE",
    "DIRECTORY_SOURCE_TYPE_DOMAIN_CONTACT",
];

/// Person fields requested for every entry.
///
/// The API rejects requests without a read mask, so the whole set is asked
/// for even though only names, nicknames and email addresses are used.
pub const READ_MASK: [&str; 29] = [
    "addresses",
    "ageRanges",
    "biographies",
    "birthdays",
    "calendarUrls",
    "clientData",
    "coverPhotos",
    "emailAddresses",
    "events",
    "externalIds",
    "genders",
    "imClients",
    "interests",
    "locales",
    "locations",
    "memberships",
    "metadata",
    "miscKeywords",
    "names",
    "nicknames",
    "occupations",
    "organizations",
    "phoneNumbers",
    "photos",
    "relations",
    "sipAddresses",
    "skills",
    "urls",
    "userDefined",
];

/// Google API error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Client for the organization directory.
#[derive(Debug)]
pub struct DirectoryClient {
    client: AuthorizedClient,
    base_url: Url,
}

impl DirectoryClient {
    /// Creates a client against the production People API.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(client: AuthorizedClient) -> Result<Self> {
        Self::with_base_url(client, PEOPLE_API_BASE_URL)
    }

    /// Creates a client against another People API endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_base_url(client: AuthorizedClient, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Builds the `listDirectoryPeople` request URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed.
    pub fn list_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/v1/people:listDirectoryPeople",
            self.base_url.as_str().trim_end_matches('/')
        ))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("mergeSources", MERGE_SOURCE)
                .append_pair("pageSize", &PAGE_SIZE.to_string());
            for source in SOURCES {
                pairs.append_pair("sources", source);
            }
            pairs.append_pair("readMask", &READ_MASK.join(","));
        }

        Ok(url)
    }

    /// Fetches the directory.
    ///
    /// Only the first page of up to [`PAGE_SIZE`] entries is requested; a
    /// larger directory is truncated and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn list_directory_people(&mut self) -> Result<Vec<Person>> {
        let url = self.list_url()?;
        info!("Requesting directory...");

        let response = self.client.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = response.text().await?;
        let listing: ListDirectoryPeopleResponse = serde_json::from_str(&body)?;
        if listing.next_page_token.is_some() {
            warn!(
                "Directory has more than {PAGE_SIZE} entries; only the first page was fetched"
            );
        }

        info!("Received {} directory entries", listing.people.len());
        Ok(listing.people)
    }
}

/// Extracts a single-line message from an error response body.
fn api_error_message(body: &str) -> String {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.to_string());

    message.split_whitespace().collect::<Vec<_>>().join(" ")
}
