//! HTTP client for the World Bank Open Data API.

use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::errors::{ErrorMessage, ErrorResponse, SERVER_ERROR_MESSAGE};
use crate::query::{CountryFilter, Filter, PageParams};
use crate::types::{
    Country, IncomeLevel, Indicator, IndicatorValue, IndicatorValueWithFootnote, Language,
    LendingType, PageSummary, PageSummaryWithLastUpdated, PageSummaryWithSource, Region, Source,
    Topic,
};
use crate::{Error, OutputFormat};

const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2/";
const USER_AGENT: &str = concat!("worldbank_api/", env!("CARGO_PKG_VERSION"));

/// Client for the World Bank Open Data API (v2).
///
/// Configuration is fixed at construction and the client keeps no other
/// state, so one instance can serve concurrent callers. Timeouts,
/// retries, and proxies are the transport's concern: inject a configured
/// [`reqwest::Client`] via [`Client::with_http_client`] to control them.
pub struct Client {
    /// Base URL for API requests. Must end with a trailing slash.
    base_url: String,
    /// Language code inserted into the path (`/v2/<lang>/...`) when set.
    language: Option<String>,
    format: OutputFormat,
    /// Callback prefix; required by, and only valid with, [`OutputFormat::JsonP`].
    prefix: Option<String>,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the production API, with a default
    /// transport (30-second timeout).
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self::with_http_client(http)
    }

    /// Creates a client that sends requests through the given transport.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: None,
            format: OutputFormat::default(),
            prefix: None,
            http,
        }
    }

    /// Points the client at a custom base URL, which must end with a
    /// trailing slash. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Localizes responses (`/v2/<lang>/...`), e.g. "es", "fr", "ja".
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Selects the response encoding. [`OutputFormat::JsonP`] also
    /// requires [`Client::with_prefix`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the JSONP callback prefix.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Builds the absolute URL for a resource path: base URL, optional
    /// language segment, then the `format` (and `prefix`) parameters.
    /// All configuration errors surface here, before any network call.
    fn request_url(&self, path: &str) -> Result<Url, Error> {
        if !self.base_url.ends_with('/') {
            return Err(Error::Validation(format!(
                "base URL must end with a trailing slash, got {:?}",
                self.base_url
            )));
        }
        if self.format == OutputFormat::JsonP && self.prefix.is_none() {
            return Err(Error::Validation("jsonP format requires a prefix".into()));
        }
        if self.prefix.is_some() && self.format != OutputFormat::JsonP {
            return Err(Error::Validation(
                "prefix is only valid with the jsonP format".into(),
            ));
        }

        let relative = match &self.language {
            Some(language) => format!("{language}/{path}"),
            None => path.to_string(),
        };
        let mut url = Url::parse(&format!("{}{relative}", self.base_url)).map_err(|e| {
            tracing::error!("invalid URL from base {:?} and path {relative:?}: {e}", self.base_url);
            Error::Validation(format!("invalid request URL: {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", &self.format.to_string());
            if let Some(prefix) = &self.prefix {
                pairs.append_pair("prefix", prefix);
            }
        }
        Ok(url)
    }

    /// Assembles a request with the fixed user agent and, when a body is
    /// supplied, its JSON encoding and content type. Pagination and
    /// filter encoders merge further query parameters onto the returned
    /// request's URL before it is executed.
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<reqwest::Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path)?;
        let mut request = reqwest::Request::new(method, url);
        request
            .headers_mut()
            .insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body)
                .map_err(|e| Error::Validation(format!("failed to encode request body: {e}")))?;
            request.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            *request.body_mut() = Some(encoded.into());
        }
        Ok(request)
    }

    /// Executes a request and decodes the response envelope.
    async fn execute<S, T>(&self, request: reqwest::Request) -> Result<(S, Vec<T>), Error>
    where
        S: DeserializeOwned,
        T: DeserializeOwned,
    {
        let url = request.url().clone();
        tracing::debug!("{} {url}", request.method());
        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::error!("request to {url} failed: {e}");
            Error::Transport(e)
        })?;

        let status = resp.status();
        if status.is_server_error() {
            tracing::error!("server error {status} from {url}");
            return Err(Error::Server {
                url: url.to_string(),
                status: status.as_u16(),
                message: SERVER_ERROR_MESSAGE,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body from {url}: {e}");
            Error::Transport(e)
        })?;
        decode_envelope(&url, status.as_u16(), &body)
    }

    async fn list<S, T>(&self, path: &str, pages: Option<&PageParams>) -> Result<(S, Vec<T>), Error>
    where
        S: DeserializeOwned,
        T: DeserializeOwned,
    {
        let mut request = self.new_request(Method::GET, path, None::<&()>)?;
        if let Some(pages) = pages {
            pages.add_to_url(request.url_mut())?;
        }
        self.execute(request).await
    }

    async fn get_one<S, T>(&self, path: &str) -> Result<(S, T), Error>
    where
        S: DeserializeOwned,
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::GET, path, None::<&()>)?;
        let url = request.url().clone();
        let (summary, mut records) = self.execute::<S, T>(request).await?;
        if records.is_empty() {
            tracing::error!("empty record list from {url}");
            return Err(Error::Decode {
                url: url.to_string(),
            });
        }
        Ok((summary, records.remove(0)))
    }

    async fn list_values<S, T>(
        &self,
        countries: &str,
        indicators: &str,
        source_id: Option<&str>,
        footnote: bool,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(S, Vec<T>), Error>
    where
        S: DeserializeOwned,
        T: DeserializeOwned,
    {
        let path = format!("countries/{countries}/indicators/{indicators}");
        let mut request = self.new_request(Method::GET, &path, None::<&()>)?;
        {
            let url = request.url_mut();
            if let Some(pages) = pages {
                pages.add_to_url(url)?;
            }
            if let Some(filter) = filter {
                filter.add_to_url(url)?;
            }
            let mut pairs = url.query_pairs_mut();
            if let Some(source_id) = source_id {
                pairs.append_pair("source", source_id);
            }
            if footnote {
                pairs.append_pair("footnote", "y");
            }
        }
        self.execute(request).await
    }

    /// Lists countries, optionally narrowed by region, income level, or
    /// lending type.
    pub async fn list_countries(
        &self,
        filter: Option<&CountryFilter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Country>), Error> {
        let mut request = self.new_request(Method::GET, "countries", None::<&()>)?;
        {
            let url = request.url_mut();
            if let Some(pages) = pages {
                pages.add_to_url(url)?;
            }
            if let Some(filter) = filter {
                filter.add_to_url(url);
            }
        }
        self.execute(request).await
    }

    /// Fetches a single country by ISO2/ISO3 code.
    pub async fn get_country(&self, id: &str) -> Result<(PageSummary, Country), Error> {
        self.get_one(&format!("countries/{id}")).await
    }

    pub async fn list_regions(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Region>), Error> {
        self.list("regions", pages).await
    }

    pub async fn get_region(&self, code: &str) -> Result<(PageSummary, Region), Error> {
        self.get_one(&format!("regions/{code}")).await
    }

    pub async fn list_sources(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Source>), Error> {
        self.list("sources", pages).await
    }

    pub async fn get_source(&self, id: &str) -> Result<(PageSummary, Source), Error> {
        self.get_one(&format!("sources/{id}")).await
    }

    pub async fn list_topics(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Topic>), Error> {
        self.list("topics", pages).await
    }

    pub async fn get_topic(&self, id: &str) -> Result<(PageSummary, Topic), Error> {
        self.get_one(&format!("topics/{id}")).await
    }

    pub async fn list_income_levels(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<IncomeLevel>), Error> {
        self.list("incomeLevels", pages).await
    }

    pub async fn get_income_level(&self, id: &str) -> Result<(PageSummary, IncomeLevel), Error> {
        self.get_one(&format!("incomeLevels/{id}")).await
    }

    pub async fn list_lending_types(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<LendingType>), Error> {
        self.list("lendingTypes", pages).await
    }

    pub async fn get_lending_type(&self, id: &str) -> Result<(PageSummary, LendingType), Error> {
        self.get_one(&format!("lendingTypes/{id}")).await
    }

    pub async fn list_languages(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Language>), Error> {
        self.list("languages", pages).await
    }

    pub async fn get_language(&self, code: &str) -> Result<(PageSummary, Language), Error> {
        self.get_one(&format!("languages/{code}")).await
    }

    pub async fn list_indicators(
        &self,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Indicator>), Error> {
        self.list("indicators", pages).await
    }

    pub async fn get_indicator(&self, id: &str) -> Result<(PageSummary, Indicator), Error> {
        self.get_one(&format!("indicators/{id}")).await
    }

    /// Lists the indicators grouped under a topic.
    pub async fn list_indicators_by_topic(
        &self,
        topic_id: &str,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummary, Vec<Indicator>), Error> {
        self.list(&format!("topics/{topic_id}/indicators"), pages).await
    }

    /// Lists observations of an indicator across all countries.
    pub async fn list_indicator_values(
        &self,
        indicator_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithSource, Vec<IndicatorValue>), Error> {
        self.list_values("all", indicator_id, None, false, filter, pages)
            .await
    }

    /// Like [`Client::list_indicator_values`], with per-observation
    /// footnotes.
    pub async fn list_indicator_values_with_footnote(
        &self,
        indicator_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithSource, Vec<IndicatorValueWithFootnote>), Error> {
        self.list_values("all", indicator_id, None, true, filter, pages)
            .await
    }

    /// Lists observations of an indicator for the given countries.
    /// Multiple country codes are joined with semicolons in the path.
    pub async fn list_indicator_values_by_countries(
        &self,
        country_ids: &[String],
        indicator_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithSource, Vec<IndicatorValue>), Error> {
        self.list_values(&country_ids.join(";"), indicator_id, None, false, filter, pages)
            .await
    }

    pub async fn list_indicator_values_by_countries_with_footnote(
        &self,
        country_ids: &[String],
        indicator_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithSource, Vec<IndicatorValueWithFootnote>), Error> {
        self.list_values(&country_ids.join(";"), indicator_id, None, true, filter, pages)
            .await
    }

    /// Lists observations of one or more indicators from a specific data
    /// source. The source scope also changes the summary shape: these
    /// responses carry the source's last-updated date.
    pub async fn list_indicator_values_by_source(
        &self,
        indicator_ids: &[String],
        source_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithLastUpdated, Vec<IndicatorValue>), Error> {
        self.list_values(
            "all",
            &indicator_ids.join(";"),
            Some(source_id),
            false,
            filter,
            pages,
        )
        .await
    }

    pub async fn list_indicator_values_by_source_with_footnote(
        &self,
        indicator_ids: &[String],
        source_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithLastUpdated, Vec<IndicatorValueWithFootnote>), Error> {
        self.list_values(
            "all",
            &indicator_ids.join(";"),
            Some(source_id),
            true,
            filter,
            pages,
        )
        .await
    }

    pub async fn list_indicator_values_by_countries_and_source(
        &self,
        country_ids: &[String],
        indicator_ids: &[String],
        source_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithLastUpdated, Vec<IndicatorValue>), Error> {
        self.list_values(
            &country_ids.join(";"),
            &indicator_ids.join(";"),
            Some(source_id),
            false,
            filter,
            pages,
        )
        .await
    }

    pub async fn list_indicator_values_by_countries_and_source_with_footnote(
        &self,
        country_ids: &[String],
        indicator_ids: &[String],
        source_id: &str,
        filter: Option<&Filter>,
        pages: Option<&PageParams>,
    ) -> Result<(PageSummaryWithLastUpdated, Vec<IndicatorValueWithFootnote>), Error> {
        self.list_values(
            &country_ids.join(";"),
            &indicator_ids.join(";"),
            Some(source_id),
            true,
            filter,
            pages,
        )
        .await
    }
}

/// Decodes a response body into either the error envelope or the
/// two-element success envelope.
///
/// The API reports HTTP 200 even for application-level failures, so the
/// two shapes can only be told apart by the body itself: a bare array of
/// `{id, key, value}` messages is the error form and is tried first; the
/// `[summary, records]` pair is the success form. Stateless, so
/// identical bodies always decode identically.
fn decode_envelope<S, T>(url: &Url, status: u16, body: &str) -> Result<(S, Vec<T>), Error>
where
    S: DeserializeOwned,
    T: DeserializeOwned,
{
    if let Ok(messages) = serde_json::from_str::<Vec<ErrorMessage>>(body) {
        if !messages.is_empty() {
            tracing::error!("API error from {url}: {}", messages[0].value);
            return Err(Error::Api(ErrorResponse {
                messages,
                url: url.to_string(),
                status,
            }));
        }
    }

    serde_json::from_str::<(S, Vec<T>)>(body).map_err(|e| {
        tracing::error!("failed to decode response from {url}: {e}");
        Error::Decode {
            url: url.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::decode_envelope;
    use crate::types::{Country, PageSummary};
    use crate::Error;

    const SUCCESS_BODY: &str = r#"[
        {"page":1,"pages":1,"per_page":"50","total":1},
        [{
            "id":"JPN","iso2Code":"JP","name":"Japan",
            "region":{"id":"EAS","iso2code":"Z4","value":"East Asia & Pacific"},
            "adminregion":{"id":"","iso2code":"","value":""},
            "incomeLevel":{"id":"HIC","iso2code":"XD","value":"High income"},
            "lendingType":{"id":"LNX","iso2code":"XX","value":"Not classified"},
            "capitalCity":"Tokyo","longitude":"139.77","latitude":"35.67"
        }]
    ]"#;

    const ERROR_BODY: &str =
        r#"[{"id":"120","key":"Invalid value","value":"The provided parameter value is not valid"}]"#;

    fn url() -> Url {
        Url::parse("https://example.org/v2/countries?format=json").unwrap()
    }

    #[test]
    fn success_envelope_decodes_summary_and_records() {
        let (summary, countries) =
            decode_envelope::<PageSummary, Country>(&url(), 200, SUCCESS_BODY).unwrap();
        assert_eq!(summary.per_page, 50);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].id, "JPN");
    }

    #[test]
    fn error_envelope_wins_over_success_decode() {
        let err = decode_envelope::<PageSummary, Country>(&url(), 200, ERROR_BODY).unwrap_err();
        match err {
            Error::Api(resp) => {
                assert_eq!(resp.status, 200);
                assert_eq!(resp.url, url().to_string());
                assert_eq!(resp.messages.len(), 1);
                assert_eq!(resp.messages[0].id, "120");
                assert_eq!(resp.messages[0].key, "Invalid value");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_a_decode_error() {
        let err = decode_envelope::<PageSummary, Country>(&url(), 200, "[]").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err =
            decode_envelope::<PageSummary, Country>(&url(), 200, "{not valid json}").unwrap_err();
        match err {
            Error::Decode { url: u } => assert_eq!(u, url().to_string()),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn decoding_is_idempotent() {
        let first = decode_envelope::<PageSummary, Country>(&url(), 200, SUCCESS_BODY).unwrap();
        let second = decode_envelope::<PageSummary, Country>(&url(), 200, SUCCESS_BODY).unwrap();
        assert_eq!(first, second);
    }
}
